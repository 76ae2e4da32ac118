//! # ProFlex Core Library
//!
//! A library for per-residue protein flexibility prediction, driven by
//! random-forest regression models applied to sequence-derived or
//! structure-derived features.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear separation of concerns,
//! making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`ProteinSequence`,
//!   `MolecularSystem`), static residue property tables, and I/O for the PDB and
//!   FASTA file formats.
//!
//! - **[`engine`]: The Logic Core.** Turns proteins into feature matrices, runs
//!   random-forest inference over them, and manages serialized model artifacts,
//!   prediction configuration, and progress reporting.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer.
//!   It ties the `engine` and `core` together behind the [`workflows::predict::Protein`]
//!   entity and the single/batch prediction entry points.

pub mod core;
pub mod engine;
pub mod workflows;
