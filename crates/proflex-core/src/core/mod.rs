//! # Core Module
//!
//! This module provides the fundamental building blocks for protein flexibility
//! prediction in ProFlex, serving as the stateless foundation of the library.
//!
//! ## Overview
//!
//! The core module implements the data structures and utilities required to
//! represent proteins in both of their input forms, a validated amino-acid
//! sequence or a three-dimensional molecular structure, together with the
//! file-format readers that produce them.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different
//! aspects of protein representation:
//!
//! - **Molecular Representation** ([`models`]) - Data structures for sequences, atoms, residues, chains, and systems
//! - **File I/O** ([`io`]) - Reading the PDB structure format and FASTA sequence files
//! - **Residue Knowledge** ([`utils`]) - Static residue property tables and name conversions
//!
//! ## Key Capabilities
//!
//! - **Validated sequence representation** rejecting non-amino-acid input
//! - **Complete molecular system representation** with efficient slotmap storage
//! - **Column-accurate PDB parsing** with line-level diagnostics
//! - **Static physicochemical property tables** for all twenty standard residues

pub mod io;
pub mod models;
pub mod utils;
