//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent
//! proteins in ProFlex, in both their sequence and structure forms.
//!
//! ## Overview
//!
//! The models module defines the core abstractions for representing protein
//! input, including amino acids, atoms, residues, chains, and their
//! organization into complete systems. These models are designed to:
//!
//! - **Represent protein input** - Validated sequences and complete atomic structures
//! - **Support efficient operations** - Slotmap-backed storage with stable IDs
//! - **Maintain type safety** - Strong typing for residue identity and properties
//!
//! ## Key Components
//!
//! - [`sequence`] - Validated amino-acid sequences and per-residue properties
//! - [`atom`] - Individual atom representation with coordinates and PDB fields
//! - [`residue`] - Residue structure and amino-acid classification
//! - [`chain`] - Chain organization and classification
//! - [`system`] - Complete molecular system with all components
//! - [`ids`] - Unique identifier types for atoms, residues, and chains

pub mod atom;
pub mod chain;
pub mod ids;
pub mod residue;
pub mod sequence;
pub mod system;
