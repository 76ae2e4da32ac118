//! Provides input functionality for molecular and sequence file formats.
//!
//! This module contains implementations for reading the file formats ProFlex
//! accepts as prediction input: the PDB structure format and FASTA sequence
//! files. It provides a unified trait-based interface for structure file
//! reading.

pub mod fasta;
pub mod pdb;
pub mod traits;
