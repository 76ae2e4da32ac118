//! # Workflows Module
//!
//! This module provides the high-level, user-facing entry points of ProFlex.
//!
//! ## Overview
//!
//! Workflows tie the `core` and `engine` layers together behind a simple API.
//! The [`predict::Protein`] entity is constructed from either a raw
//! amino-acid sequence or a structure file, and exposes prediction with the
//! built-in baseline model or an externally loaded random forest. The
//! [`batch`] workflow runs sequence prediction over every record of a FASTA
//! file with progress reporting.
//!
//! ## Key Capabilities
//!
//! - **End-to-end prediction** from raw input to per-residue scores
//! - **Explicit model control** with a well-defined built-in default
//! - **Batch processing** with per-record failure collection
//! - **Error handling** with typed diagnostics for every failure point

pub mod batch;
pub mod predict;
