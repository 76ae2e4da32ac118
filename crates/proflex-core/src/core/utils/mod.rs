//! Static residue knowledge shared across the library.
//!
//! The tables in this module encode fixed facts about the twenty standard
//! amino acids (name conversions and physicochemical scales) as compile-time
//! perfect hash maps.

pub mod tables;
