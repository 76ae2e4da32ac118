//! Feature extraction for flexibility prediction.
//!
//! Every model operates on one of the fixed feature layouts declared by
//! [`FeatureKind`]. The per-kind extractors live in [`sequence`] and
//! [`structure`]; both produce a [`FeatureMatrix`] whose width matches the
//! kind's declared feature count, which models verify before inference.

pub mod sequence;
pub mod structure;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifies a feature layout a model was trained against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    /// Per-residue physicochemical features derived from the sequence alone.
    SequenceProfile,
    /// Per-residue geometric features derived from atomic coordinates.
    StructureProfile,
    /// Structure-wide column means of the structure profile; one row, one score.
    StructureMeans,
}

impl FeatureKind {
    /// The declared width of feature rows for this kind.
    pub fn feature_count(&self) -> usize {
        match self {
            FeatureKind::SequenceProfile => sequence::FEATURE_COUNT,
            FeatureKind::StructureProfile | FeatureKind::StructureMeans => {
                structure::FEATURE_COUNT
            }
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FeatureKind::SequenceProfile => "sequence-profile",
                FeatureKind::StructureProfile => "structure-profile",
                FeatureKind::StructureMeans => "structure-means",
            }
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "Unknown feature kind '{0}'. Expected 'sequence-profile', 'structure-profile', or 'structure-means'."
)]
pub struct ParseFeatureKindError(String);

impl FromStr for FeatureKind {
    type Err = ParseFeatureKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sequence-profile" | "sequence" => Ok(FeatureKind::SequenceProfile),
            "structure-profile" | "structure" => Ok(FeatureKind::StructureProfile),
            "structure-means" | "means" => Ok(FeatureKind::StructureMeans),
            _ => Err(ParseFeatureKindError(s.to_string())),
        }
    }
}

/// A fixed-width matrix of feature rows, one row per scored unit.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    width: usize,
    rows: Vec<Vec<f64>>,
}

impl FeatureMatrix {
    /// Creates an empty matrix with the given row width.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    ///
    /// # Panics
    ///
    /// Panics if the row length differs from the matrix width; extractors
    /// construct rows of their declared width by design, so a mismatch is a
    /// programming error, not an input error.
    pub fn push_row(&mut self, row: Vec<f64>) {
        assert_eq!(
            row.len(),
            self.width,
            "feature row length must match matrix width"
        );
        self.rows.push(row);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Collapses the matrix to a single row of column means.
    ///
    /// Returns an empty matrix of the same width when there are no rows.
    pub fn column_means(&self) -> FeatureMatrix {
        let mut means = FeatureMatrix::new(self.width);
        if self.rows.is_empty() {
            return means;
        }
        let mut sums = vec![0.0; self.width];
        for row in &self.rows {
            for (sum, value) in sums.iter_mut().zip(row) {
                *sum += value;
            }
        }
        let n = self.rows.len() as f64;
        means.push_row(sums.into_iter().map(|s| s / n).collect());
        means
    }
}
