use thiserror::Error;

use crate::core::io::fasta::FastaError;
use crate::core::io::pdb::PdbError;
use crate::core::models::sequence::SequenceParseError;
use crate::engine::artifact::ModelLoadError;
use crate::engine::config::ConfigError;
use crate::engine::features::FeatureKind;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid sequence: {source}")]
    Sequence {
        #[from]
        source: SequenceParseError,
    },

    #[error("Failed to read structure file '{path}': {source}")]
    StructureRead {
        path: String,
        #[source]
        source: PdbError,
    },

    #[error("Invalid FASTA input: {source}")]
    Fasta {
        #[from]
        source: FastaError,
    },

    #[error(transparent)]
    ModelLoad(#[from] ModelLoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Model '{name}' targets {model_kind} features and cannot score {input} input")]
    ModelKindMismatch {
        name: String,
        model_kind: FeatureKind,
        input: &'static str,
    },

    #[error("Model '{name}' declares {declared} features but the extractor produced {actual}")]
    FeatureWidthMismatch {
        name: String,
        declared: usize,
        actual: usize,
    },

    #[error("Structure contains no standard protein residue with an alpha carbon")]
    NoProteinResidues,

    #[error("Internal logic error: {0}")]
    Internal(String),
}
