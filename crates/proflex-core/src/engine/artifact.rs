use super::forest::{ForestValidationError, RandomForest};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use thiserror::Error;

/// Leading bytes of every ProFlex model artifact.
pub const MAGIC: [u8; 4] = *b"PFRF";

/// Artifact format version this build reads and writes.
pub const FORMAT_VERSION: u16 = 1;

#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to decode model artifact '{path}': {source}")]
    Decode {
        path: String,
        source: bincode::Error,
    },
    #[error("File '{path}' is not a ProFlex model artifact (bad magic bytes)")]
    BadMagic { path: String },
    #[error("Model artifact '{path}' has format version {found}; this build supports {supported}")]
    UnsupportedVersion {
        path: String,
        found: u16,
        supported: u16,
    },
    #[error("Model artifact '{path}' is structurally invalid: {source}")]
    Invalid {
        path: String,
        source: ForestValidationError,
    },
}

/// On-disk representation of a serialized random-forest model.
///
/// The artifact wraps the forest with magic bytes and a format version so an
/// incompatible or foreign file is rejected with a precise error instead of
/// a garbled forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    magic: [u8; 4],
    version: u16,
    forest: RandomForest,
}

impl ModelArtifact {
    /// Wraps a forest in the current artifact format.
    pub fn new(forest: RandomForest) -> Self {
        Self {
            magic: MAGIC,
            version: FORMAT_VERSION,
            forest,
        }
    }

    /// Loads and validates a model from an artifact file.
    ///
    /// The file is opened for binary read within this call and released
    /// before it returns.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the artifact file.
    ///
    /// # Return
    ///
    /// Returns the validated forest contained in the artifact.
    ///
    /// # Errors
    ///
    /// Returns [`ModelLoadError::Io`] when the file is missing or unreadable,
    /// [`ModelLoadError::Decode`] when the bytes are not a well-formed
    /// artifact, and the magic/version/validation variants when the file was
    /// produced by an incompatible writer.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<RandomForest, ModelLoadError> {
        Ok(Self::read(path)?.forest)
    }

    /// Reads and validates a whole artifact, keeping its format metadata.
    ///
    /// Same validation and error contract as [`ModelArtifact::load`]; use
    /// this when the artifact header itself is of interest.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<ModelArtifact, ModelLoadError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let file = File::open(&path).map_err(|e| ModelLoadError::Io {
            path: path_str.clone(),
            source: e,
        })?;
        let reader = BufReader::new(file);

        let artifact: ModelArtifact =
            bincode::deserialize_from(reader).map_err(|e| ModelLoadError::Decode {
                path: path_str.clone(),
                source: e,
            })?;

        if artifact.magic != MAGIC {
            return Err(ModelLoadError::BadMagic { path: path_str });
        }
        if artifact.version != FORMAT_VERSION {
            return Err(ModelLoadError::UnsupportedVersion {
                path: path_str,
                found: artifact.version,
                supported: FORMAT_VERSION,
            });
        }
        artifact
            .forest
            .validate()
            .map_err(|e| ModelLoadError::Invalid {
                path: path_str,
                source: e,
            })?;
        Ok(artifact)
    }

    /// Writes the artifact to a file.
    ///
    /// # Errors
    ///
    /// Returns [`ModelLoadError::Io`] when the file cannot be created and
    /// [`ModelLoadError::Decode`] when encoding fails.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ModelLoadError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let file = File::create(&path).map_err(|e| ModelLoadError::Io {
            path: path_str.clone(),
            source: e,
        })?;
        let writer = BufWriter::new(file);
        bincode::serialize_into(writer, self).map_err(|e| ModelLoadError::Decode {
            path: path_str,
            source: e,
        })
    }

    pub fn forest(&self) -> &RandomForest {
        &self.forest
    }

    pub fn version(&self) -> u16 {
        self.version
    }
}
