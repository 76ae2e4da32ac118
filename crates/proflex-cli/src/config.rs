use crate::cli::PredictArgs;
use crate::error::{CliError, Result};
use proflex::engine::config::{PredictionConfig, PredictionConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// The optional `[prediction]` section of a TOML config file.
///
/// Every field is optional; CLI flags override file values, and the core
/// defaults fill whatever remains.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct PartialPredictionConfig {
    pub window: Option<usize>,
    #[serde(rename = "contact-radius")]
    pub contact_radius: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    prediction: PartialPredictionConfig,
}

impl PartialPredictionConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        let file: ConfigFile = toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        debug!("Loaded configuration file: {:?}", file.prediction);
        Ok(file.prediction)
    }

    /// Resolves the final configuration: CLI flags beat file values.
    pub fn merge_with_cli(&self, args: &PredictArgs) -> Result<PredictionConfig> {
        let mut builder = PredictionConfigBuilder::new();
        if let Some(window) = args.window.or(self.window) {
            builder = builder.window(window);
        }
        if let Some(radius) = args.contact_radius.or(self.contact_radius) {
            builder = builder.contact_radius(radius);
        }
        builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }
}

/// Builds the effective configuration for a `predict` invocation.
pub fn resolve(args: &PredictArgs) -> Result<PredictionConfig> {
    let partial = match &args.config {
        Some(path) => PartialPredictionConfig::from_file(path)?,
        None => PartialPredictionConfig::default(),
    };
    partial.merge_with_cli(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::PredictInput;
    use std::io::Write;

    fn args() -> PredictArgs {
        PredictArgs {
            input: PredictInput {
                sequence: Some("ADT".to_string()),
                structure: None,
                fasta: None,
            },
            model: None,
            config: None,
            output: None,
            window: None,
            contact_radius: None,
        }
    }

    #[test]
    fn defaults_apply_when_nothing_is_given() {
        let config = resolve(&args()).unwrap();
        assert_eq!(config, PredictionConfig::default());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proflex.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "[prediction]\nwindow = 4\ncontact-radius = 10.0\n").unwrap();
        drop(file);

        let mut args = args();
        args.config = Some(path);
        let config = resolve(&args).unwrap();
        assert_eq!(config.window, 4);
        assert_eq!(config.contact_radius, 10.0);
    }

    #[test]
    fn cli_flags_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proflex.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "[prediction]\nwindow = 4\n").unwrap();
        drop(file);

        let mut args = args();
        args.config = Some(path);
        args.window = Some(7);
        let config = resolve(&args).unwrap();
        assert_eq!(config.window, 7);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("proflex.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "[prediction]\nwindoow = 4\n").unwrap();
        drop(file);

        let mut args = args();
        args.config = Some(path);
        assert!(matches!(resolve(&args), Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn invalid_merged_values_are_reported() {
        let mut args = args();
        args.window = Some(0);
        assert!(matches!(resolve(&args), Err(CliError::Config(_))));
    }
}
