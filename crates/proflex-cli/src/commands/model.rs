use crate::cli::{ModelArgs, ModelCommands};
use crate::error::{CliError, Result};
use proflex::engine::artifact::ModelArtifact;
use proflex::engine::baseline;
use proflex::engine::error::EngineError;
use proflex::engine::features::FeatureKind;
use std::path::Path;
use tracing::info;

pub fn run(args: ModelArgs) -> Result<()> {
    match args.command {
        ModelCommands::Inspect { path } => handle_inspect(&path),
        ModelCommands::WriteBaseline { kind, path } => handle_write_baseline(&kind, &path),
    }
}

fn handle_inspect(path: &Path) -> Result<()> {
    info!("Inspecting model artifact at {:?}", path);
    let artifact = ModelArtifact::read(path).map_err(EngineError::from)?;
    let forest = artifact.forest();

    println!("Model artifact: {}", path.display());
    println!("  Name:           {}", forest.name());
    println!("  Feature kind:   {}", forest.kind());
    println!("  Features:       {}", forest.feature_count());
    println!("  Trees:          {}", forest.tree_count());
    println!("  Format version: {}", artifact.version());
    Ok(())
}

fn handle_write_baseline(kind: &str, path: &Path) -> Result<()> {
    let kind: FeatureKind = kind
        .parse()
        .map_err(|e: proflex::engine::features::ParseFeatureKindError| {
            CliError::Argument(e.to_string())
        })?;

    let forest = baseline::forest(kind);
    info!("Writing '{}' baseline to {:?}", forest.name(), path);
    ModelArtifact::new(forest).save(path).map_err(EngineError::from)?;

    println!("✓ Baseline model written to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ModelCommands;

    #[test]
    fn write_baseline_then_inspect_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("baseline.pfrf");

        run(ModelArgs {
            command: ModelCommands::WriteBaseline {
                kind: "sequence-profile".to_string(),
                path: path.clone(),
            },
        })
        .unwrap();

        let forest = ModelArtifact::load(&path).unwrap();
        assert_eq!(forest.kind(), FeatureKind::SequenceProfile);

        run(ModelArgs {
            command: ModelCommands::Inspect { path },
        })
        .unwrap();
    }

    #[test]
    fn unknown_kind_is_an_argument_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(ModelArgs {
            command: ModelCommands::WriteBaseline {
                kind: "gradient-boosting".to_string(),
                path: dir.path().join("out.pfrf"),
            },
        });
        assert!(matches!(result, Err(CliError::Argument(_))));
    }

    #[test]
    fn inspecting_a_missing_file_fails() {
        let result = run(ModelArgs {
            command: ModelCommands::Inspect {
                path: "/no/such/model.pfrf".into(),
            },
        });
        assert!(matches!(result, Err(CliError::Core(_))));
    }
}
