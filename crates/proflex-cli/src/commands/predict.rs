use crate::cli::PredictArgs;
use crate::config;
use crate::error::Result;
use crate::output;
use crate::utils::progress::CliProgressHandler;
use proflex::engine::artifact::ModelArtifact;
use proflex::engine::error::EngineError;
use proflex::engine::forest::RandomForest;
use proflex::engine::progress::ProgressReporter;
use proflex::workflows::{batch, predict::Protein};
use std::path::Path;
use tracing::{info, warn};

pub fn run(args: PredictArgs) -> Result<()> {
    let prediction_config = config::resolve(&args)?;

    let model = match &args.model {
        Some(path) => {
            info!("Loading model artifact from {:?}", path);
            Some(ModelArtifact::load(path).map_err(EngineError::from)?)
        }
        None => None,
    };

    if let Some(path) = &args.input.fasta {
        return run_batch(&args, path, model.as_ref(), &prediction_config);
    }

    let protein = if let Some(sequence) = &args.input.sequence {
        Protein::from_sequence(sequence)?
    } else if let Some(path) = &args.input.structure {
        info!("Loading input structure from {:?}", path);
        Protein::from_structure_file(path)?
    } else {
        unreachable!("clap argument group guarantees one input form");
    };

    let prediction = protein.predict_with_config(model.as_ref(), &prediction_config)?;

    match &args.output {
        Some(path) => {
            output::write_prediction_csv(std::fs::File::create(path)?, &prediction)?;
            println!("✓ Results written to: {}", path.display());
        }
        None => output::print_prediction(&prediction),
    }
    Ok(())
}

fn run_batch(
    args: &PredictArgs,
    fasta_path: &Path,
    model: Option<&RandomForest>,
    config: &proflex::engine::config::PredictionConfig,
) -> Result<()> {
    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Running batch prediction over {:?}", fasta_path);
    let result = batch::run_fasta_file(fasta_path, model, config, &reporter)?;

    if !result.failures.is_empty() {
        warn!(
            "{} of {} record(s) could not be predicted.",
            result.failures.len(),
            result.total()
        );
    }

    match &args.output {
        Some(path) => {
            output::write_batch_csv(std::fs::File::create(path)?, &result)?;
            println!(
                "✓ Results for {} record(s) written to: {}",
                result.entries.len(),
                path.display()
            );
            for failure in &result.failures {
                eprintln!("  Skipped '{}': {}", failure.id, failure.error);
            }
        }
        None => output::print_batch(&result),
    }
    Ok(())
}
