use crate::core::io::fasta::{self, FastaRecord};
use crate::engine::config::PredictionConfig;
use crate::engine::error::EngineError;
use crate::engine::forest::RandomForest;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::workflows::predict::{Prediction, Protein};
use std::path::Path;
use tracing::{info, instrument, warn};

/// A successfully predicted record of a batch run.
#[derive(Debug, Clone)]
pub struct BatchEntry {
    /// The FASTA record identifier.
    pub id: String,
    pub prediction: Prediction,
}

/// A record that could not be predicted.
///
/// Failures carry the offending record's identifier so callers can report
/// them without aborting the rest of the batch.
#[derive(Debug)]
pub struct BatchFailure {
    pub id: String,
    pub error: EngineError,
}

/// The outcome of a batch run over many sequences.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub entries: Vec<BatchEntry>,
    pub failures: Vec<BatchFailure>,
}

impl BatchResult {
    pub fn total(&self) -> usize {
        self.entries.len() + self.failures.len()
    }
}

/// Predicts flexibility for every record, skipping over invalid ones.
///
/// # Arguments
///
/// * `records` - The FASTA records to score.
/// * `model` - An optional shared model; `None` selects the baseline per record.
/// * `config` - Feature extraction parameters applied to every record.
/// * `reporter` - Receives one `TaskIncrement` per processed record.
///
/// # Return
///
/// A [`BatchResult`] splitting the records into predictions and failures.
/// Per-record errors are collected, not propagated.
#[instrument(skip_all, name = "batch_prediction", fields(records = records.len()))]
pub fn run(
    records: &[FastaRecord],
    model: Option<&RandomForest>,
    config: &PredictionConfig,
    reporter: &ProgressReporter,
) -> BatchResult {
    let mut result = BatchResult::default();
    reporter.report(Progress::TaskStart {
        total_steps: records.len() as u64,
    });

    for record in records {
        let outcome = Protein::from_sequence(&record.sequence)
            .and_then(|protein| protein.predict_with_config(model, config));
        match outcome {
            Ok(prediction) => result.entries.push(BatchEntry {
                id: record.id.clone(),
                prediction,
            }),
            Err(error) => {
                warn!(id = %record.id, %error, "Skipping record after prediction failure.");
                reporter.report(Progress::Message(format!(
                    "Skipped '{}': {}",
                    record.id, error
                )));
                result.failures.push(BatchFailure {
                    id: record.id.clone(),
                    error,
                });
            }
        }
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    info!(
        predicted = result.entries.len(),
        failed = result.failures.len(),
        "Batch prediction finished."
    );
    result
}

/// Reads a FASTA file and predicts flexibility for every record in it.
///
/// # Errors
///
/// Returns [`EngineError::Fasta`] when the file itself cannot be read or
/// parsed; per-record errors end up in the returned [`BatchResult`].
pub fn run_fasta_file<P: AsRef<Path>>(
    path: P,
    model: Option<&RandomForest>,
    config: &PredictionConfig,
    reporter: &ProgressReporter,
) -> Result<BatchResult, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Reading FASTA input",
    });
    let records = fasta::read_records_from_path(path)?;
    reporter.report(Progress::PhaseFinish);
    Ok(run(&records, model, config, reporter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::baseline;
    use crate::engine::features::FeatureKind;
    use std::io::Write;
    use std::sync::Mutex;

    fn record(id: &str, sequence: &str) -> FastaRecord {
        FastaRecord {
            id: id.to_string(),
            description: id.to_string(),
            sequence: sequence.to_string(),
        }
    }

    #[test]
    fn predicts_all_valid_records() {
        let records = vec![record("a", "ADTRYPG"), record("b", "FFFAACC")];
        let result = run(
            &records,
            None,
            &PredictionConfig::default(),
            &ProgressReporter::new(),
        );
        assert_eq!(result.entries.len(), 2);
        assert!(result.failures.is_empty());
        assert_eq!(result.entries[0].id, "a");
        assert_eq!(result.entries[0].prediction.scores.len(), 7);
    }

    #[test]
    fn collects_failures_without_aborting() {
        let records = vec![
            record("good", "ADTRYPG"),
            record("bad", "ADTB"),
            record("also_good", "GGG"),
        ];
        let result = run(
            &records,
            None,
            &PredictionConfig::default(),
            &ProgressReporter::new(),
        );
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].id, "bad");
        assert_eq!(result.total(), 3);
    }

    #[test]
    fn incompatible_model_fails_every_record() {
        let records = vec![record("a", "ADTRYPG")];
        let model = baseline::forest(FeatureKind::StructureProfile);
        let result = run(
            &records,
            Some(&model),
            &PredictionConfig::default(),
            &ProgressReporter::new(),
        );
        assert!(result.entries.is_empty());
        assert!(matches!(
            result.failures[0].error,
            EngineError::ModelKindMismatch { .. }
        ));
    }

    #[test]
    fn reports_one_increment_per_record() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        let records = vec![record("a", "ADTRYPG"), record("b", "ADTB")];
        run(&records, None, &PredictionConfig::default(), &reporter);
        drop(reporter);

        let seen = events.into_inner().unwrap();
        assert!(matches!(seen[0], Progress::TaskStart { total_steps: 2 }));
        let increments = seen
            .iter()
            .filter(|e| matches!(e, Progress::TaskIncrement))
            .count();
        assert_eq!(increments, 2);
        assert!(matches!(seen.last(), Some(Progress::TaskFinish)));
    }

    #[test]
    fn failed_records_are_reported_as_messages() {
        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        let records = vec![record("bad", "ADTB")];
        run(&records, None, &PredictionConfig::default(), &reporter);
        drop(reporter);

        let seen = events.into_inner().unwrap();
        let message = seen
            .iter()
            .find_map(|e| match e {
                Progress::Message(text) => Some(text.clone()),
                _ => None,
            })
            .expect("failure should surface as a progress message");
        assert!(message.contains("bad"));
    }

    #[test]
    fn fasta_reading_is_bracketed_by_a_phase() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.fasta");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, ">seq1\nADTRYPG\n").unwrap();
        drop(file);

        let events = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            events.lock().unwrap().push(event);
        }));
        run_fasta_file(&path, None, &PredictionConfig::default(), &reporter).unwrap();
        drop(reporter);

        let seen = events.into_inner().unwrap();
        assert!(matches!(seen[0], Progress::PhaseStart { .. }));
        assert!(matches!(seen[1], Progress::PhaseFinish));
        assert!(matches!(seen[2], Progress::TaskStart { total_steps: 1 }));
    }

    #[test]
    fn run_fasta_file_reads_and_predicts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.fasta");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, ">seq1\nADTRYPG\n>seq2\nFFF\nAACC\n").unwrap();
        drop(file);

        let result =
            run_fasta_file(&path, None, &PredictionConfig::default(), &ProgressReporter::new())
                .unwrap();
        assert_eq!(result.entries.len(), 2);
        assert_eq!(result.entries[1].prediction.scores.len(), 7);
    }

    #[test]
    fn run_fasta_file_propagates_unreadable_input() {
        let result = run_fasta_file(
            "/no/such/input.fasta",
            None,
            &PredictionConfig::default(),
            &ProgressReporter::new(),
        );
        assert!(matches!(result, Err(EngineError::Fasta { .. })));
    }
}
