use crate::error::Result;
use proflex::workflows::batch::BatchResult;
use proflex::workflows::predict::Prediction;
use std::io::Write;

/// Writes one prediction as CSV with a `chain,residue,amino_acid,score` header.
pub fn write_prediction_csv<W: Write>(writer: W, prediction: &Prediction) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["chain", "residue", "amino_acid", "score"])?;
    for score in &prediction.scores {
        csv_writer.write_record([
            score.chain_id.map(String::from).unwrap_or_default(),
            score.residue_number.to_string(),
            score.amino_acid.one_letter().to_string(),
            format!("{:.4}", score.score),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes a batch result as CSV, one row per residue across all records.
pub fn write_batch_csv<W: Write>(writer: W, result: &BatchResult) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["id", "residue", "amino_acid", "score"])?;
    for entry in &result.entries {
        for score in &entry.prediction.scores {
            csv_writer.write_record([
                entry.id.clone(),
                score.residue_number.to_string(),
                score.amino_acid.one_letter().to_string(),
                format!("{:.4}", score.score),
            ])?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}

/// Prints a prediction as a human-readable table on stdout.
pub fn print_prediction(prediction: &Prediction) {
    println!(
        "Model: {} ({}, {} trees)",
        prediction.model.name, prediction.model.kind, prediction.model.tree_count
    );
    if prediction.scores.is_empty() {
        println!("Structure-wide flexibility score: {:.4}", prediction.global_score);
        return;
    }

    println!("{:<6} {:<8} {:<4} {:>8}", "Chain", "Residue", "AA", "Score");
    for score in &prediction.scores {
        println!(
            "{:<6} {:<8} {:<4} {:>8.4}",
            score.chain_id.map(String::from).unwrap_or_else(|| "-".to_string()),
            score.residue_number,
            score.amino_acid.one_letter(),
            score.score
        );
    }
    println!("Mean flexibility score: {:.4}", prediction.global_score);
}

/// Prints a per-record summary of a batch run on stdout.
pub fn print_batch(result: &BatchResult) {
    println!("{:<24} {:<10} {:>8}", "Record", "Residues", "Mean");
    for entry in &result.entries {
        println!(
            "{:<24} {:<10} {:>8.4}",
            entry.id,
            entry.prediction.scores.len(),
            entry.prediction.global_score
        );
    }
    for failure in &result.failures {
        println!("{:<24} failed: {}", failure.id, failure.error);
    }
}
