use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// A single FASTA record: header identifier plus raw sequence text.
///
/// The sequence is kept as the concatenated raw text; validation against the
/// amino-acid alphabet happens when a record is turned into a
/// [`crate::core::models::sequence::ProteinSequence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    /// The text after '>' up to the first whitespace.
    pub id: String,
    /// The full header line after '>'.
    pub description: String,
    /// Sequence lines concatenated, whitespace removed.
    pub sequence: String,
}

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Sequence data on line {line} appears before any '>' header")]
    MissingHeader { line: usize },
    #[error("Record '{id}' has no sequence data")]
    EmptyRecord { id: String },
    #[error("File contains no FASTA records")]
    Empty,
}

/// Reads all records of a FASTA file.
///
/// # Arguments
///
/// * `reader` - The buffered reader to read from.
///
/// # Errors
///
/// Returns an error for sequence data before the first header, records with
/// no sequence lines, or files without any records.
pub fn read_records(reader: &mut impl BufRead) -> Result<Vec<FastaRecord>, FastaError> {
    let mut records: Vec<FastaRecord> = Vec::new();

    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('>') {
            if let Some(last) = records.last() {
                if last.sequence.is_empty() {
                    return Err(FastaError::EmptyRecord {
                        id: last.id.clone(),
                    });
                }
            }
            let description = header.trim().to_string();
            let id = description
                .split_whitespace()
                .next()
                .unwrap_or("")
                .to_string();
            records.push(FastaRecord {
                id,
                description,
                sequence: String::new(),
            });
        } else {
            match records.last_mut() {
                Some(record) => {
                    record
                        .sequence
                        .extend(trimmed.chars().filter(|c| !c.is_whitespace()));
                }
                None => {
                    return Err(FastaError::MissingHeader { line: line_num + 1 });
                }
            }
        }
    }

    match records.last() {
        None => return Err(FastaError::Empty),
        Some(last) if last.sequence.is_empty() => {
            return Err(FastaError::EmptyRecord {
                id: last.id.clone(),
            });
        }
        Some(_) => {}
    }
    Ok(records)
}

/// Reads all records of a FASTA file from a path.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed.
pub fn read_records_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>, FastaError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    read_records(&mut reader)
}
