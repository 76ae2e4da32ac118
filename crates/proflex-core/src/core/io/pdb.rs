use crate::core::io::traits::StructureFile;
use crate::core::models::atom::Atom;
use crate::core::models::chain::ChainType;
use crate::core::models::system::MolecularSystem;
use crate::core::utils::tables;
use nalgebra::Point3;
use std::collections::HashSet;
use std::io::{self, BufRead};
use thiserror::Error;

/// Non-coordinate records preserved while reading a PDB file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdbMetadata {
    /// HEADER/TITLE/REMARK and other unrecognized record lines, in file order.
    pub header_lines: Vec<String>,
    /// Set when the file contained more than one MODEL; only the first is read.
    pub truncated_to_first_model: bool,
}

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
    #[error("Inconsistent data: {0}")]
    Inconsistency(String),
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: String },
    #[error("Line is too short for ATOM/HETATM record (must cover the coordinate columns)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn parse_float(line: &str, line_num: usize, start: usize, end: usize) -> Result<f64, PdbError> {
    let value = slice_and_trim(line, start, end);
    value.parse().map_err(|_| PdbError::Parse {
        line: line_num,
        kind: PdbParseErrorKind::InvalidFloat {
            columns: format!("{}-{}", start + 1, end),
            value: value.into(),
        },
    })
}

fn parse_optional_float(line: &str, default: f64, start: usize, end: usize) -> f64 {
    let value = slice_and_trim(line, start, end);
    if value.is_empty() {
        default
    } else {
        value.parse().unwrap_or(default)
    }
}

/// Reader for the fixed-column PDB structure format.
///
/// Reads ATOM and HETATM coordinate records from the first MODEL of a file.
/// Alternate locations other than blank or 'A' are skipped so each atom
/// appears exactly once. Chains are classified from their first record:
/// ATOM records open protein chains; HETATM records open water or ligand
/// chains depending on the residue name.
pub struct PdbFile;

impl StructureFile for PdbFile {
    type Metadata = PdbMetadata;
    type Error = PdbError;

    fn read_from(
        reader: &mut impl BufRead,
    ) -> Result<(MolecularSystem, Self::Metadata), Self::Error> {
        let mut system = MolecularSystem::new();
        let mut metadata = PdbMetadata::default();
        let mut seen_serials = HashSet::new();
        let mut first_model_done = false;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            let record_type = slice_and_trim(&line, 0, 6);
            match record_type {
                "ATOM" | "HETATM" => {
                    if first_model_done {
                        metadata.truncated_to_first_model = true;
                        break;
                    }
                    if line.len() < 54 {
                        return Err(PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::LineTooShort,
                        });
                    }

                    let serial_str = slice_and_trim(&line, 6, 11);
                    let name_str = slice_and_trim(&line, 12, 16);
                    let alt_loc = line.get(16..17).unwrap_or(" ");
                    let res_name_str = slice_and_trim(&line, 17, 20);
                    let chain_id: char =
                        slice_and_trim(&line, 21, 22).chars().next().unwrap_or('A');
                    let res_seq_str = slice_and_trim(&line, 22, 26);

                    if name_str.is_empty() {
                        return Err(PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::MissingRequiredField {
                                columns: "13-16".into(),
                            },
                        });
                    }
                    if !matches!(alt_loc, " " | "A") {
                        continue;
                    }

                    let serial: usize = serial_str.parse().map_err(|_| PdbError::Parse {
                        line: line_num,
                        kind: PdbParseErrorKind::InvalidInt {
                            columns: "7-11".into(),
                            value: serial_str.into(),
                        },
                    })?;
                    if !seen_serials.insert(serial) {
                        return Err(PdbError::Inconsistency(format!(
                            "Duplicate atom serial: {}",
                            serial
                        )));
                    }
                    let res_seq: isize = res_seq_str.parse().map_err(|_| PdbError::Parse {
                        line: line_num,
                        kind: PdbParseErrorKind::InvalidInt {
                            columns: "23-26".into(),
                            value: res_seq_str.into(),
                        },
                    })?;

                    let x = parse_float(&line, line_num, 30, 38)?;
                    let y = parse_float(&line, line_num, 38, 46)?;
                    let z = parse_float(&line, line_num, 46, 54)?;
                    let occupancy = parse_optional_float(&line, 1.0, 54, 60);
                    let temp_factor = parse_optional_float(&line, 0.0, 60, 66);
                    let element = slice_and_trim(&line, 76, 78).to_string();

                    let chain_type = if record_type == "ATOM" {
                        ChainType::Protein
                    } else if tables::is_water_residue(res_name_str) {
                        ChainType::Water
                    } else {
                        ChainType::Ligand
                    };

                    let chain = system.add_chain(chain_id, chain_type);
                    let residue_id = system
                        .add_residue(chain, res_seq, res_name_str)
                        .ok_or_else(|| {
                            PdbError::Inconsistency(format!(
                                "Failed to register residue {} {}",
                                res_name_str, res_seq
                            ))
                        })?;

                    let mut atom = Atom::new(name_str, residue_id, Point3::new(x, y, z));
                    atom.occupancy = occupancy;
                    atom.temp_factor = temp_factor;
                    atom.element = element;
                    system.add_atom_to_residue(residue_id, atom).ok_or_else(|| {
                        PdbError::Inconsistency(format!("Failed to register atom {}", serial))
                    })?;
                }
                "MODEL" => {
                    if first_model_done {
                        metadata.truncated_to_first_model = true;
                        break;
                    }
                }
                "ENDMDL" => {
                    first_model_done = true;
                }
                "TER" | "ANISOU" | "CONECT" | "MASTER" => {}
                "END" => break,
                "" => {}
                _ => metadata.header_lines.push(line),
            }
        }

        if seen_serials.is_empty() {
            return Err(PdbError::MissingRecord("ATOM/HETATM records".into()));
        }
        Ok((system, metadata))
    }
}
