use crate::core::utils::tables;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifies one of the twenty standard amino acids.
///
/// This enum is the canonical residue identity used throughout the library,
/// whether the input arrived as a one-letter sequence string or as a
/// three-letter residue name in a structure file. Static physicochemical
/// properties are exposed as methods backed by the tables in
/// [`crate::core::utils::tables`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AminoAcid {
    Alanine,
    Arginine,
    Asparagine,
    AsparticAcid,
    Cysteine,
    Glutamine,
    GlutamicAcid,
    Glycine,
    Histidine,
    Isoleucine,
    Leucine,
    Lysine,
    Methionine,
    Phenylalanine,
    Proline,
    Serine,
    Threonine,
    Tryptophan,
    Tyrosine,
    Valine,
}

impl AminoAcid {
    /// Resolves a one-letter code (case-insensitive) to an amino acid.
    pub fn from_one_letter(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'A' => Some(Self::Alanine),
            'R' => Some(Self::Arginine),
            'N' => Some(Self::Asparagine),
            'D' => Some(Self::AsparticAcid),
            'C' => Some(Self::Cysteine),
            'Q' => Some(Self::Glutamine),
            'E' => Some(Self::GlutamicAcid),
            'G' => Some(Self::Glycine),
            'H' => Some(Self::Histidine),
            'I' => Some(Self::Isoleucine),
            'L' => Some(Self::Leucine),
            'K' => Some(Self::Lysine),
            'M' => Some(Self::Methionine),
            'F' => Some(Self::Phenylalanine),
            'P' => Some(Self::Proline),
            'S' => Some(Self::Serine),
            'T' => Some(Self::Threonine),
            'W' => Some(Self::Tryptophan),
            'Y' => Some(Self::Tyrosine),
            'V' => Some(Self::Valine),
            _ => None,
        }
    }

    /// Resolves a three-letter PDB residue name (e.g., "ALA", "hse") to an amino acid.
    ///
    /// Histidine protonation-state aliases (HSD/HSE/HSP) resolve to [`AminoAcid::Histidine`].
    pub fn from_three_letter(name: &str) -> Option<Self> {
        tables::THREE_TO_ONE
            .get(name.trim().to_ascii_uppercase().as_str())
            .and_then(|&code| Self::from_one_letter(code))
    }

    /// Returns the canonical one-letter code.
    pub fn one_letter(&self) -> char {
        match self {
            Self::Alanine => 'A',
            Self::Arginine => 'R',
            Self::Asparagine => 'N',
            Self::AsparticAcid => 'D',
            Self::Cysteine => 'C',
            Self::Glutamine => 'Q',
            Self::GlutamicAcid => 'E',
            Self::Glycine => 'G',
            Self::Histidine => 'H',
            Self::Isoleucine => 'I',
            Self::Leucine => 'L',
            Self::Lysine => 'K',
            Self::Methionine => 'M',
            Self::Phenylalanine => 'F',
            Self::Proline => 'P',
            Self::Serine => 'S',
            Self::Threonine => 'T',
            Self::Tryptophan => 'W',
            Self::Tyrosine => 'Y',
            Self::Valine => 'V',
        }
    }

    /// Returns the canonical three-letter PDB residue name.
    pub fn three_letter(&self) -> &'static str {
        match self {
            Self::Alanine => "ALA",
            Self::Arginine => "ARG",
            Self::Asparagine => "ASN",
            Self::AsparticAcid => "ASP",
            Self::Cysteine => "CYS",
            Self::Glutamine => "GLN",
            Self::GlutamicAcid => "GLU",
            Self::Glycine => "GLY",
            Self::Histidine => "HIS",
            Self::Isoleucine => "ILE",
            Self::Leucine => "LEU",
            Self::Lysine => "LYS",
            Self::Methionine => "MET",
            Self::Phenylalanine => "PHE",
            Self::Proline => "PRO",
            Self::Serine => "SER",
            Self::Threonine => "THR",
            Self::Tryptophan => "TRP",
            Self::Tyrosine => "TYR",
            Self::Valine => "VAL",
        }
    }

    /// Kyte-Doolittle hydropathy index.
    pub fn hydropathy(&self) -> f64 {
        tables::KD_HYDROPATHY
            .get(&self.one_letter())
            .copied()
            .unwrap_or(0.0)
    }

    /// Mean side-chain volume in cubic Angstroms.
    pub fn side_chain_volume(&self) -> f64 {
        tables::SIDE_CHAIN_VOLUME
            .get(&self.one_letter())
            .copied()
            .unwrap_or(0.0)
    }

    /// Formal side-chain charge at physiological pH.
    pub fn formal_charge(&self) -> i32 {
        tables::FORMAL_CHARGE
            .get(&self.one_letter())
            .copied()
            .unwrap_or(0)
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_letter())
    }
}

/// The error type for parsing a one-letter amino-acid sequence string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceParseError {
    #[error("Sequence is empty")]
    Empty,
    #[error("Invalid amino-acid character '{character}' at position {position}")]
    InvalidCharacter { position: usize, character: char },
}

/// A validated, non-empty sequence of standard amino acids.
///
/// Parsed from a one-letter code string via [`FromStr`]; whitespace is
/// ignored, letters are case-insensitive, and any other character is a
/// [`SequenceParseError::InvalidCharacter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinSequence {
    residues: Vec<AminoAcid>,
}

impl ProteinSequence {
    /// Creates a sequence from pre-validated residues.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceParseError::Empty`] if `residues` is empty.
    pub fn new(residues: Vec<AminoAcid>) -> Result<Self, SequenceParseError> {
        if residues.is_empty() {
            return Err(SequenceParseError::Empty);
        }
        Ok(Self { residues })
    }

    pub fn residues(&self) -> &[AminoAcid] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// Always `false`; an empty sequence cannot be constructed.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl FromStr for ProteinSequence {
    type Err = SequenceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut residues = Vec::with_capacity(s.len());
        for (position, character) in s.chars().enumerate() {
            if character.is_whitespace() {
                continue;
            }
            let residue = AminoAcid::from_one_letter(character).ok_or(
                SequenceParseError::InvalidCharacter {
                    position,
                    character,
                },
            )?;
            residues.push(residue);
        }
        Self::new(residues)
    }
}

impl fmt::Display for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for residue in &self.residues {
            write!(f, "{}", residue.one_letter())?;
        }
        Ok(())
    }
}
