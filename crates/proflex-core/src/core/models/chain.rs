use super::ids::ResidueId;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainType {
    Protein,
    Ligand,
    Water,
    Other,
}

#[derive(Debug, Error)]
#[error("Invalid chain type string")]
pub struct ParseChainTypeError;

impl FromStr for ChainType {
    type Err = ParseChainTypeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "protein" => Ok(ChainType::Protein),
            "ligand" => Ok(ChainType::Ligand),
            "water" => Ok(ChainType::Water),
            _ => Ok(ChainType::Other),
        }
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ChainType::Protein => "Protein",
                ChainType::Ligand => "Ligand",
                ChainType::Water => "Water",
                ChainType::Other => "Other",
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub id: char,                        // Chain identifier (e.g., 'A', 'B')
    pub chain_type: ChainType,           // Type of the chain
    pub(crate) residues: Vec<ResidueId>, // Ordered list of residue IDs belonging to this chain
}

impl Chain {
    pub(crate) fn new(id: char, chain_type: ChainType) -> Self {
        Self {
            id,
            chain_type,
            residues: Vec::new(),
        }
    }

    pub fn residues(&self) -> &[ResidueId] {
        &self.residues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_type_parses_known_names_and_falls_back_to_other() {
        assert!(matches!("protein".parse(), Ok(ChainType::Protein)));
        assert!(matches!("WATER".parse(), Ok(ChainType::Water)));
        assert!(matches!("Ligand".parse(), Ok(ChainType::Ligand)));
        assert!(matches!("dna".parse(), Ok(ChainType::Other)));
    }

    #[test]
    fn new_chain_starts_with_no_residues() {
        let chain = Chain::new('A', ChainType::Protein);
        assert_eq!(chain.id, 'A');
        assert_eq!(chain.chain_type, ChainType::Protein);
        assert!(chain.residues().is_empty());
    }

    #[test]
    fn chain_type_display_round_trips() {
        for ct in [
            ChainType::Protein,
            ChainType::Ligand,
            ChainType::Water,
            ChainType::Other,
        ] {
            let parsed: ChainType = ct.to_string().parse().unwrap();
            assert_eq!(parsed, ct);
        }
    }
}
