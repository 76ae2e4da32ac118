use super::ids::{AtomId, ChainId};
use super::sequence::AminoAcid;
use std::collections::HashMap;

/// A residue within a molecular structure.
///
/// Carries the raw residue name as it appeared in the source file alongside
/// the resolved [`AminoAcid`] identity, which is `None` for waters, ligands,
/// and any non-standard residue name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    pub id: isize,                          // Residue sequence number from source file
    pub name: String,                       // Name of the residue (e.g., "ALA", "HOH")
    pub amino_acid: Option<AminoAcid>,      // Resolved identity for standard residues
    pub chain_id: ChainId,                  // ID of the parent chain
    pub(crate) atoms: Vec<AtomId>,          // IDs of atoms belonging to this residue
    atom_name_map: HashMap<String, AtomId>, // Map from atom name to its stable ID
}

impl Residue {
    pub(crate) fn new(id: isize, name: &str, chain_id: ChainId) -> Self {
        Self {
            id,
            name: name.to_string(),
            amino_acid: AminoAcid::from_three_letter(name),
            chain_id,
            atoms: Vec::new(),
            atom_name_map: HashMap::new(),
        }
    }

    pub(crate) fn add_atom(&mut self, atom_name: &str, atom_id: AtomId) {
        self.atoms.push(atom_id);
        self.atom_name_map.insert(atom_name.to_string(), atom_id);
    }

    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    pub fn get_atom_id_by_name(&self, name: &str) -> Option<AtomId> {
        self.atom_name_map.get(name).copied()
    }

    /// Returns `true` if the residue resolved to a standard amino acid.
    pub fn is_standard(&self) -> bool {
        self.amino_acid.is_some()
    }
}
