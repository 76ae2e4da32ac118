use super::atom::Atom;
use super::chain::{Chain, ChainType};
use super::ids::{AtomId, ChainId, ResidueId};
use super::residue::Residue;
use nalgebra::Point3;
use slotmap::SlotMap;
use std::collections::HashMap;

/// Represents a complete molecular system with atoms, residues, and chains.
///
/// This struct serves as the central data structure for structure-based
/// prediction, providing efficient storage and access to all molecular
/// components. It maintains lookup maps for chains and residues so feature
/// extraction can navigate the structure without scanning.
#[derive(Debug, Clone, Default)]
pub struct MolecularSystem {
    /// Primary storage for atoms using a slot map for efficient ID management.
    atoms: SlotMap<AtomId, Atom>,
    /// Primary storage for residues using a slot map for efficient ID management.
    residues: SlotMap<ResidueId, Residue>,
    /// Primary storage for chains using a slot map for efficient ID management.
    chains: SlotMap<ChainId, Chain>,
    /// Lookup map for finding residues by chain ID and residue number.
    residue_id_map: HashMap<(ChainId, isize), ResidueId>,
    /// Lookup map for finding chains by their single-character identifier.
    chain_id_map: HashMap<char, ChainId>,
}

impl MolecularSystem {
    /// Creates a new, empty molecular system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieves an immutable reference to an atom by its ID.
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    /// Returns an iterator over all atoms in the system.
    pub fn atoms_iter(&self) -> impl Iterator<Item = (AtomId, &Atom)> {
        self.atoms.iter()
    }

    /// Retrieves an immutable reference to a residue by its ID.
    pub fn residue(&self, id: ResidueId) -> Option<&Residue> {
        self.residues.get(id)
    }

    /// Returns an iterator over all residues in the system.
    pub fn residues_iter(&self) -> impl Iterator<Item = (ResidueId, &Residue)> {
        self.residues.iter()
    }

    /// Retrieves an immutable reference to a chain by its ID.
    pub fn chain(&self, id: ChainId) -> Option<&Chain> {
        self.chains.get(id)
    }

    /// Returns an iterator over all chains in the system.
    pub fn chains_iter(&self) -> impl Iterator<Item = (ChainId, &Chain)> {
        self.chains.iter()
    }

    /// Finds a chain ID by its single-character identifier.
    pub fn find_chain_by_id(&self, id: char) -> Option<ChainId> {
        self.chain_id_map.get(&id).copied()
    }

    /// Finds a residue ID by its chain ID and residue number.
    pub fn find_residue_by_id(
        &self,
        chain_id: ChainId,
        residue_number: isize,
    ) -> Option<ResidueId> {
        self.residue_id_map
            .get(&(chain_id, residue_number))
            .copied()
    }

    /// Returns the total number of atoms in the system.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Returns the total number of residues in the system.
    pub fn residue_count(&self) -> usize {
        self.residues.len()
    }

    /// Adds a new chain to the system or returns the existing one.
    ///
    /// This method is idempotent; if a chain with the given ID already exists,
    /// it returns the existing chain ID without creating a duplicate.
    ///
    /// # Arguments
    ///
    /// * `id` - The single-character identifier for the chain.
    /// * `chain_type` - The type of the chain.
    ///
    /// # Return
    ///
    /// The ID of the chain (new or existing).
    pub fn add_chain(&mut self, id: char, chain_type: ChainType) -> ChainId {
        *self.chain_id_map.entry(id).or_insert_with(|| {
            let chain = Chain::new(id, chain_type);
            self.chains.insert(chain)
        })
    }

    /// Adds a new residue to the system or returns the existing one.
    ///
    /// This method is idempotent; if a residue with the given chain ID and
    /// residue number already exists, it returns the existing residue ID.
    ///
    /// # Arguments
    ///
    /// * `chain_id` - The ID of the chain to add the residue to.
    /// * `residue_number` - The sequential number of the residue.
    /// * `name` - The name of the residue.
    ///
    /// # Return
    ///
    /// Returns `Some(ResidueId)` if successful, otherwise `None` (e.g., if chain doesn't exist).
    pub fn add_residue(
        &mut self,
        chain_id: ChainId,
        residue_number: isize,
        name: &str,
    ) -> Option<ResidueId> {
        let chain = self.chains.get_mut(chain_id)?;
        let key = (chain_id, residue_number);

        let residue_id = *self.residue_id_map.entry(key).or_insert_with(|| {
            let residue = Residue::new(residue_number, name, chain_id);
            self.residues.insert(residue)
        });

        if !chain.residues.contains(&residue_id) {
            chain.residues.push(residue_id);
        }

        Some(residue_id)
    }

    /// Adds an atom to a specific residue.
    ///
    /// # Arguments
    ///
    /// * `residue_id` - The ID of the residue to add the atom to.
    /// * `atom` - The atom to add.
    ///
    /// # Return
    ///
    /// Returns `Some(AtomId)` if successful, otherwise `None` (e.g., if residue doesn't exist).
    pub fn add_atom_to_residue(&mut self, residue_id: ResidueId, atom: Atom) -> Option<AtomId> {
        let name = atom.name.clone();
        let atom_id = self.atoms.insert(atom);
        match self.residues.get_mut(residue_id) {
            Some(residue) => {
                residue.add_atom(&name, atom_id);
                Some(atom_id)
            }
            None => {
                self.atoms.remove(atom_id);
                None
            }
        }
    }

    /// Collects the standard protein residues with an alpha-carbon atom, in chain order.
    ///
    /// The result is the residue set structure-based feature extraction
    /// operates over; waters, ligands, and CA-less residues are skipped.
    pub fn protein_residues_with_ca(&self) -> Vec<(ResidueId, AtomId)> {
        let mut result = Vec::new();
        for (_, chain) in self.chains.iter() {
            if chain.chain_type != ChainType::Protein {
                continue;
            }
            for &residue_id in chain.residues() {
                let Some(residue) = self.residues.get(residue_id) else {
                    continue;
                };
                if !residue.is_standard() {
                    continue;
                }
                let ca = residue
                    .atoms()
                    .iter()
                    .copied()
                    .find(|&id| self.atoms.get(id).is_some_and(Atom::is_alpha_carbon));
                if let Some(ca_id) = ca {
                    result.push((residue_id, ca_id));
                }
            }
        }
        result
    }

    /// Computes the centroid of the given atoms.
    ///
    /// Returns `None` when the slice is empty or references unknown atoms only.
    pub fn centroid_of(&self, atom_ids: &[AtomId]) -> Option<Point3<f64>> {
        let mut sum = Point3::origin();
        let mut count = 0usize;
        for &id in atom_ids {
            if let Some(atom) = self.atoms.get(id) {
                sum.coords += atom.position.coords;
                count += 1;
            }
        }
        if count == 0 {
            return None;
        }
        Some(Point3::from(sum.coords / count as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn build_small_system() -> MolecularSystem {
        let mut system = MolecularSystem::new();
        let chain_id = system.add_chain('A', ChainType::Protein);
        for (i, name) in ["ALA", "GLY", "SER"].iter().enumerate() {
            let residue_id = system.add_residue(chain_id, i as isize + 1, name).unwrap();
            let ca = Atom::new("CA", residue_id, Point3::new(i as f64 * 3.8, 0.0, 0.0));
            system.add_atom_to_residue(residue_id, ca).unwrap();
        }
        system
    }

    #[test]
    fn add_chain_is_idempotent() {
        let mut system = MolecularSystem::new();
        let id1 = system.add_chain('A', ChainType::Protein);
        let id2 = system.add_chain('A', ChainType::Protein);
        assert_eq!(id1, id2);
        assert_eq!(system.chains_iter().count(), 1);
    }

    #[test]
    fn add_residue_is_idempotent_per_chain_and_number() {
        let mut system = MolecularSystem::new();
        let chain_id = system.add_chain('A', ChainType::Protein);
        let r1 = system.add_residue(chain_id, 1, "ALA").unwrap();
        let r2 = system.add_residue(chain_id, 1, "ALA").unwrap();
        assert_eq!(r1, r2);
        assert_eq!(system.residue_count(), 1);
    }

    #[test]
    fn add_residue_fails_for_unknown_chain() {
        let mut system = MolecularSystem::new();
        assert!(system.add_residue(ChainId::default(), 1, "ALA").is_none());
    }

    #[test]
    fn add_atom_to_residue_registers_atom_with_name_lookup() {
        let mut system = MolecularSystem::new();
        let chain_id = system.add_chain('A', ChainType::Protein);
        let residue_id = system.add_residue(chain_id, 1, "ALA").unwrap();
        let atom_id = system
            .add_atom_to_residue(residue_id, Atom::new("CA", residue_id, Point3::origin()))
            .unwrap();

        assert_eq!(system.atom(atom_id).unwrap().name, "CA");
        assert_eq!(
            system.residue(residue_id).unwrap().get_atom_id_by_name("CA"),
            Some(atom_id)
        );
    }

    #[test]
    fn add_atom_to_unknown_residue_fails_without_leaking_storage() {
        let mut system = MolecularSystem::new();
        let result =
            system.add_atom_to_residue(ResidueId::default(), Atom::new("CA", ResidueId::default(), Point3::origin()));
        assert!(result.is_none());
        assert_eq!(system.atom_count(), 0);
    }

    #[test]
    fn find_lookups_resolve_chain_and_residue() {
        let system = build_small_system();
        let chain_id = system.find_chain_by_id('A').unwrap();
        assert!(system.find_residue_by_id(chain_id, 2).is_some());
        assert!(system.find_residue_by_id(chain_id, 99).is_none());
        assert!(system.find_chain_by_id('B').is_none());
    }

    #[test]
    fn protein_residues_with_ca_follows_chain_order_and_skips_nonstandard() {
        let mut system = build_small_system();
        let chain_id = system.find_chain_by_id('A').unwrap();

        // Water residue and CA-less residue must both be skipped.
        let water_chain = system.add_chain('W', ChainType::Water);
        let water_id = system.add_residue(water_chain, 100, "HOH").unwrap();
        system
            .add_atom_to_residue(water_id, Atom::new("O", water_id, Point3::origin()))
            .unwrap();
        let no_ca = system.add_residue(chain_id, 4, "VAL").unwrap();
        system
            .add_atom_to_residue(no_ca, Atom::new("N", no_ca, Point3::origin()))
            .unwrap();

        let cas = system.protein_residues_with_ca();
        assert_eq!(cas.len(), 3);
        let numbers: Vec<isize> = cas
            .iter()
            .map(|&(rid, _)| system.residue(rid).unwrap().id)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn centroid_of_averages_positions() {
        let system = build_small_system();
        let atom_ids: Vec<AtomId> = system
            .protein_residues_with_ca()
            .into_iter()
            .map(|(_, ca)| ca)
            .collect();
        let centroid = system.centroid_of(&atom_ids).unwrap();
        assert!((centroid.x - 3.8).abs() < 1e-9);
        assert_eq!(centroid.y, 0.0);

        assert!(system.centroid_of(&[]).is_none());
    }
}
