use super::ids::ResidueId;
use nalgebra::Point3;

/// Represents an atom in a molecular structure with the fields the PDB
/// format records for it.
///
/// This struct carries exactly the per-atom information the prediction
/// engine consumes: identity, coordinates, and the experimental occupancy
/// and temperature-factor columns. Force-field specific properties have no
/// place here; ProFlex never evaluates energies.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The name of the atom (e.g., "CA", "N", "O").
    pub name: String,
    /// The ID of the parent residue this atom belongs to.
    pub residue_id: ResidueId,
    /// The chemical element symbol (e.g., "C", "N"); empty when the file omits it.
    pub element: String,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// The crystallographic occupancy (PDB columns 55-60).
    pub occupancy: f64,
    /// The isotropic temperature factor (PDB columns 61-66).
    pub temp_factor: f64,
}

impl Atom {
    /// Creates a new `Atom` with default values for the experimental fields.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the atom.
    /// * `residue_id` - The ID of the residue this atom belongs to.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(name: &str, residue_id: ResidueId, position: Point3<f64>) -> Self {
        Self {
            name: name.to_string(),
            residue_id,
            position,
            element: String::new(),
            occupancy: 1.0,
            temp_factor: 0.0,
        }
    }

    /// Returns `true` if this is an alpha-carbon atom.
    pub fn is_alpha_carbon(&self) -> bool {
        self.name == "CA"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ids::ResidueId;
    use nalgebra::Point3;

    #[test]
    fn new_atom_has_expected_default_fields() {
        let residue_id = ResidueId::default();
        let atom = Atom::new("CA", residue_id, Point3::new(1.0, 2.0, 3.0));

        assert_eq!(atom.name, "CA");
        assert_eq!(atom.residue_id, residue_id);
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(atom.element, "");
        assert_eq!(atom.occupancy, 1.0);
        assert_eq!(atom.temp_factor, 0.0);
    }

    #[test]
    fn is_alpha_carbon_matches_name_exactly() {
        let residue_id = ResidueId::default();
        assert!(Atom::new("CA", residue_id, Point3::origin()).is_alpha_carbon());
        assert!(!Atom::new("CB", residue_id, Point3::origin()).is_alpha_carbon());
        assert!(!Atom::new("C", residue_id, Point3::origin()).is_alpha_carbon());
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let residue_id = ResidueId::default();
        let mut atom1 = Atom::new("N", residue_id, Point3::new(0.0, 0.0, 0.0));
        atom1.temp_factor = 12.5;
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}
