use super::FeatureMatrix;
use crate::core::models::system::MolecularSystem;
use crate::engine::config::PredictionConfig;
use crate::engine::error::EngineError;
use nalgebra::Point3;

/// Width of a structure-profile feature row.
pub const FEATURE_COUNT: usize = 6;

/// Extracts per-residue geometric features from a molecular structure.
///
/// Rows are produced for every standard protein residue with an alpha
/// carbon, in chain order (the same order
/// [`MolecularSystem::protein_residues_with_ca`] reports). Row layout:
///
/// 0. Number of other alpha carbons within `config.contact_radius`
/// 1. Mean distance to those contact alpha carbons (the radius when none)
/// 2. Distance from the alpha carbon to the alpha-carbon centroid
/// 3. Mean temperature factor over the residue's atoms
/// 4. Side-chain volume of the residue
/// 5. Relative position along the scored residue list in `[0, 1]`
///
/// # Errors
///
/// Returns [`EngineError::NoProteinResidues`] when the structure has no
/// standard protein residue with an alpha carbon.
pub fn extract(
    system: &MolecularSystem,
    config: &PredictionConfig,
) -> Result<FeatureMatrix, EngineError> {
    let residues = system.protein_residues_with_ca();
    if residues.is_empty() {
        return Err(EngineError::NoProteinResidues);
    }

    let ca_positions: Vec<Point3<f64>> = residues
        .iter()
        .filter_map(|&(_, ca_id)| system.atom(ca_id).map(|a| a.position))
        .collect();
    let ca_ids: Vec<_> = residues.iter().map(|&(_, ca_id)| ca_id).collect();
    let centroid = system
        .centroid_of(&ca_ids)
        .ok_or(EngineError::NoProteinResidues)?;

    let n = residues.len();
    let mut matrix = FeatureMatrix::new(FEATURE_COUNT);

    for (i, &(residue_id, _)) in residues.iter().enumerate() {
        let position = ca_positions[i];

        let mut contact_count = 0usize;
        let mut contact_distance_sum = 0.0;
        for (j, other) in ca_positions.iter().enumerate() {
            if i == j {
                continue;
            }
            let distance = (position - other).norm();
            if distance <= config.contact_radius {
                contact_count += 1;
                contact_distance_sum += distance;
            }
        }
        let mean_contact_distance = if contact_count > 0 {
            contact_distance_sum / contact_count as f64
        } else {
            config.contact_radius
        };

        let centroid_distance = (position - centroid).norm();

        let residue = system
            .residue(residue_id)
            .ok_or(EngineError::NoProteinResidues)?;
        let atom_count = residue.atoms().len();
        let mean_temp_factor = if atom_count > 0 {
            residue
                .atoms()
                .iter()
                .filter_map(|&id| system.atom(id).map(|a| a.temp_factor))
                .sum::<f64>()
                / atom_count as f64
        } else {
            0.0
        };

        let side_chain_volume = residue
            .amino_acid
            .map(|aa| aa.side_chain_volume())
            .unwrap_or(0.0);
        let relative_position = if n > 1 {
            i as f64 / (n - 1) as f64
        } else {
            0.0
        };

        matrix.push_row(vec![
            contact_count as f64,
            mean_contact_distance,
            centroid_distance,
            mean_temp_factor,
            side_chain_volume,
            relative_position,
        ]);
    }
    Ok(matrix)
}
