use super::FeatureMatrix;
use crate::core::models::sequence::ProteinSequence;
use crate::engine::config::PredictionConfig;

/// Width of a sequence-profile feature row.
pub const FEATURE_COUNT: usize = 6;

/// Extracts per-residue physicochemical features from a sequence.
///
/// Row layout, per residue `i` with a window of `config.window` residues on
/// each side (clamped at the chain ends):
///
/// 0. Kyte-Doolittle hydropathy of the residue
/// 1. Mean hydropathy over the window
/// 2. Side-chain volume of the residue
/// 3. Mean side-chain volume over the window
/// 4. Net formal charge over the window
/// 5. Relative position along the chain in `[0, 1]`
pub fn extract(sequence: &ProteinSequence, config: &PredictionConfig) -> FeatureMatrix {
    let residues = sequence.residues();
    let n = residues.len();
    let mut matrix = FeatureMatrix::new(FEATURE_COUNT);

    for (i, residue) in residues.iter().enumerate() {
        let start = i.saturating_sub(config.window);
        let end = (i + config.window + 1).min(n);
        let window = &residues[start..end];
        let window_len = window.len() as f64;

        let window_hydropathy: f64 =
            window.iter().map(|r| r.hydropathy()).sum::<f64>() / window_len;
        let window_volume: f64 =
            window.iter().map(|r| r.side_chain_volume()).sum::<f64>() / window_len;
        let window_charge: f64 = window.iter().map(|r| r.formal_charge() as f64).sum();
        let relative_position = if n > 1 {
            i as f64 / (n - 1) as f64
        } else {
            0.0
        };

        matrix.push_row(vec![
            residue.hydropathy(),
            window_hydropathy,
            residue.side_chain_volume(),
            window_volume,
            window_charge,
            relative_position,
        ]);
    }
    matrix
}
