use crate::core::io::pdb::PdbFile;
use crate::core::io::traits::StructureFile;
use crate::core::models::sequence::{AminoAcid, ProteinSequence};
use crate::core::models::system::MolecularSystem;
use crate::engine::baseline;
use crate::engine::config::PredictionConfig;
use crate::engine::error::EngineError;
use crate::engine::features::{self, FeatureKind};
use crate::engine::forest::RandomForest;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// The input a [`Protein`] was built from.
#[derive(Debug, Clone)]
enum ProteinSource {
    /// A validated amino-acid sequence.
    Sequence(ProteinSequence),
    /// A parsed molecular structure.
    Structure(MolecularSystem),
}

impl ProteinSource {
    fn input_label(&self) -> &'static str {
        match self {
            ProteinSource::Sequence(_) => "sequence",
            ProteinSource::Structure(_) => "structure",
        }
    }
}

/// Identifying information about the model that produced a prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelInfo {
    pub name: String,
    pub kind: FeatureKind,
    pub tree_count: usize,
    pub feature_count: usize,
}

impl From<&RandomForest> for ModelInfo {
    fn from(forest: &RandomForest) -> Self {
        Self {
            name: forest.name().to_string(),
            kind: forest.kind(),
            tree_count: forest.tree_count(),
            feature_count: forest.feature_count(),
        }
    }
}

/// The flexibility score of a single residue.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueScore {
    /// Chain identifier for structure input; `None` for sequence input.
    pub chain_id: Option<char>,
    /// Residue number: the file's numbering for structures, 1-based for sequences.
    pub residue_number: isize,
    pub amino_acid: AminoAcid,
    pub score: f64,
}

/// The result of a prediction run.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub kind: FeatureKind,
    /// Per-residue scores; empty for [`FeatureKind::StructureMeans`] models.
    pub scores: Vec<ResidueScore>,
    /// Mean of the per-residue scores, or the single structure-wide score
    /// for [`FeatureKind::StructureMeans`] models.
    pub global_score: f64,
    pub model: ModelInfo,
}

/// A protein prepared for flexibility prediction.
///
/// Built from exactly one of two inputs through the explicit constructors
/// [`Protein::from_sequence`] and [`Protein::from_structure_file`]. Both
/// validate the input on construction so prediction can only fail on model
/// problems.
#[derive(Debug, Clone)]
pub struct Protein {
    source: ProteinSource,
}

impl Protein {
    /// Builds a protein from a one-letter amino-acid sequence string.
    ///
    /// # Arguments
    ///
    /// * `sequence` - One-letter codes; whitespace ignored, case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Sequence`] for empty input or characters
    /// outside the amino-acid alphabet.
    pub fn from_sequence(sequence: &str) -> Result<Self, EngineError> {
        let sequence: ProteinSequence = sequence.parse()?;
        debug!(residues = sequence.len(), "Constructed protein from sequence input.");
        Ok(Self {
            source: ProteinSource::Sequence(sequence),
        })
    }

    /// Builds a protein by parsing a PDB structure file.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the structure file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StructureRead`] when the file cannot be opened
    /// or parsed, and [`EngineError::NoProteinResidues`] when it contains no
    /// scorable protein residue.
    pub fn from_structure_file<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let (system, metadata) =
            PdbFile::read_from_path(&path).map_err(|e| EngineError::StructureRead {
                path: path.as_ref().to_string_lossy().to_string(),
                source: e,
            })?;
        if metadata.truncated_to_first_model {
            warn!(
                path = %path.as_ref().display(),
                "Structure file contains multiple models; only the first was read."
            );
        }
        Self::from_structure(system)
    }

    /// Builds a protein from an already parsed molecular system.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoProteinResidues`] when the system contains no
    /// standard protein residue with an alpha carbon.
    pub fn from_structure(system: MolecularSystem) -> Result<Self, EngineError> {
        if system.protein_residues_with_ca().is_empty() {
            return Err(EngineError::NoProteinResidues);
        }
        debug!(
            atoms = system.atom_count(),
            residues = system.residue_count(),
            "Constructed protein from structure input."
        );
        Ok(Self {
            source: ProteinSource::Structure(system),
        })
    }

    /// Number of residues prediction will score.
    pub fn residue_count(&self) -> usize {
        match &self.source {
            ProteinSource::Sequence(sequence) => sequence.len(),
            ProteinSource::Structure(system) => system.protein_residues_with_ca().len(),
        }
    }

    /// Predicts with the built-in baseline model matching the input kind.
    ///
    /// # Errors
    ///
    /// Propagates feature-extraction errors; the baseline model itself
    /// always matches the input.
    pub fn predict(&self) -> Result<Prediction, EngineError> {
        self.predict_with_config(None, &PredictionConfig::default())
    }

    /// Predicts with a caller-supplied model.
    ///
    /// # Arguments
    ///
    /// * `model` - A validated random forest, typically loaded through
    ///   [`crate::engine::artifact::ModelArtifact::load`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ModelKindMismatch`] when the model targets the
    /// other input kind and [`EngineError::FeatureWidthMismatch`] when its
    /// declared width disagrees with the extractor.
    pub fn predict_with(&self, model: &RandomForest) -> Result<Prediction, EngineError> {
        self.predict_with_config(Some(model), &PredictionConfig::default())
    }

    /// Predicts with full control over the model and configuration.
    ///
    /// `model` of `None` selects the built-in baseline for the input kind.
    #[instrument(skip_all, name = "prediction_workflow")]
    pub fn predict_with_config(
        &self,
        model: Option<&RandomForest>,
        config: &PredictionConfig,
    ) -> Result<Prediction, EngineError> {
        config.validate()?;

        let default_kind = match &self.source {
            ProteinSource::Sequence(_) => FeatureKind::SequenceProfile,
            ProteinSource::Structure(_) => FeatureKind::StructureProfile,
        };
        let baseline_model;
        let model = match model {
            Some(model) => model,
            None => {
                baseline_model = baseline::forest(default_kind);
                &baseline_model
            }
        };

        info!(
            model = model.name(),
            kind = %model.kind(),
            residues = self.residue_count(),
            "Running flexibility prediction."
        );

        match (&self.source, model.kind()) {
            (ProteinSource::Sequence(sequence), FeatureKind::SequenceProfile) => {
                let matrix = features::sequence::extract(sequence, config);
                let scores = run_forest(model, &matrix)?;
                let residue_scores = sequence
                    .residues()
                    .iter()
                    .enumerate()
                    .zip(&scores)
                    .map(|((i, &amino_acid), &score)| ResidueScore {
                        chain_id: None,
                        residue_number: i as isize + 1,
                        amino_acid,
                        score,
                    })
                    .collect();
                Ok(finish(model, residue_scores))
            }
            (ProteinSource::Structure(system), FeatureKind::StructureProfile) => {
                let matrix = features::structure::extract(system, config)?;
                let scores = run_forest(model, &matrix)?;
                let residue_scores = label_structure_scores(system, &scores)?;
                Ok(finish(model, residue_scores))
            }
            (ProteinSource::Structure(system), FeatureKind::StructureMeans) => {
                let matrix = features::structure::extract(system, config)?.column_means();
                let scores = run_forest(model, &matrix)?;
                let global_score = scores.first().copied().ok_or_else(|| {
                    EngineError::Internal("means matrix produced no rows".to_string())
                })?;
                Ok(Prediction {
                    kind: model.kind(),
                    scores: Vec::new(),
                    global_score,
                    model: ModelInfo::from(model),
                })
            }
            _ => Err(EngineError::ModelKindMismatch {
                name: model.name().to_string(),
                model_kind: model.kind(),
                input: self.source.input_label(),
            }),
        }
    }
}

fn run_forest(
    model: &RandomForest,
    matrix: &crate::engine::features::FeatureMatrix,
) -> Result<Vec<f64>, EngineError> {
    model
        .predict(matrix)
        .map_err(|_| EngineError::FeatureWidthMismatch {
            name: model.name().to_string(),
            declared: model.feature_count(),
            actual: matrix.width(),
        })
}

fn label_structure_scores(
    system: &MolecularSystem,
    scores: &[f64],
) -> Result<Vec<ResidueScore>, EngineError> {
    let residues = system.protein_residues_with_ca();
    if residues.len() != scores.len() {
        return Err(EngineError::Internal(format!(
            "score count {} does not match residue count {}",
            scores.len(),
            residues.len()
        )));
    }
    residues
        .iter()
        .zip(scores)
        .map(|(&(residue_id, _), &score)| {
            let residue = system
                .residue(residue_id)
                .ok_or_else(|| EngineError::Internal("residue vanished".to_string()))?;
            let amino_acid = residue
                .amino_acid
                .ok_or_else(|| EngineError::Internal("nonstandard residue scored".to_string()))?;
            let chain_id = system.chain(residue.chain_id).map(|c| c.id);
            Ok(ResidueScore {
                chain_id,
                residue_number: residue.id,
                amino_acid,
                score,
            })
        })
        .collect()
}

fn finish(model: &RandomForest, scores: Vec<ResidueScore>) -> Prediction {
    let global_score = if scores.is_empty() {
        0.0
    } else {
        scores.iter().map(|s| s.score).sum::<f64>() / scores.len() as f64
    };
    Prediction {
        kind: model.kind(),
        scores,
        global_score,
        model: ModelInfo::from(model),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::chain::ChainType;
    use crate::core::models::sequence::SequenceParseError;
    use nalgebra::Point3;
    use std::io::Write;

    fn small_structure() -> MolecularSystem {
        let mut system = MolecularSystem::new();
        let chain_id = system.add_chain('A', ChainType::Protein);
        for (i, name) in ["ALA", "GLY", "SER", "LEU"].iter().enumerate() {
            let residue_id = system.add_residue(chain_id, i as isize + 1, name).unwrap();
            let mut ca = Atom::new("CA", residue_id, Point3::new(i as f64 * 3.8, 0.0, 0.0));
            ca.temp_factor = 15.0;
            system.add_atom_to_residue(residue_id, ca).unwrap();
        }
        system
    }

    #[test]
    fn from_sequence_builds_predictable_protein() {
        let protein = Protein::from_sequence("ADTRYPGDDDDFFFAACC").unwrap();
        assert_eq!(protein.residue_count(), 18);

        let prediction = protein.predict().unwrap();
        assert_eq!(prediction.kind, FeatureKind::SequenceProfile);
        assert_eq!(prediction.scores.len(), 18);
        assert!(prediction.scores.iter().all(|s| s.chain_id.is_none()));
        assert_eq!(prediction.scores[0].residue_number, 1);
        assert_eq!(prediction.scores[0].amino_acid, AminoAcid::Alanine);
        assert!(prediction.global_score > 0.0);
        assert_eq!(prediction.model.name, "builtin-sequence-baseline");
    }

    #[test]
    fn from_sequence_rejects_invalid_letters() {
        match Protein::from_sequence("ADTB") {
            Err(EngineError::Sequence {
                source: SequenceParseError::InvalidCharacter { position: 3, character: 'B' },
            }) => {}
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn from_structure_predicts_per_residue_scores() {
        let protein = Protein::from_structure(small_structure()).unwrap();
        let prediction = protein.predict().unwrap();

        assert_eq!(prediction.kind, FeatureKind::StructureProfile);
        assert_eq!(prediction.scores.len(), 4);
        assert_eq!(prediction.scores[0].chain_id, Some('A'));
        assert_eq!(prediction.scores[3].residue_number, 4);
        assert_eq!(prediction.scores[3].amino_acid, AminoAcid::Leucine);
    }

    #[test]
    fn from_structure_rejects_systems_without_protein_residues() {
        let mut system = MolecularSystem::new();
        let water_chain = system.add_chain('W', ChainType::Water);
        let water = system.add_residue(water_chain, 1, "HOH").unwrap();
        system
            .add_atom_to_residue(water, Atom::new("O", water, Point3::origin()))
            .unwrap();

        assert!(matches!(
            Protein::from_structure(system),
            Err(EngineError::NoProteinResidues)
        ));
    }

    #[test]
    fn from_structure_file_reads_pdb_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mini.pdb");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "ATOM      1  CA  ALA A   1       0.000   0.000   0.000  1.00 10.00           C"
        )
        .unwrap();
        writeln!(
            file,
            "ATOM      2  CA  GLY A   2       3.800   0.000   0.000  1.00 12.00           C"
        )
        .unwrap();
        drop(file);

        let protein = Protein::from_structure_file(&path).unwrap();
        assert_eq!(protein.residue_count(), 2);
        assert!(protein.predict().is_ok());
    }

    #[test]
    fn from_structure_file_propagates_missing_file() {
        let err = Protein::from_structure_file("/no/such/file.pdb").unwrap_err();
        assert!(matches!(err, EngineError::StructureRead { .. }));
    }

    #[test]
    fn predict_with_supplied_model_reports_its_identity() {
        let protein = Protein::from_sequence("ADTRYPG").unwrap();
        let model = baseline::forest(FeatureKind::SequenceProfile);
        let prediction = protein.predict_with(&model).unwrap();
        assert_eq!(prediction.model.tree_count, model.tree_count());
        assert_eq!(prediction.model.kind, FeatureKind::SequenceProfile);
    }

    #[test]
    fn sequence_input_rejects_structure_models() {
        let protein = Protein::from_sequence("ADTRYPG").unwrap();
        let model = baseline::forest(FeatureKind::StructureProfile);
        match protein.predict_with(&model) {
            Err(EngineError::ModelKindMismatch {
                model_kind: FeatureKind::StructureProfile,
                input: "sequence",
                ..
            }) => {}
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn structure_input_rejects_sequence_models() {
        let protein = Protein::from_structure(small_structure()).unwrap();
        let model = baseline::forest(FeatureKind::SequenceProfile);
        assert!(matches!(
            protein.predict_with(&model),
            Err(EngineError::ModelKindMismatch { input: "structure", .. })
        ));
    }

    #[test]
    fn means_model_yields_single_global_score() {
        let protein = Protein::from_structure(small_structure()).unwrap();
        let model = baseline::forest(FeatureKind::StructureMeans);
        let prediction = protein.predict_with(&model).unwrap();

        assert_eq!(prediction.kind, FeatureKind::StructureMeans);
        assert!(prediction.scores.is_empty());
        assert!((0.0..=1.0).contains(&prediction.global_score));
    }

    #[test]
    fn means_prediction_differs_from_profile_prediction() {
        // The demo flow: same structure, default predict vs a means model.
        let protein = Protein::from_structure(small_structure()).unwrap();
        let profile = protein.predict().unwrap();
        let means = protein
            .predict_with(&baseline::forest(FeatureKind::StructureMeans))
            .unwrap();
        assert_ne!(profile.kind, means.kind);
        assert!(!profile.scores.is_empty());
        assert!(means.scores.is_empty());
    }

    #[test]
    fn invalid_config_is_rejected_before_extraction() {
        let protein = Protein::from_sequence("ADTRYPG").unwrap();
        let config = PredictionConfig {
            window: 0,
            contact_radius: 8.0,
        };
        assert!(matches!(
            protein.predict_with_config(None, &config),
            Err(EngineError::Config(_))
        ));
    }

    #[test]
    fn custom_window_changes_sequence_features() {
        let protein = Protein::from_sequence("ADTRYPGDDDDFFFAACC").unwrap();
        let narrow = PredictionConfig {
            window: 1,
            contact_radius: 8.0,
        };
        let wide = PredictionConfig {
            window: 6,
            contact_radius: 8.0,
        };
        let a = protein.predict_with_config(None, &narrow).unwrap();
        let b = protein.predict_with_config(None, &wide).unwrap();
        assert_ne!(a.scores, b.scores);
    }
}
