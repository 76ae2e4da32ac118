use super::features::FeatureKind;
use super::forest::{DecisionTree, RandomForest, TreeNode};

// Feature indices, mirroring the extractor row layouts.
const SEQ_HYDROPATHY: usize = 0;
const SEQ_WINDOW_HYDROPATHY: usize = 1;
const SEQ_WINDOW_VOLUME: usize = 3;
const SEQ_WINDOW_CHARGE: usize = 4;
const SEQ_POSITION: usize = 5;

const STRUCT_CONTACTS: usize = 0;
const STRUCT_NEIGHBOR_DIST: usize = 1;
const STRUCT_CENTROID_DIST: usize = 2;
const STRUCT_TEMP_FACTOR: usize = 3;
const STRUCT_POSITION: usize = 5;

fn split(feature: usize, threshold: f64, left: usize, right: usize) -> TreeNode {
    TreeNode::Split {
        feature,
        threshold,
        left,
        right,
    }
}

fn leaf(value: f64) -> TreeNode {
    TreeNode::Leaf { value }
}

/// Returns the built-in default forest for a feature kind.
///
/// These forests are deterministic, hand-set ensembles encoding coarse
/// flexibility heuristics: hydrophilic, charged, poorly packed, and terminal
/// residues score as more flexible. They give `predict()` a well-defined
/// default; externally trained artifacts are expected to supersede them.
pub fn forest(kind: FeatureKind) -> RandomForest {
    let (name, trees) = match kind {
        FeatureKind::SequenceProfile => ("builtin-sequence-baseline", sequence_trees()),
        FeatureKind::StructureProfile => ("builtin-structure-baseline", structure_trees()),
        FeatureKind::StructureMeans => ("builtin-structure-means-baseline", means_trees()),
    };
    RandomForest::new(name, kind, trees)
        .unwrap_or_else(|e| unreachable!("built-in baseline must validate: {e}"))
}

fn sequence_trees() -> Vec<DecisionTree> {
    vec![
        // Hydrophilic stretches are more mobile than hydrophobic cores.
        DecisionTree::new(vec![
            split(SEQ_WINDOW_HYDROPATHY, 0.0, 1, 2),
            split(SEQ_WINDOW_CHARGE, 0.5, 3, 4),
            leaf(0.35),
            leaf(0.55),
            leaf(0.70),
        ]),
        // Chain termini are mobile regardless of composition.
        DecisionTree::new(vec![
            split(SEQ_POSITION, 0.1, 1, 2),
            leaf(0.75),
            split(SEQ_POSITION, 0.9, 3, 4),
            split(SEQ_WINDOW_VOLUME, 110.0, 5, 6),
            leaf(0.75),
            leaf(0.60),
            leaf(0.45),
        ]),
        // Strongly hydrophobic residues anchor the fold.
        DecisionTree::new(vec![
            split(SEQ_HYDROPATHY, 2.0, 1, 2),
            split(SEQ_WINDOW_VOLUME, 140.0, 3, 4),
            leaf(0.30),
            leaf(0.60),
            leaf(0.40),
        ]),
    ]
}

fn structure_trees() -> Vec<DecisionTree> {
    vec![
        // Sparsely contacted residues sit on the surface and move more.
        DecisionTree::new(vec![
            split(STRUCT_CONTACTS, 6.5, 1, 2),
            split(STRUCT_CENTROID_DIST, 12.0, 3, 4),
            leaf(0.30),
            leaf(0.60),
            leaf(0.75),
        ]),
        // High experimental temperature factors indicate mobility directly.
        DecisionTree::new(vec![
            split(STRUCT_TEMP_FACTOR, 20.0, 1, 2),
            leaf(0.35),
            split(STRUCT_CONTACTS, 4.5, 3, 4),
            leaf(0.80),
            leaf(0.55),
        ]),
        // Termini and loosely packed neighborhoods.
        DecisionTree::new(vec![
            split(STRUCT_POSITION, 0.08, 1, 2),
            leaf(0.70),
            split(STRUCT_NEIGHBOR_DIST, 6.0, 3, 4),
            leaf(0.45),
            leaf(0.60),
        ]),
    ]
}

fn means_trees() -> Vec<DecisionTree> {
    vec![
        DecisionTree::new(vec![
            split(STRUCT_CONTACTS, 5.5, 1, 2),
            leaf(0.65),
            leaf(0.40),
        ]),
        DecisionTree::new(vec![
            split(STRUCT_TEMP_FACTOR, 25.0, 1, 2),
            leaf(0.45),
            leaf(0.70),
        ]),
        DecisionTree::new(vec![
            split(STRUCT_CENTROID_DIST, 10.0, 1, 2),
            leaf(0.50),
            leaf(0.60),
        ]),
    ]
}
