use super::features::{FeatureKind, FeatureMatrix};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A node of a regression decision tree.
///
/// Nodes are stored in a flat vector; split children are indices into that
/// vector and must point forward (strictly greater than the parent index),
/// which makes traversal termination a structural property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TreeNode {
    /// Terminal node carrying the predicted value.
    Leaf { value: f64 },
    /// Binary split: rows with `features[feature] <= threshold` descend left.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// A single regression tree with its root at node 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
}

impl DecisionTree {
    pub fn new(nodes: Vec<TreeNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Evaluates the tree for one feature row.
    ///
    /// Assumes the tree passed [`RandomForest::validate`]; out-of-range
    /// indices cannot occur on a validated forest.
    fn predict_row(&self, row: &[f64]) -> f64 {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                TreeNode::Leaf { value } => return *value,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ForestValidationError {
    #[error("Forest contains no trees")]
    NoTrees,
    #[error("Tree {tree} contains no nodes")]
    EmptyTree { tree: usize },
    #[error("Tree {tree}, node {node}: child index {child} is out of bounds ({len} nodes)")]
    ChildOutOfBounds {
        tree: usize,
        node: usize,
        child: usize,
        len: usize,
    },
    #[error("Tree {tree}, node {node}: child index {child} does not point forward")]
    NonForwardChild {
        tree: usize,
        node: usize,
        child: usize,
    },
    #[error(
        "Tree {tree}, node {node}: feature index {feature} exceeds declared width {width}"
    )]
    FeatureOutOfBounds {
        tree: usize,
        node: usize,
        feature: usize,
        width: usize,
    },
    #[error("Input rows have {actual} features but the forest declares {declared}")]
    WidthMismatch { declared: usize, actual: usize },
}

/// An ensemble of regression trees over a declared feature layout.
///
/// The prediction for a row is the mean of the tree outputs. A forest is an
/// inference-only object; training happens outside this library and the
/// result arrives through [`crate::engine::artifact`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    name: String,
    kind: FeatureKind,
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    /// Creates a forest and validates its structure.
    ///
    /// # Errors
    ///
    /// Returns a [`ForestValidationError`] describing the first structural
    /// defect found.
    pub fn new(
        name: &str,
        kind: FeatureKind,
        trees: Vec<DecisionTree>,
    ) -> Result<Self, ForestValidationError> {
        let forest = Self {
            name: name.to_string(),
            kind,
            trees,
        };
        forest.validate()?;
        Ok(forest)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FeatureKind {
        self.kind
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// The feature-row width this forest expects.
    pub fn feature_count(&self) -> usize {
        self.kind.feature_count()
    }

    /// Checks structural integrity: at least one tree, non-empty trees,
    /// in-bounds forward-pointing children, and feature indices under the
    /// declared width.
    pub fn validate(&self) -> Result<(), ForestValidationError> {
        if self.trees.is_empty() {
            return Err(ForestValidationError::NoTrees);
        }
        let width = self.feature_count();
        for (tree_index, tree) in self.trees.iter().enumerate() {
            let len = tree.nodes.len();
            if len == 0 {
                return Err(ForestValidationError::EmptyTree { tree: tree_index });
            }
            for (node_index, node) in tree.nodes.iter().enumerate() {
                if let TreeNode::Split {
                    feature,
                    left,
                    right,
                    ..
                } = node
                {
                    if *feature >= width {
                        return Err(ForestValidationError::FeatureOutOfBounds {
                            tree: tree_index,
                            node: node_index,
                            feature: *feature,
                            width,
                        });
                    }
                    for child in [*left, *right] {
                        if child >= len {
                            return Err(ForestValidationError::ChildOutOfBounds {
                                tree: tree_index,
                                node: node_index,
                                child,
                                len,
                            });
                        }
                        if child <= node_index {
                            return Err(ForestValidationError::NonForwardChild {
                                tree: tree_index,
                                node: node_index,
                                child,
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Evaluates the forest for one feature row.
    ///
    /// # Errors
    ///
    /// Returns [`ForestValidationError::WidthMismatch`] if the row width
    /// differs from the declared feature count.
    pub fn predict_row(&self, row: &[f64]) -> Result<f64, ForestValidationError> {
        if row.len() != self.feature_count() {
            return Err(ForestValidationError::WidthMismatch {
                declared: self.feature_count(),
                actual: row.len(),
            });
        }
        let sum: f64 = self.trees.iter().map(|tree| tree.predict_row(row)).sum();
        Ok(sum / self.trees.len() as f64)
    }

    /// Evaluates the forest for every row of a feature matrix.
    ///
    /// # Errors
    ///
    /// Returns [`ForestValidationError::WidthMismatch`] if the matrix width
    /// differs from the declared feature count.
    pub fn predict(&self, matrix: &FeatureMatrix) -> Result<Vec<f64>, ForestValidationError> {
        if matrix.width() != self.feature_count() {
            return Err(ForestValidationError::WidthMismatch {
                declared: self.feature_count(),
                actual: matrix.width(),
            });
        }
        matrix.rows().map(|row| self.predict_row(row)).collect()
    }
}
