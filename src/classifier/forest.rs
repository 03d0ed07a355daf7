//! Random forest classifier.

use serde::{Deserialize, Serialize};

use crate::error::{CorsaError, Result};
use crate::features::FeatureVector;

/// Random forest over serialized decision trees.
///
/// Each leaf stores a class probability distribution; the forest prediction
/// is the mean of the per-tree leaf distributions. A global feature
/// importance vector is carried for explanations, and its length defines
/// the expected feature dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    /// Trees in the ensemble.
    pub trees: Vec<DecisionTree>,
    /// Global importance per vocabulary feature.
    pub feature_importances: Vec<f64>,
    /// Number of classes in the leaf distributions.
    pub n_classes: usize,
}

impl RandomForest {
    /// Create a forest from trees, importances, and the class count.
    pub fn new(trees: Vec<DecisionTree>, feature_importances: Vec<f64>, n_classes: usize) -> Self {
        Self {
            trees,
            feature_importances,
            n_classes,
        }
    }

    /// Number of features the forest expects.
    pub fn n_features(&self) -> usize {
        self.feature_importances.len()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.trees.is_empty() {
            return Err(CorsaError::artifact("random_forest model has no trees"));
        }
        if self.n_classes == 0 {
            return Err(CorsaError::artifact("random_forest model has zero classes"));
        }
        for tree in &self.trees {
            tree.validate(self.n_features(), self.n_classes)?;
        }
        Ok(())
    }

    /// Mean of the per-tree leaf distributions.
    pub fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>> {
        if features.dimension() != self.n_features() {
            return Err(CorsaError::classifier(format!(
                "random_forest model expects {} features, got {}",
                self.n_features(),
                features.dimension()
            )));
        }
        if self.trees.is_empty() {
            return Err(CorsaError::classifier("random_forest model has no trees"));
        }

        let mut summed = vec![0.0; self.n_classes];
        for tree in &self.trees {
            let distribution = tree.predict_proba(features)?;
            for (acc, p) in summed.iter_mut().zip(distribution) {
                *acc += p;
            }
        }

        let count = self.trees.len() as f64;
        for value in &mut summed {
            *value /= count;
        }
        Ok(summed)
    }
}

/// One decision tree of the ensemble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    root: Option<Box<TreeNode>>,
}

/// A node of a serialized decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Feature index for split (-1 for leaf).
    feature_idx: i32,
    /// Threshold value for split.
    threshold: f64,
    /// Class distribution (for leaf nodes).
    #[serde(default)]
    distribution: Vec<f64>,
    /// Left child.
    left: Option<Box<TreeNode>>,
    /// Right child.
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// Create a leaf node with a class distribution.
    pub fn leaf(distribution: Vec<f64>) -> Self {
        Self {
            feature_idx: -1,
            threshold: 0.0,
            distribution,
            left: None,
            right: None,
        }
    }

    /// Create a split node: values `<= threshold` go left, others right.
    pub fn split(feature_idx: usize, threshold: f64, left: TreeNode, right: TreeNode) -> Self {
        Self {
            feature_idx: feature_idx as i32,
            threshold,
            distribution: Vec::new(),
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    fn validate(&self, n_features: usize, n_classes: usize) -> Result<()> {
        if self.feature_idx < 0 {
            if self.distribution.len() != n_classes {
                return Err(CorsaError::artifact(format!(
                    "tree leaf carries {} class weights, expected {n_classes}",
                    self.distribution.len()
                )));
            }
            return Ok(());
        }

        if self.feature_idx as usize >= n_features {
            return Err(CorsaError::artifact(format!(
                "tree split references feature {} outside the {n_features}-feature vocabulary",
                self.feature_idx
            )));
        }
        match (&self.left, &self.right) {
            (Some(left), Some(right)) => {
                left.validate(n_features, n_classes)?;
                right.validate(n_features, n_classes)
            }
            _ => Err(CorsaError::artifact("tree split node is missing a child")),
        }
    }
}

impl DecisionTree {
    /// Create a tree that always answers with one distribution.
    pub fn leaf(distribution: Vec<f64>) -> Self {
        Self {
            root: Some(Box::new(TreeNode::leaf(distribution))),
        }
    }

    /// Create a tree from a root node.
    pub fn with_root(root: TreeNode) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    fn validate(&self, n_features: usize, n_classes: usize) -> Result<()> {
        match &self.root {
            Some(root) => root.validate(n_features, n_classes),
            None => Err(CorsaError::artifact("decision tree has no root node")),
        }
    }

    /// Leaf distribution for one feature vector.
    pub fn predict_proba(&self, features: &FeatureVector) -> Result<&[f64]> {
        match &self.root {
            Some(root) => Ok(Self::predict_node(root, features)),
            None => Err(CorsaError::classifier("decision tree has no root node")),
        }
    }

    fn predict_node<'a>(node: &'a TreeNode, features: &FeatureVector) -> &'a [f64] {
        if node.feature_idx < 0 {
            // Leaf node
            return &node.distribution;
        }

        let feature_value = features
            .values
            .get(node.feature_idx as usize)
            .copied()
            .unwrap_or(0.0);

        if feature_value <= node.threshold {
            match &node.left {
                Some(left) => Self::predict_node(left, features),
                None => &node.distribution,
            }
        } else {
            match &node.right {
                Some(right) => Self::predict_node(right, features),
                None => &node.distribution,
            }
        }
    }
}
