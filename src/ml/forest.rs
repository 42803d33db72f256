// ============================================================
// Layer 5 — Random Forest
// ============================================================
// A bagged ensemble of classification trees.
//
// Fitting:
//   for each of n_trees:
//     draw a bootstrap resample (n draws with replacement
//     from the n training examples), or use every example
//     once when bootstrap is off
//     grow one DecisionTree on it, with its own random
//     feature order at every split
//
// Predicting:
//   average the leaf distributions of all trees
//   → a probability per risk level, summing to 1
//
// Classes that never appear in the training data still get a
// slot in the distribution, always with probability 0.
//
// Reference: Breiman (2001) Random Forests

use anyhow::{ensure, Result};
use rand::Rng;

use crate::data::synthetic::LabeledExample;
use crate::domain::features::FeatureVector;
use crate::domain::risk::RiskLevel;
use crate::ml::tree::{DecisionTree, Distribution, TreeParams};

/// Ensemble-level settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForestParams {
    pub n_trees:   usize,
    pub bootstrap: bool,
    pub tree:      TreeParams,
}

#[derive(Debug, Clone)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    /// Fit the ensemble. Fails on an empty training set or zero trees.
    pub fn fit<R: Rng + ?Sized>(
        examples: &[LabeledExample],
        params:   &ForestParams,
        rng:      &mut R,
    ) -> Result<Self> {
        ensure!(!examples.is_empty(), "cannot fit a forest on an empty training set");
        ensure!(params.n_trees > 0, "a forest needs at least one tree");

        let n = examples.len();
        let mut trees = Vec::with_capacity(params.n_trees);

        for t in 0..params.n_trees {
            let sample: Vec<usize> = if params.bootstrap {
                (0..n).map(|_| rng.gen_range(0..n)).collect()
            } else {
                (0..n).collect()
            };

            let tree = DecisionTree::fit(examples, &sample, &params.tree, rng);
            tracing::debug!(
                "Tree {}/{}: depth={}, leaves={}",
                t + 1,
                params.n_trees,
                tree.depth(),
                tree.leaf_count(),
            );
            trees.push(tree);
        }

        Ok(Self { trees })
    }

    /// Mean of the per-tree leaf distributions
    pub fn predict_proba(&self, features: &FeatureVector) -> Distribution {
        let mut total = [0.0; RiskLevel::COUNT];
        for tree in &self.trees {
            for (acc, p) in total.iter_mut().zip(tree.predict_proba(features)) {
                *acc += p;
            }
        }
        let n = self.trees.len() as f64;
        total.map(|sum| sum / n)
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    /// Depth of the deepest tree in the ensemble
    pub fn max_depth(&self) -> usize {
        self.trees.iter().map(DecisionTree::depth).max().unwrap_or(0)
    }

    pub fn total_leaves(&self) -> usize {
        self.trees.iter().map(DecisionTree::leaf_count).sum()
    }
}
