// ============================================================
// Layer 5 — Classification Tree
// ============================================================
// A CART-style decision tree over FeatureVectors.
//
// Growing a node:
//   1. Count the risk labels of the samples that reached it
//   2. Stop and emit a leaf if the node is pure, too small to
//      split, or at the depth limit
//   3. Otherwise visit features in random order and, for each,
//      sweep the sorted values looking for the threshold with
//      the lowest weighted Gini impurity
//   4. Stop searching once `max_features` non-constant features
//      have been tried (keep going past that only while no
//      usable split has been found)
//   5. Partition the samples (x <= threshold goes left) and
//      recurse
//
// Gini impurity for class fractions p_k:
//   G = 1 - Σ p_k²
//   0.0 for a pure node, 2/3 for three equally mixed classes
//
// Leaves keep the full class distribution, not just the
// majority label, so the forest can average probabilities.
//
// Sample indices may repeat (bootstrap resampling); a repeated
// index simply counts twice everywhere.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::synthetic::LabeledExample;
use crate::domain::features::{FeatureVector, FEATURE_LEN};
use crate::domain::risk::RiskLevel;

/// A per-class distribution indexed by [`RiskLevel::index`]
pub type Distribution = [f64; RiskLevel::COUNT];

/// Growth limits for a single tree
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeParams {
    /// Maximum depth of the tree. `None` grows until leaves are pure.
    pub max_depth: Option<usize>,

    /// A node with fewer samples than this becomes a leaf
    pub min_samples_split: usize,

    /// Number of informative features examined per split
    pub max_features: usize,
}

#[derive(Debug, Clone)]
enum Node {
    Leaf {
        distribution: Distribution,
    },
    Split {
        feature:   usize,
        threshold: f64,
        left:      Box<Node>,
        right:     Box<Node>,
    },
}

/// A fitted classification tree. Immutable after `fit`.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    root: Node,
}

impl DecisionTree {
    /// Grow a tree on the examples selected by `sample`.
    /// `sample` must not be empty.
    pub fn fit<R: Rng + ?Sized>(
        examples: &[LabeledExample],
        sample:   &[usize],
        params:   &TreeParams,
        rng:      &mut R,
    ) -> Self {
        let root = grow(examples, sample.to_vec(), 0, params, rng);
        Self { root }
    }

    /// Class distribution of the leaf this vector falls into
    pub fn predict_proba(&self, features: &FeatureVector) -> Distribution {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf { distribution } => return *distribution,
                Node::Split { feature, threshold, left, right } => {
                    node = if features[*feature] <= *threshold { left } else { right };
                }
            }
        }
    }

    /// Number of edges on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        fn walk(node: &Node) -> usize {
            match node {
                Node::Leaf { .. } => 0,
                Node::Split { left, right, .. } => 1 + walk(left).max(walk(right)),
            }
        }
        walk(&self.root)
    }

    pub fn leaf_count(&self) -> usize {
        fn walk(node: &Node) -> usize {
            match node {
                Node::Leaf { .. } => 1,
                Node::Split { left, right, .. } => walk(left) + walk(right),
            }
        }
        walk(&self.root)
    }
}

/// Best split found so far for one node
struct Split {
    feature:   usize,
    threshold: f64,
    impurity:  f64,
}

fn grow<R: Rng + ?Sized>(
    examples: &[LabeledExample],
    indices:  Vec<usize>,
    depth:    usize,
    params:   &TreeParams,
    rng:      &mut R,
) -> Node {
    let counts = class_counts(examples, &indices);

    let at_depth_limit = params.max_depth.is_some_and(|max| depth >= max);
    if at_depth_limit || indices.len() < params.min_samples_split || gini_impurity(&counts) == 0.0 {
        return leaf(&counts);
    }

    let Some(split) = find_best_split(examples, &indices, params.max_features, rng) else {
        // Every feature is constant here but the labels are mixed
        return leaf(&counts);
    };

    let (left, right): (Vec<usize>, Vec<usize>) = indices
        .iter()
        .partition(|&&i| examples[i].features[split.feature] <= split.threshold);

    Node::Split {
        feature:   split.feature,
        threshold: split.threshold,
        left:      Box::new(grow(examples, left, depth + 1, params, rng)),
        right:     Box::new(grow(examples, right, depth + 1, params, rng)),
    }
}

fn find_best_split<R: Rng + ?Sized>(
    examples:     &[LabeledExample],
    indices:      &[usize],
    max_features: usize,
    rng:          &mut R,
) -> Option<Split> {
    let mut features: Vec<usize> = (0..FEATURE_LEN).collect();
    features.shuffle(rng);

    let total       = indices.len();
    let mut best    = None::<Split>;
    let mut visited = 0usize;

    for feature in features {
        if visited >= max_features && best.is_some() {
            break;
        }

        // (value, class) pairs sorted by value
        let mut column: Vec<(f64, usize)> = indices
            .iter()
            .map(|&i| (examples[i].features[feature], examples[i].label.index()))
            .collect();
        column.sort_by(|a, b| a.0.total_cmp(&b.0));

        let (lowest, highest) = (column[0].0, column[total - 1].0);
        if highest - lowest < f64::EPSILON {
            continue;
        }
        visited += 1;

        // Everything starts on the right, then moves left one sample at a time
        let mut left_counts  = [0usize; RiskLevel::COUNT];
        let mut right_counts = [0usize; RiskLevel::COUNT];
        for &(_, class) in &column {
            right_counts[class] += 1;
        }

        for i in 0..total - 1 {
            let (value, class) = column[i];
            left_counts[class]  += 1;
            right_counts[class] -= 1;

            let next_value = column[i + 1].0;
            if next_value - value < f64::EPSILON {
                continue;
            }

            let n_left  = (i + 1) as f64;
            let n_right = (total - i - 1) as f64;
            let impurity = (n_left * gini_impurity(&left_counts)
                + n_right * gini_impurity(&right_counts))
                / total as f64;

            if best.as_ref().map_or(true, |b| impurity < b.impurity) {
                best = Some(Split {
                    feature,
                    threshold: 0.5 * (value + next_value),
                    impurity,
                });
            }
        }
    }

    best
}

fn class_counts(examples: &[LabeledExample], indices: &[usize]) -> [usize; RiskLevel::COUNT] {
    let mut counts = [0usize; RiskLevel::COUNT];
    for &i in indices {
        counts[examples[i].label.index()] += 1;
    }
    counts
}

fn leaf(counts: &[usize; RiskLevel::COUNT]) -> Node {
    let total: usize = counts.iter().sum();
    let mut distribution = [0.0; RiskLevel::COUNT];
    if total > 0 {
        for (p, &c) in distribution.iter_mut().zip(counts) {
            *p = c as f64 / total as f64;
        }
    }
    Node::Leaf { distribution }
}

/// Gini impurity of a set of class counts
pub fn gini_impurity(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let sum_sq: f64 = counts
        .iter()
        .map(|&c| {
            let p = c as f64 / total as f64;
            p * p
        })
        .sum();
    1.0 - sum_sq
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::features::{AGE_INDEX, SMOKING_INDEX};
    use rand::{rngs::StdRng, SeedableRng};

    fn example(age: f64, smoking: f64, label: RiskLevel) -> LabeledExample {
        let mut values = [0.0; FEATURE_LEN];
        values[AGE_INDEX]     = age;
        values[SMOKING_INDEX] = smoking;
        LabeledExample { features: FeatureVector::new(values), label }
    }

    fn unlimited(max_features: usize) -> TreeParams {
        TreeParams { max_depth: None, min_samples_split: 2, max_features }
    }

    #[test]
    fn test_gini_impurity() {
        assert_eq!(gini_impurity(&[10, 0, 0]), 0.0);
        assert!((gini_impurity(&[5, 5, 0]) - 0.5).abs() < 1e-12);
        assert!((gini_impurity(&[1, 1, 1]) - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(gini_impurity(&[0, 0, 0]), 0.0);
    }

    #[test]
    fn test_separable_data_is_learned_exactly() {
        // Smoking alone decides the label
        let examples: Vec<_> = (0..20)
            .map(|i| {
                let smoking = (i % 2) as f64;
                let label = if smoking > 0.0 { RiskLevel::High } else { RiskLevel::Low };
                example(30.0 + i as f64, smoking, label)
            })
            .collect();
        let sample: Vec<usize> = (0..examples.len()).collect();
        let tree = DecisionTree::fit(&examples, &sample, &unlimited(FEATURE_LEN), &mut StdRng::seed_from_u64(3));

        for ex in &examples {
            let dist = tree.predict_proba(&ex.features);
            assert_eq!(dist[ex.label.index()], 1.0);
        }
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.leaf_count(), 2);
    }

    #[test]
    fn test_pure_sample_is_single_leaf() {
        let examples = vec![example(20.0, 0.0, RiskLevel::Medium), example(60.0, 1.0, RiskLevel::Medium)];
        let tree = DecisionTree::fit(&examples, &[0, 1], &unlimited(3), &mut StdRng::seed_from_u64(0));
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.predict_proba(&examples[0].features), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_identical_features_with_mixed_labels_give_mixed_leaf() {
        let examples = vec![
            example(40.0, 1.0, RiskLevel::Low),
            example(40.0, 1.0, RiskLevel::High),
            example(40.0, 1.0, RiskLevel::High),
            example(40.0, 1.0, RiskLevel::High),
        ];
        let tree = DecisionTree::fit(&examples, &[0, 1, 2, 3], &unlimited(3), &mut StdRng::seed_from_u64(0));
        assert_eq!(tree.leaf_count(), 1);
        assert_eq!(tree.predict_proba(&examples[0].features), [0.25, 0.0, 0.75]);
    }

    #[test]
    fn test_repeated_indices_weight_the_leaf() {
        let examples = vec![example(40.0, 0.0, RiskLevel::Low), example(40.0, 0.0, RiskLevel::High)];
        let tree = DecisionTree::fit(&examples, &[0, 0, 0, 1], &unlimited(3), &mut StdRng::seed_from_u64(0));
        assert_eq!(tree.predict_proba(&examples[0].features), [0.75, 0.0, 0.25]);
    }

    #[test]
    fn test_depth_limit_is_respected() {
        let examples: Vec<_> = (0..40)
            .map(|i| {
                let label = RiskLevel::ALL[i % 3];
                example(18.0 + i as f64, (i % 2) as f64, label)
            })
            .collect();
        let sample: Vec<usize> = (0..examples.len()).collect();
        let params = TreeParams { max_depth: Some(2), min_samples_split: 2, max_features: FEATURE_LEN };
        let tree = DecisionTree::fit(&examples, &sample, &params, &mut StdRng::seed_from_u64(11));
        assert!(tree.depth() <= 2);
    }
}
