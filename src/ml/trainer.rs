// ============================================================
// Layer 5 — Training
// ============================================================
// Turns a ClassifierConfig and a set of labelled examples into
// a fitted RandomForest.
//
// The same RNG that generated the examples is threaded through
// here so a single seed pins the whole run: synthetic data,
// bootstrap draws and per-split feature order.

use anyhow::Result;
use rand::Rng;

use crate::application::train_use_case::ClassifierConfig;
use crate::data::synthetic::LabeledExample;
use crate::ml::forest::RandomForest;

pub fn run_training<R: Rng + ?Sized>(
    cfg:      &ClassifierConfig,
    examples: &[LabeledExample],
    rng:      &mut R,
) -> Result<RandomForest> {
    let params = cfg.forest_params();
    tracing::info!(
        "Fitting {} trees on {} examples (max_features={}, bootstrap={})",
        params.n_trees,
        examples.len(),
        params.tree.max_features,
        params.bootstrap,
    );

    let forest = RandomForest::fit(examples, &params, rng)?;

    tracing::info!(
        "Forest ready: {} trees, deepest={}, leaves={}",
        forest.n_trees(),
        forest.max_depth(),
        forest.total_leaves(),
    );
    Ok(forest)
}
