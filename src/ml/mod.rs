// ============================================================
// Layer 5 — ML / Model Layer
// ============================================================
// All model code lives here. Other layers see only the
// RiskClassifier and the `run_training` entry point.
//
// What's in this layer:
//
//   tree.rs       — A CART classification tree
//                   • Gini impurity split search
//                   • Random feature subset per split
//                   • Leaves hold class distributions
//
//   forest.rs     — Bagged ensemble of trees
//                   • Bootstrap resampling per tree
//                   • Probability = mean of leaf distributions
//
//   trainer.rs    — Fits a forest from a ClassifierConfig
//                   and a labelled training set
//
//   classifier.rs — The read-only, trained model
//                   Maps a FeatureVector to a PredictionResult
//                   and reports accuracy on labelled data
//
// Reference: Breiman et al. (1984) Classification and Regression Trees
//            Breiman (2001) Random Forests

/// Single classification tree
pub mod tree;

/// Bagged ensemble of trees
pub mod forest;

/// Forest fitting from configuration
pub mod trainer;

/// Trained classifier serving predictions
pub mod classifier;
