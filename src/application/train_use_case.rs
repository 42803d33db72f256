// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Builds the one classifier a process serves from. Runs
// synchronously, before any prediction is accepted:
//
//   Step 1: Validate the configuration
//   Step 2: Seed the RNG             (fixed seed or OS entropy)
//   Step 3: Generate training data   (Layer 4 - data)
//   Step 4: Fit the forest           (Layer 5 - ml)
//   Step 5: Wrap it as a classifier  (Layer 5 - ml)
//
// Without a seed every run trains a different model, so the
// same record can get different predictions across runs.
// Tests pin `seed` to make the model reproducible.
//
// Reference: Rust Book §9 (Error Handling)
//            rand crate documentation (SeedableRng)

use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::synthetic::{generate_examples, label_counts};
use crate::domain::features::FEATURE_LEN;
use crate::domain::risk::RiskLevel;
use crate::ml::classifier::RiskClassifier;
use crate::ml::forest::ForestParams;
use crate::ml::trainer::run_training;
use crate::ml::tree::TreeParams;

// ─── Classifier Configuration ────────────────────────────────────────────────
// Everything that shapes the trained model. Serialisable so it
// can be read from (and written to) a JSON file; missing keys
// in that file fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Number of synthetic training examples
    pub n_samples: usize,

    /// Number of trees in the forest
    pub n_trees: usize,

    /// Depth limit per tree; `None` grows until leaves are pure
    pub max_depth: Option<usize>,

    /// Smallest node that may still be split
    pub min_samples_split: usize,

    /// Features tried per split; `None` means ⌊√14⌋ = 3
    pub max_features: Option<usize>,

    /// Train each tree on a bootstrap resample
    pub bootstrap: bool,

    /// RNG seed; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            n_samples:         100,
            n_trees:           10,
            max_depth:         None,
            min_samples_split: 2,
            max_features:      None,
            bootstrap:         true,
            seed:              None,
        }
    }
}

/// Reasons a ClassifierConfig cannot produce a model
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("n_trees must be at least 1")]
    NoTrees,

    #[error("n_samples must be at least 1")]
    NoSamples,

    #[error("min_samples_split must be at least 2, got {0}")]
    MinSamplesSplit(usize),

    #[error("max_features must be between 1 and {max}, got {got}")]
    MaxFeatures { got: usize, max: usize },

    #[error("max_depth must be at least 1 when set")]
    ZeroDepth,
}

impl ClassifierConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_trees == 0 {
            return Err(ConfigError::NoTrees);
        }
        if self.n_samples == 0 {
            return Err(ConfigError::NoSamples);
        }
        if self.min_samples_split < 2 {
            return Err(ConfigError::MinSamplesSplit(self.min_samples_split));
        }
        if let Some(got) = self.max_features {
            if got == 0 || got > FEATURE_LEN {
                return Err(ConfigError::MaxFeatures { got, max: FEATURE_LEN });
            }
        }
        if self.max_depth == Some(0) {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }

    /// Features tried per split after applying the √n default
    pub fn effective_max_features(&self) -> usize {
        self.max_features
            .unwrap_or_else(|| ((FEATURE_LEN as f64).sqrt() as usize).max(1))
    }

    pub fn forest_params(&self) -> ForestParams {
        ForestParams {
            n_trees:   self.n_trees,
            bootstrap: self.bootstrap,
            tree: TreeParams {
                max_depth:         self.max_depth,
                min_samples_split: self.min_samples_split,
                max_features:      self.effective_max_features(),
            },
        }
    }

    /// RNG for one training run
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        }
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    config: ClassifierConfig,
}

impl TrainUseCase {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Generate synthetic data, fit the forest, return a ready classifier
    pub fn execute(&self) -> Result<RiskClassifier> {
        let cfg = &self.config;

        // ── Step 1: Reject unusable settings up front ─────────────────────────
        cfg.validate()?;

        // ── Step 2: One RNG drives data, bootstrap and split order ────────────
        let mut rng = cfg.rng();
        match cfg.seed {
            Some(seed) => tracing::info!("Training with fixed seed {}", seed),
            None       => tracing::info!("Training with entropy seed; predictions vary between runs"),
        }

        // ── Step 3: Synthetic labelled examples ───────────────────────────────
        let examples = generate_examples(cfg.n_samples, &mut rng);
        let counts   = label_counts(&examples);
        tracing::info!(
            "Generated {} synthetic examples: {}={}, {}={}, {}={}",
            examples.len(),
            RiskLevel::Low,    counts[RiskLevel::Low.index()],
            RiskLevel::Medium, counts[RiskLevel::Medium.index()],
            RiskLevel::High,   counts[RiskLevel::High.index()],
        );

        // ── Step 4: Fit ───────────────────────────────────────────────────────
        let forest = run_training(cfg, &examples, &mut rng)?;

        // ── Step 5: Freeze into a classifier ──────────────────────────────────
        let classifier = RiskClassifier::new(forest, &examples);
        tracing::info!(
            "Classifier ready: training accuracy {:.1}%",
            classifier.summary().training_accuracy * 100.0,
        );

        Ok(classifier)
    }
}
