// ============================================================
// Layer 5 — Risk Classifier
// ============================================================
// The trained, read-only model that serves predictions.
//
// A RiskClassifier only exists in the Ready state: the sole way
// to obtain one is to fit a forest first (see TrainUseCase), so
// "predict before training" cannot be expressed. After
// construction nothing mutates it, which makes `&RiskClassifier`
// safe to share across threads without a lock.

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::data::synthetic::{label_counts, LabeledExample};
use crate::domain::features::FeatureVector;
use crate::domain::risk::{PredictionResult, Probabilities, RiskLevel};
use crate::domain::traits::RiskPredictor;
use crate::ml::forest::RandomForest;

/// Facts about the data a classifier was trained on
#[derive(Debug, Clone, Serialize)]
pub struct TrainingSummary {
    pub n_samples: usize,

    /// Training examples per label
    pub label_counts: BTreeMap<RiskLevel, usize>,

    /// Fraction of training examples the forest labels correctly
    pub training_accuracy: f64,
}

pub struct RiskClassifier {
    forest:  RandomForest,
    summary: TrainingSummary,
}

impl RiskClassifier {
    /// Wrap a fitted forest, recording how it does on its own training data
    pub fn new(forest: RandomForest, training: &[LabeledExample]) -> Self {
        let counts = label_counts(training);
        let mut classifier = Self {
            forest,
            summary: TrainingSummary {
                n_samples: training.len(),
                label_counts: RiskLevel::ALL
                    .iter()
                    .map(|&level| (level, counts[level.index()]))
                    .collect(),
                training_accuracy: 0.0,
            },
        };
        classifier.summary.training_accuracy = classifier.accuracy(training);
        classifier
    }

    /// Predict the risk level and class distribution for one vector
    pub fn predict(&self, features: &FeatureVector) -> PredictionResult {
        let probabilities = Probabilities::from_array(self.forest.predict_proba(features));
        PredictionResult::new(probabilities.most_likely(), probabilities)
    }

    /// Predict from a raw slice.
    ///
    /// # Panics
    /// If the slice is not exactly 14 values long.
    pub fn predict_slice(&self, values: &[f64]) -> PredictionResult {
        self.predict(&FeatureVector::from_slice(values))
    }

    /// Fraction of examples whose predicted label matches
    pub fn accuracy(&self, examples: &[LabeledExample]) -> f64 {
        if examples.is_empty() {
            return 0.0;
        }
        let correct = examples
            .iter()
            .filter(|ex| self.predict(&ex.features).label == ex.label)
            .count();
        correct as f64 / examples.len() as f64
    }

    /// Per-label recall. Labels with no examples are left out.
    pub fn class_accuracy(&self, examples: &[LabeledExample]) -> BTreeMap<RiskLevel, f64> {
        let mut seen    = [0usize; RiskLevel::COUNT];
        let mut correct = [0usize; RiskLevel::COUNT];

        for ex in examples {
            seen[ex.label.index()] += 1;
            if self.predict(&ex.features).label == ex.label {
                correct[ex.label.index()] += 1;
            }
        }

        RiskLevel::ALL
            .iter()
            .filter(|level| seen[level.index()] > 0)
            .map(|&level| (level, correct[level.index()] as f64 / seen[level.index()] as f64))
            .collect()
    }

    pub fn summary(&self) -> &TrainingSummary {
        &self.summary
    }

    pub fn n_trees(&self) -> usize {
        self.forest.n_trees()
    }
}

impl RiskPredictor for RiskClassifier {
    fn assess(&self, features: &FeatureVector) -> Result<PredictionResult> {
        Ok(self.predict(features))
    }
}
