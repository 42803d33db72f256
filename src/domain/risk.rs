// ============================================================
// Layer 3 — Risk Levels and Predictions
// ============================================================
// A prediction is one of three risk levels plus the full
// probability distribution the classifier assigned.
//
// risk_score is the classifier's confidence in its own top
// choice (max probability × 100). It is NOT a measure of how
// severe the risk is: a confident "Low" scores as high as a
// confident "High".
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three risk categories, ordered from least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Number of classes the classifier distinguishes
    pub const COUNT: usize = 3;

    /// All levels, in class-index order
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    /// Class index used inside the classifier (Low = 0)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low    => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High   => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Probability assigned to each risk level.
/// Serialises as `{"Low": .., "Medium": .., "High": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Probabilities {
    #[serde(rename = "Low")]
    pub low: f64,

    #[serde(rename = "Medium")]
    pub medium: f64,

    #[serde(rename = "High")]
    pub high: f64,
}

impl Probabilities {
    /// Build from a distribution indexed by [`RiskLevel::index`]
    pub fn from_array(values: [f64; RiskLevel::COUNT]) -> Self {
        Self { low: values[0], medium: values[1], high: values[2] }
    }

    pub fn to_array(&self) -> [f64; RiskLevel::COUNT] {
        [self.low, self.medium, self.high]
    }

    pub fn get(&self, level: RiskLevel) -> f64 {
        self.to_array()[level.index()]
    }

    pub fn total(&self) -> f64 {
        self.low + self.medium + self.high
    }

    /// Largest probability in the distribution
    pub fn max(&self) -> f64 {
        self.low.max(self.medium).max(self.high)
    }

    /// Most probable level. Ties go to the less severe level.
    pub fn most_likely(&self) -> RiskLevel {
        let values = self.to_array();
        let mut best = 0usize;
        for (i, &p) in values.iter().enumerate().skip(1) {
            if p > values[best] {
                best = i;
            }
        }
        RiskLevel::ALL[best]
    }
}

/// What the classifier returns for one feature vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Predicted risk level
    #[serde(rename = "prediction")]
    pub label: RiskLevel,

    /// max(probabilities) × 100, in [0, 100]
    pub risk_score: f64,

    pub probabilities: Probabilities,
}

impl PredictionResult {
    /// Build a result, deriving risk_score from the distribution
    pub fn new(label: RiskLevel, probabilities: Probabilities) -> Self {
        Self {
            label,
            risk_score: probabilities.max() * 100.0,
            probabilities,
        }
    }
}
