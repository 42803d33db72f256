// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The request handler in Layer 2 only talks to these traits,
// so the encoder and the classifier can be swapped (or stubbed
// in tests) without touching the prediction workflow.
//
//   FeatureEncoder → implemented by data::encoder::SymptomEncoder
//   RiskPredictor  → implemented by ml::classifier::RiskClassifier
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::domain::features::FeatureVector;
use crate::domain::health_record::HealthRecord;
use crate::domain::risk::PredictionResult;

// ─── FeatureEncoder ───────────────────────────────────────────────────────────
/// Turns a questionnaire into the classifier's numeric input.
///
/// Encoding is total: every type-correct record produces a vector.
pub trait FeatureEncoder {
    fn encode(&self, record: &HealthRecord) -> FeatureVector;
}

// ─── RiskPredictor ────────────────────────────────────────────────────────────
/// Anything that can assign a risk level to a feature vector.
///
/// Implementations must be read-only after construction: the
/// same instance is shared by every caller without locking.
pub trait RiskPredictor: Send + Sync {
    fn assess(&self, features: &FeatureVector) -> Result<PredictionResult>;
}
