// ============================================================
// Layer 2 — Predict Use Case
// ============================================================
// Serves one prediction request:
//
//   1. Encode the record into a FeatureVector   (Layer 4)
//   2. Ask the trained predictor for a result   (Layer 5)
//   3. Attach the static advice for that label  (Layer 3)
//
// The predictor is handed in already trained and shared behind
// an Arc, so one model can back any number of use-case values
// and threads. Any failure comes back as a single
// "Prediction failed: ..." error with the cause attached; there
// is no retry and no partial response.

use anyhow::{anyhow, Result};
use serde::Serialize;
use std::sync::Arc;

use crate::data::encoder::SymptomEncoder;
use crate::domain::advice::advice_for;
use crate::domain::health_record::HealthRecord;
use crate::domain::risk::PredictionResult;
use crate::domain::traits::{FeatureEncoder, RiskPredictor};
use crate::ml::classifier::RiskClassifier;

/// Response body: the prediction plus advice.
///
/// Serialises flat:
///   {prediction, risk_score, probabilities, suggested_steps, doctor_consult}
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    #[serde(flatten)]
    pub result: PredictionResult,

    pub suggested_steps: Vec<String>,

    pub doctor_consult: String,
}

pub struct PredictUseCase<P: RiskPredictor = RiskClassifier> {
    encoder:   SymptomEncoder,
    predictor: Arc<P>,
}

impl<P: RiskPredictor> PredictUseCase<P> {
    pub fn new(predictor: Arc<P>) -> Self {
        Self { encoder: SymptomEncoder::new(), predictor }
    }

    /// Run the full encode → predict → advise pipeline
    pub fn handle(&self, record: &HealthRecord) -> Result<PredictionResponse> {
        self.respond(record)
            .map_err(|e| anyhow!("Prediction failed: {e:#}"))
    }

    fn respond(&self, record: &HealthRecord) -> Result<PredictionResponse> {
        let features = self.encoder.encode(record);
        tracing::debug!("Encoded features: {:?}", features.as_slice());

        let result = self.predictor.assess(&features)?;
        let advice = advice_for(result.label);

        tracing::info!(
            "Predicted {} (risk_score={:.1})",
            result.label,
            result.risk_score,
        );

        Ok(PredictionResponse {
            result,
            suggested_steps: advice.suggested_steps.iter().map(|s| s.to_string()).collect(),
            doctor_consult:  advice.doctor_consult.to_string(),
        })
    }
}
