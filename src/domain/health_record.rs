// ============================================================
// Layer 3 — HealthRecord Domain Type
// ============================================================
// The questionnaire a caller submits for a risk prediction.
//
// Every field is optional on the wire. Absent fields are
// filled in by serde so a request body of `{}` is a valid
// record. The feature encoder applies the remaining defaults
// (age 25, male gender) when it turns a record into numbers.
//
// Example request body:
//   {
//     "age": 70,
//     "gender": "male",
//     "symptoms": ["fever", "cough"],
//     "lifestyle_smoking": true,
//     "lifestyle_exercise": false
//   }
//
// `blood_pressure` and `sugar_level` are accepted so existing
// clients can keep sending them, but no feature reads them.
//
// Reference: Rust Book §5 (Structs)
//            serde documentation (field attributes)

use serde::{Deserialize, Serialize};

/// Age assumed when a record does not carry one
pub const DEFAULT_AGE: u32 = 25;

/// One health questionnaire. Request-scoped, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthRecord {
    /// Age in whole years. `None` encodes as [`DEFAULT_AGE`].
    #[serde(default)]
    pub age: Option<u32>,

    /// Free-text gender. Only the exact value "female" is
    /// distinguished; anything else encodes as male.
    #[serde(default)]
    pub gender: Option<String>,

    /// Symptom identifiers, matched exactly against the vocabulary
    #[serde(default)]
    pub symptoms: Vec<String>,

    #[serde(default)]
    pub lifestyle_smoking: bool,

    #[serde(default)]
    pub lifestyle_exercise: bool,

    /// Accepted but unused by the classifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_pressure: Option<String>,

    /// Accepted but unused by the classifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugar_level: Option<String>,
}

impl HealthRecord {
    /// Create an empty record. Every field takes its default.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    /// Replace the symptom list. Accepts anything that yields
    /// string-like items so callers can pass `&[&str]` or `Vec<String>`.
    pub fn with_symptoms<I, S>(mut self, symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symptoms = symptoms.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_smoking(mut self, smoking: bool) -> Self {
        self.lifestyle_smoking = smoking;
        self
    }

    pub fn with_exercise(mut self, exercise: bool) -> Self {
        self.lifestyle_exercise = exercise;
        self
    }

    /// The age used for encoding, after defaulting
    pub fn effective_age(&self) -> u32 {
        self.age.unwrap_or(DEFAULT_AGE)
    }

    /// True only for the literal value "female"
    pub fn is_female(&self) -> bool {
        self.gender.as_deref() == Some("female")
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_uses_defaults() {
        let record: HealthRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, HealthRecord::default());
        assert_eq!(record.effective_age(), DEFAULT_AGE);
        assert!(!record.is_female());
        assert!(record.symptoms.is_empty());
    }

    #[test]
    fn test_unused_fields_are_accepted() {
        let body = r#"{
            "age": 41,
            "gender": "female",
            "symptoms": ["cough"],
            "lifestyle_smoking": false,
            "lifestyle_exercise": true,
            "blood_pressure": "120/80",
            "sugar_level": "normal"
        }"#;
        let record: HealthRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.effective_age(), 41);
        assert!(record.is_female());
        assert!(record.lifestyle_exercise);
        assert_eq!(record.blood_pressure.as_deref(), Some("120/80"));
    }

    #[test]
    fn test_gender_is_matched_exactly() {
        // Case and whitespace variants are not "female"
        assert!(!HealthRecord::new().with_gender("Female").is_female());
        assert!(!HealthRecord::new().with_gender(" female").is_female());
        assert!(HealthRecord::new().with_gender("female").is_female());
    }

    #[test]
    fn test_builder_sets_fields() {
        let record = HealthRecord::new()
            .with_age(70)
            .with_symptoms(["fever", "cough"])
            .with_smoking(true);
        assert_eq!(record.age, Some(70));
        assert_eq!(record.symptoms, vec!["fever".to_string(), "cough".to_string()]);
        assert!(record.lifestyle_smoking);
        assert!(!record.lifestyle_exercise);
    }
}
