// ============================================================
// Layer 4 — Feature Encoder
// ============================================================
// Converts a HealthRecord into the 14-slot FeatureVector the
// classifier was trained on.
//
// Encoding rules:
//   age       → the age unchanged, or 25 when absent
//   gender    → 1 only for the exact string "female", else 0
//   smoking   → 1 / 0
//   exercise  → 1 / 0
//   symptoms  → one 0/1 indicator per vocabulary entry, set
//               when that identifier appears anywhere in the
//               record's list (exact match)
//
// Unknown symptoms are dropped silently and duplicates count
// once. The encoder has no failure mode.
//
// Reference: Rust Book §13 (Iterators and Closures)

use crate::domain::features::{
    FeatureVector, AGE_INDEX, EXERCISE_INDEX, FEATURE_LEN, GENDER_INDEX, SMOKING_INDEX,
    SYMPTOM_OFFSET, SYMPTOM_VOCABULARY,
};
use crate::domain::health_record::HealthRecord;
use crate::domain::traits::FeatureEncoder;

pub struct SymptomEncoder;

impl SymptomEncoder {
    /// Create a new SymptomEncoder instance
    pub fn new() -> Self {
        Self
    }
}

impl Default for SymptomEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureEncoder for SymptomEncoder {
    fn encode(&self, record: &HealthRecord) -> FeatureVector {
        encode(record)
    }
}

/// Encode one record. Pure and total.
pub fn encode(record: &HealthRecord) -> FeatureVector {
    let mut values = [0.0f64; FEATURE_LEN];

    values[AGE_INDEX]      = f64::from(record.effective_age());
    values[GENDER_INDEX]   = indicator(record.is_female());
    values[SMOKING_INDEX]  = indicator(record.lifestyle_smoking);
    values[EXERCISE_INDEX] = indicator(record.lifestyle_exercise);

    for (i, symptom) in SYMPTOM_VOCABULARY.iter().enumerate() {
        let present = record.symptoms.iter().any(|s| s == symptom);
        values[SYMPTOM_OFFSET + i] = indicator(present);
    }

    FeatureVector::new(values)
}

fn indicator(flag: bool) -> f64 {
    if flag { 1.0 } else { 0.0 }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_encode_to_age_25_and_zeros() {
        let v = encode(&HealthRecord::default());
        let mut expected = [0.0; FEATURE_LEN];
        expected[0] = 25.0;
        assert_eq!(v.as_slice(), &expected);
    }

    #[test]
    fn test_length_and_binary_slots() {
        let record = HealthRecord::new()
            .with_age(63)
            .with_gender("female")
            .with_symptoms(["cough", "headache", "dizziness"])
            .with_smoking(true)
            .with_exercise(true);
        let v = encode(&record);

        assert_eq!(v.as_slice().len(), 14);
        assert_eq!(v.age(), 63.0);
        for &x in &v.as_slice()[1..] {
            assert!(x == 0.0 || x == 1.0);
        }
    }

    #[test]
    fn test_gender_encoding() {
        let female = encode(&HealthRecord::new().with_gender("female"));
        let male   = encode(&HealthRecord::new().with_gender("male"));
        let other  = encode(&HealthRecord::new().with_gender("nonbinary"));
        let absent = encode(&HealthRecord::new());

        assert_eq!(female[GENDER_INDEX], 1.0);
        assert_eq!(male[GENDER_INDEX],   0.0);
        assert_eq!(other[GENDER_INDEX],  0.0);
        assert_eq!(absent[GENDER_INDEX], 0.0);
    }

    #[test]
    fn test_selected_symptoms_only() {
        let v = encode(&HealthRecord::new().with_symptoms(["fever", "chest_pain"]));
        let symptoms = v.symptoms();

        // fever is vocabulary slot 0, chest_pain slot 8
        assert_eq!(symptoms[0], 1.0);
        assert_eq!(symptoms[8], 1.0);
        assert_eq!(v.symptom_count(), 2.0);
    }

    #[test]
    fn test_unknown_and_duplicate_symptoms() {
        let v = encode(&HealthRecord::new().with_symptoms(["unicorn_flu", "cough", "cough", "COUGH"]));
        assert_eq!(v.symptom_count(), 1.0);
        assert_eq!(v.symptoms()[1], 1.0);
    }

    #[test]
    fn test_reference_patient() {
        let record = HealthRecord::new()
            .with_age(70)
            .with_gender("male")
            .with_symptoms(["fever", "cough", "fatigue", "chest_pain"])
            .with_smoking(true)
            .with_exercise(false);

        let expected = [
            70.0, 0.0, 1.0, 0.0, // age, gender, smoking, exercise
            1.0, 1.0, 1.0,       // fever, cough, fatigue
            0.0, 0.0, 0.0, 0.0, 0.0, // shortness_of_breath .. loss_of_taste
            1.0,                 // chest_pain
            0.0,                 // dizziness
        ];
        assert_eq!(encode(&record).as_slice(), &expected);
    }

    #[test]
    fn test_trait_matches_free_function() {
        let record = HealthRecord::new().with_age(33).with_symptoms(["fatigue"]);
        assert_eq!(SymptomEncoder::new().encode(&record), encode(&record));
    }
}
