// ============================================================
// Layer 3 — Symptom Vocabulary and Feature Vector
// ============================================================
// The contract between the feature encoder and the classifier.
//
// Layout of a FeatureVector (14 slots):
//
//   index  meaning
//   ─────  ───────────────────────────────
//     0    age in years
//     1    gender        (1 = female, 0 = otherwise)
//     2    smoking       (0 / 1)
//     3    exercise      (0 / 1)
//     4    fever         (0 / 1)
//     5    cough
//     6    fatigue
//     7    shortness_of_breath
//     8    headache
//     9    body_ache
//    10    sore_throat
//    11    loss_of_taste
//    12    chest_pain
//    13    dizziness
//
// Changing SYMPTOM_VOCABULARY changes FEATURE_LEN and the slot
// order, which invalidates any classifier trained on the old
// layout. Since classifiers only live for one process that is
// only a concern within a single run.
//
// Reference: Rust Book §3 (Constants), §8 (Arrays and Slices)

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Known symptom identifiers, in feature-vector order
pub const SYMPTOM_VOCABULARY: [&str; 10] = [
    "fever",
    "cough",
    "fatigue",
    "shortness_of_breath",
    "headache",
    "body_ache",
    "sore_throat",
    "loss_of_taste",
    "chest_pain",
    "dizziness",
];

pub const AGE_INDEX:      usize = 0;
pub const GENDER_INDEX:   usize = 1;
pub const SMOKING_INDEX:  usize = 2;
pub const EXERCISE_INDEX: usize = 3;

/// Index of the first symptom indicator
pub const SYMPTOM_OFFSET: usize = 4;

/// Total number of slots in a FeatureVector
pub const FEATURE_LEN: usize = SYMPTOM_OFFSET + SYMPTOM_VOCABULARY.len();

/// Fixed-length numeric encoding of one HealthRecord.
///
/// The array length makes a wrong-sized vector unrepresentable
/// once constructed; [`FeatureVector::from_slice`] is the one
/// place where a length mismatch can surface, and it panics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_LEN]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_LEN]) -> Self {
        Self(values)
    }

    /// Build a vector from a slice.
    ///
    /// # Panics
    /// If `values.len() != FEATURE_LEN`. A wrong-length vector is a
    /// caller bug, not a recoverable condition.
    pub fn from_slice(values: &[f64]) -> Self {
        assert_eq!(
            values.len(),
            FEATURE_LEN,
            "feature vector must have exactly {FEATURE_LEN} values, got {}",
            values.len(),
        );
        let mut out = [0.0; FEATURE_LEN];
        out.copy_from_slice(values);
        Self(out)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn age(&self) -> f64 {
        self.0[AGE_INDEX]
    }

    /// The ten symptom indicators, in vocabulary order
    pub fn symptoms(&self) -> &[f64] {
        &self.0[SYMPTOM_OFFSET..]
    }

    /// Number of vocabulary symptoms flagged as present
    pub fn symptom_count(&self) -> f64 {
        self.symptoms().iter().sum()
    }
}

impl Index<usize> for FeatureVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

/// Position of a symptom in the feature vector, if it is known
pub fn symptom_index(symptom: &str) -> Option<usize> {
    SYMPTOM_VOCABULARY
        .iter()
        .position(|s| *s == symptom)
        .map(|i| SYMPTOM_OFFSET + i)
}
