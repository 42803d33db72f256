// ============================================================
// Layer 4 — Synthetic Training Data
// ============================================================
// There is no real patient data. Training examples are drawn
// at random and labelled with a fixed scoring rule:
//
//   score = 0.3 * (age / 100)
//         + 0.2 * smoking
//         - 0.1 * exercise
//         + 0.4 * (symptom_count / 10)
//
//   score > 0.6        → High
//   0.3 < score ≤ 0.6  → Medium
//   otherwise          → Low
//
// The weights and thresholds are placeholders, not clinical
// knowledge. The forest only approximates this rule from a
// small sample, so its predictions can disagree with it.
//
// Sampling per example:
//   age       uniform integer in [18, 80)
//   gender    uniform in {0, 1}
//   smoking   uniform in {0, 1}
//   exercise  uniform in {0, 1}
//   symptoms  each indicator independently uniform in {0, 1}
//
// The RNG is passed in so callers decide between a fixed seed
// and OS entropy.

use rand::Rng;

use crate::domain::features::{
    FeatureVector, AGE_INDEX, EXERCISE_INDEX, FEATURE_LEN, GENDER_INDEX, SMOKING_INDEX,
    SYMPTOM_OFFSET, SYMPTOM_VOCABULARY,
};
use crate::domain::risk::RiskLevel;

pub const MIN_AGE: u32 = 18;
pub const MAX_AGE: u32 = 80; // exclusive

const HIGH_THRESHOLD:   f64 = 0.6;
const MEDIUM_THRESHOLD: f64 = 0.3;

/// One training example: features plus the rule-derived label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledExample {
    pub features: FeatureVector,
    pub label:    RiskLevel,
}

impl LabeledExample {
    /// Label a feature vector with the synthetic scoring rule
    pub fn from_features(features: FeatureVector) -> Self {
        Self { features, label: label_for_score(synthetic_score(&features)) }
    }
}

/// The placeholder risk score used to label synthetic data
pub fn synthetic_score(features: &FeatureVector) -> f64 {
    0.3 * (features.age() / 100.0)
        + 0.2 * features[SMOKING_INDEX]
        - 0.1 * features[EXERCISE_INDEX]
        + 0.4 * (features.symptom_count() / SYMPTOM_VOCABULARY.len() as f64)
}

/// Map a synthetic score onto a risk level
pub fn label_for_score(score: f64) -> RiskLevel {
    if score > HIGH_THRESHOLD {
        RiskLevel::High
    } else if score > MEDIUM_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Draw one random feature vector
pub fn sample_features<R: Rng + ?Sized>(rng: &mut R) -> FeatureVector {
    let mut values = [0.0f64; FEATURE_LEN];

    values[AGE_INDEX]      = f64::from(rng.gen_range(MIN_AGE..MAX_AGE));
    values[GENDER_INDEX]   = f64::from(rng.gen_range(0u8..2));
    values[SMOKING_INDEX]  = f64::from(rng.gen_range(0u8..2));
    values[EXERCISE_INDEX] = f64::from(rng.gen_range(0u8..2));

    for slot in values[SYMPTOM_OFFSET..].iter_mut() {
        *slot = f64::from(rng.gen_range(0u8..2));
    }

    FeatureVector::new(values)
}

/// Generate `n` labelled examples
pub fn generate_examples<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<LabeledExample> {
    (0..n)
        .map(|_| LabeledExample::from_features(sample_features(rng)))
        .collect()
}

/// Count how many examples carry each label, indexed by [`RiskLevel::index`]
pub fn label_counts(examples: &[LabeledExample]) -> [usize; RiskLevel::COUNT] {
    let mut counts = [0usize; RiskLevel::COUNT];
    for ex in examples {
        counts[ex.label.index()] += 1;
    }
    counts
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn vector(age: f64, smoking: f64, exercise: f64, symptoms: usize) -> FeatureVector {
        let mut values = [0.0; FEATURE_LEN];
        values[AGE_INDEX]      = age;
        values[SMOKING_INDEX]  = smoking;
        values[EXERCISE_INDEX] = exercise;
        for slot in values[SYMPTOM_OFFSET..SYMPTOM_OFFSET + symptoms].iter_mut() {
            *slot = 1.0;
        }
        FeatureVector::new(values)
    }

    #[test]
    fn test_score_formula() {
        // 0.3*0.5 + 0.2 - 0 + 0.4*0.5 = 0.55
        let score = synthetic_score(&vector(50.0, 1.0, 0.0, 5));
        assert!((score - 0.55).abs() < 1e-12);

        // 0.3*0.2 + 0 - 0.1 + 0 = -0.04
        let score = synthetic_score(&vector(20.0, 0.0, 1.0, 0));
        assert!((score + 0.04).abs() < 1e-12);
    }

    #[test]
    fn test_thresholds_are_exclusive_below() {
        assert_eq!(label_for_score(0.61), RiskLevel::High);
        assert_eq!(label_for_score(0.6),  RiskLevel::Medium);
        assert_eq!(label_for_score(0.31), RiskLevel::Medium);
        assert_eq!(label_for_score(0.3),  RiskLevel::Low);
        assert_eq!(label_for_score(-0.1), RiskLevel::Low);
    }

    #[test]
    fn test_samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for ex in generate_examples(500, &mut rng) {
            let age = ex.features.age();
            assert!(age >= 18.0 && age < 80.0);
            assert_eq!(age.fract(), 0.0);
            for &x in &ex.features.as_slice()[1..] {
                assert!(x == 0.0 || x == 1.0);
            }
            assert_eq!(ex.label, label_for_score(synthetic_score(&ex.features)));
        }
    }

    #[test]
    fn test_same_seed_same_examples() {
        let a = generate_examples(20, &mut StdRng::seed_from_u64(99));
        let b = generate_examples(20, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_label_counts_cover_all_examples() {
        let examples = generate_examples(100, &mut StdRng::seed_from_u64(1));
        let counts   = label_counts(&examples);
        assert_eq!(counts.iter().sum::<usize>(), 100);
    }
}
