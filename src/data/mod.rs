// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between a raw questionnaire and the numbers the
// classifier consumes, plus the generator for the synthetic
// examples the classifier is trained on.
//
// Request path:
//
//   HealthRecord
//       │
//       ▼
//   SymptomEncoder    → fixed 14-slot FeatureVector
//       │
//       ▼
//   RiskClassifier    (Layer 5)
//
// Training path:
//
//   seeded / entropy RNG
//       │
//       ▼
//   generate_examples → random FeatureVectors
//       │
//       ▼
//   synthetic_score   → rule-based RiskLevel label
//       │
//       ▼
//   RandomForest::fit (Layer 5)
//
// Reference: Rust Book §13 (Iterators and Closures)
//            rand crate documentation

/// Encodes health records into feature vectors
pub mod encoder;

/// Generates and labels synthetic training examples
pub mod synthetic;
