// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish one
// goal at a time (train, predict, evaluate).
//
// Rules for this layer:
//   - No tree or forest math here
//   - No terminal output here (that's Layer 1)
//   - No direct file access (that's Layer 6)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// Builds the classifier once at startup
pub mod train_use_case;

// Serves a single prediction request
pub mod predict_use_case;

// Scores a trained classifier on fresh synthetic data
pub mod evaluate_use_case;
