// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting file and stream I/O that doesn't belong in
// any business layer:
//
//   config_store.rs   — Classifier configuration as JSON
//                       Loads (with defaults for missing keys
//                       and validation) and saves the settings
//                       that shape the trained model.
//
//   request_reader.rs — Request bodies
//                       Reads a JSON HealthRecord from a file
//                       or from standard input.
//
//   metrics.rs        — Evaluation metrics logging
//                       Appends one CSV row per evaluation run
//                       for later comparison.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Classifier configuration file loading and saving
pub mod config_store;

/// JSON request body loading
pub mod request_reader;

/// Evaluation metrics CSV logger
pub mod metrics;
