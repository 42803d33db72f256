// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that define the core
// concepts of the system: what a health record IS, what a
// feature vector IS, what a risk prediction IS.
//
// Rules for this layer:
//   - NO random number generation
//   - NO file I/O or terminal output
//   - NO model code (trees, forests, training)
//   - Only plain Rust types, constants, and traits
//
// Keeping this layer pure means every type here can be unit
// tested without training a classifier first.
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// The questionnaire submitted by a caller
pub mod health_record;

// The fixed symptom vocabulary and the 14-slot feature vector
pub mod features;

// Risk levels, probability distributions and prediction results
pub mod risk;

// Static advice text attached to each risk level
pub mod advice;

// Core abstractions (traits) that other layers implement
pub mod traits;
