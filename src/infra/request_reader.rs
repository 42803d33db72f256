// ============================================================
// Layer 6 — Request Reader
// ============================================================
// Loads a HealthRecord from a JSON request body stored in a
// file, or from standard input when the source is "-".
//
// The body has the same shape the prediction endpoint accepts:
//   {age, gender, symptoms, lifestyle_smoking, lifestyle_exercise,
//    blood_pressure?, sugar_level?}

use anyhow::{Context, Result};
use std::{fs, io};

use crate::domain::health_record::HealthRecord;

/// Source name that means "read standard input"
pub const STDIN_SOURCE: &str = "-";

pub fn read_health_record(source: &str) -> Result<HealthRecord> {
    let body = if source == STDIN_SOURCE {
        io::read_to_string(io::stdin()).context("Cannot read request body from stdin")?
    } else {
        fs::read_to_string(source)
            .with_context(|| format!("Cannot read request body from '{source}'"))?
    };

    parse_health_record(&body)
        .with_context(|| format!("Invalid request body in '{source}'"))
}

/// Parse a JSON request body
pub fn parse_health_record(body: &str) -> Result<HealthRecord> {
    Ok(serde_json::from_str(body)?)
}
