// ============================================================
// Layer 6 — Metrics Logger
// ============================================================
// Records evaluation results to a CSV file, one row per run.
//
// Metrics recorded per run:
//   - n_trees:         forest size
//   - n_samples:       synthetic training set size
//   - holdout:         number of holdout examples scored
//   - seed:            training seed (empty for entropy runs)
//   - train_accuracy:  accuracy on the training examples
//   - accuracy:        accuracy on the holdout examples
//   - low_recall, medium_recall, high_recall:
//                      per-label recall on the holdout
//                      (empty when the label never occurred)
//
// Output file: <metrics-dir>/metrics.csv
//
// Example CSV output:
//   n_trees,n_samples,holdout,seed,train_accuracy,accuracy,low_recall,medium_recall,high_recall
//   10,100,200,42,0.970000,0.765000,0.541667,0.893939,0.230769
//   10,100,200,,0.980000,0.740000,0.500000,0.878788,0.200000
//
// Reference: Rust Book §12 (I/O and File Handling)

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};
use serde::{Deserialize, Serialize};

use crate::application::evaluate_use_case::EvaluationReport;
use crate::domain::risk::RiskLevel;

const HEADER: &str =
    "n_trees,n_samples,holdout,seed,train_accuracy,accuracy,low_recall,medium_recall,high_recall";

/// One row of metrics for a single evaluation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationMetrics {
    pub n_trees:        usize,
    pub n_samples:      usize,
    pub holdout:        usize,
    pub seed:           Option<u64>,
    pub train_accuracy: f64,
    pub accuracy:       f64,

    /// Recall per label in Low, Medium, High order
    pub recall:         [Option<f64>; RiskLevel::COUNT],
}

impl EvaluationMetrics {
    pub fn from_report(report: &EvaluationReport, seed: Option<u64>) -> Self {
        Self {
            n_trees:        report.n_trees,
            n_samples:      report.training.n_samples,
            holdout:        report.holdout,
            seed,
            train_accuracy: report.training.training_accuracy,
            accuracy:       report.accuracy,
            recall:         RiskLevel::ALL.map(|level| report.class_accuracy.get(&level).copied()),
        }
    }

    /// Format as one CSV row (no trailing newline)
    pub fn to_csv_row(&self) -> String {
        let optional = |v: Option<f64>| v.map(|x| format!("{x:.6}")).unwrap_or_default();
        format!(
            "{},{},{},{},{:.6},{:.6},{},{},{}",
            self.n_trees,
            self.n_samples,
            self.holdout,
            self.seed.map(|s| s.to_string()).unwrap_or_default(),
            self.train_accuracy,
            self.accuracy,
            optional(self.recall[0]),
            optional(self.recall[1]),
            optional(self.recall[2]),
        )
    }
}

/// Appends evaluation metrics to a CSV file for later comparison.
pub struct MetricsLogger {
    /// Full path to the CSV file
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Create a new MetricsLogger.
    /// Writes the CSV header if the file doesn't exist yet.
    pub fn new(dir: impl Into<String>) -> Result<Self> {
        let dir = PathBuf::from(dir.into());

        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create metrics directory '{}'", dir.display()))?;

        let csv_path = dir.join("metrics.csv");

        // Header only for a new file, so runs accumulate
        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)?;
            writeln!(f, "{HEADER}")?;
            tracing::debug!("Created metrics CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append one run's metrics as a new row in the CSV.
    pub fn log(&self, m: &EvaluationMetrics) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot open '{}'", self.csv_path.display()))?;

        writeln!(f, "{}", m.to_csv_row())?;

        tracing::debug!(
            "Logged metrics: accuracy={:.4}, train_accuracy={:.4}",
            m.accuracy,
            m.train_accuracy,
        );

        Ok(())
    }

    /// Return the path to the metrics CSV file
    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}
