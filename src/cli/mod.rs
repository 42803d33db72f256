// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// The entry point for all user interaction. Parses arguments
// with `clap`, delegates the work to Layer 2, and prints the
// result as JSON on stdout (logs go to stderr).
//
// Commands:
//   1. `predict`  — train once, then answer one record
//   2. `evaluate` — train, then score on a holdout set
//   3. `symptoms` — list the symptom vocabulary
//   4. `config`   — show or save the effective settings
//   5. `health`   — liveness check
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::sync::Arc;

use commands::{Commands, ConfigArgs, EvaluateArgs, PredictArgs};

use crate::domain::features::SYMPTOM_VOCABULARY;
use crate::domain::health_record::HealthRecord;

#[derive(Parser, Debug)]
#[command(
    name = "health-predict",
    version,
    about = "Predict a Low/Medium/High health risk level from a short questionnaire."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Predict(args)  => run_predict(args),
            Commands::Evaluate(args) => run_evaluate(args),
            Commands::Symptoms       => run_symptoms(),
            Commands::Config(args)   => run_config(args),
            Commands::Health         => run_health(),
        }
    }
}

/// Handles the `predict` subcommand.
/// Training finishes before the record is even read.
fn run_predict(args: PredictArgs) -> Result<()> {
    use crate::application::predict_use_case::PredictUseCase;
    use crate::application::train_use_case::TrainUseCase;
    use crate::infra::request_reader::read_health_record;

    let config     = args.model.resolve()?;
    let classifier = Arc::new(TrainUseCase::new(config).execute()?);
    let use_case   = PredictUseCase::new(classifier);

    let record = match &args.input {
        Some(source) => read_health_record(source)?,
        None         => HealthRecord::from(&args),
    };

    let response = use_case.handle(&record)?;
    print_json(&response, args.compact)
}

/// Handles the `evaluate` subcommand.
fn run_evaluate(args: EvaluateArgs) -> Result<()> {
    use crate::application::evaluate_use_case::EvaluateUseCase;

    let config = args.model.resolve()?;
    let report = EvaluateUseCase::new(config, args.holdout, args.metrics_dir).execute()?;
    print_json(&report, false)
}

fn run_symptoms() -> Result<()> {
    for symptom in SYMPTOM_VOCABULARY {
        println!("{symptom}");
    }
    Ok(())
}

fn run_config(args: ConfigArgs) -> Result<()> {
    use crate::infra::config_store::ConfigStore;

    let config = args.model.resolve()?;
    match args.output {
        Some(path) => {
            let store = ConfigStore::new(path);
            store.save(&config)?;
            eprintln!("Configuration written to '{}'", store.path().display());
            Ok(())
        }
        None => print_json(&config, false),
    }
}

fn run_health() -> Result<()> {
    print_json(&serde_json::json!({ "message": "HealthPredict AI API is running" }), true)
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let out = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{out}");
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_flags_build_record() {
        let cli = Cli::try_parse_from([
            "health-predict", "predict",
            "--age", "70",
            "--gender", "male",
            "--symptoms", "fever,cough,fatigue,chest_pain",
            "--smoking",
            "--seed", "42",
        ])
        .unwrap();

        let Commands::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        let record = HealthRecord::from(&args);
        assert_eq!(record.age, Some(70));
        assert_eq!(record.symptoms.len(), 4);
        assert!(record.lifestyle_smoking);
        assert!(!record.lifestyle_exercise);
        assert_eq!(args.model.seed, Some(42));
    }

    #[test]
    fn test_input_conflicts_with_record_flags() {
        let result = Cli::try_parse_from([
            "health-predict", "predict", "--input", "-", "--age", "30",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "health-predict", "evaluate", "--trees", "3", "--samples", "40", "--holdout", "10",
        ])
        .unwrap();

        let Commands::Evaluate(args) = cli.command else {
            panic!("expected evaluate");
        };
        let cfg = args.model.resolve().unwrap();
        assert_eq!(cfg.n_trees, 3);
        assert_eq!(cfg.n_samples, 40);
        assert_eq!(args.holdout, 10);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let args = commands::ModelArgs { trees: Some(0), ..Default::default() };
        assert!(args.resolve().is_err());
    }
}
