// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for bad or conflicting args
//   - type conversion (string → u32, u64, usize, bool)
//
// Reference: Rust Book §12 (Building a CLI Program)

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::application::train_use_case::ClassifierConfig;
use crate::domain::health_record::HealthRecord;
use crate::infra::config_store::ConfigStore;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the classifier, then predict risk for one health record
    Predict(PredictArgs),

    /// Train the classifier and score it on fresh synthetic data
    Evaluate(EvaluateArgs),

    /// List the recognised symptom identifiers in feature order
    Symptoms,

    /// Print or save the effective classifier configuration
    Config(ConfigArgs),

    /// Liveness check
    Health,
}

/// Settings that shape the trained model.
/// Precedence: flags > --config file > built-in defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct ModelArgs {
    /// JSON file with classifier settings; missing keys take defaults
    #[arg(long)]
    pub config: Option<String>,

    /// Seed for synthetic data and tree randomness.
    /// Omit it to train a different model on every run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of trees in the forest
    #[arg(long)]
    pub trees: Option<usize>,

    /// Number of synthetic training examples
    #[arg(long)]
    pub samples: Option<usize>,
}

impl ModelArgs {
    /// Merge the config file (if any) with the flag overrides
    pub fn resolve(&self) -> Result<ClassifierConfig> {
        let mut cfg = match &self.config {
            Some(path) => ConfigStore::new(path).load()?,
            None       => ClassifierConfig::default(),
        };

        if let Some(seed) = self.seed {
            cfg.seed = Some(seed);
        }
        if let Some(trees) = self.trees {
            cfg.n_trees = trees;
        }
        if let Some(samples) = self.samples {
            cfg.n_samples = samples;
        }

        cfg.validate()?;
        Ok(cfg)
    }
}

/// Arguments for the `predict` command
#[derive(Args, Debug)]
pub struct PredictArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// JSON request body to read instead of the record flags ("-" for stdin)
    #[arg(long, conflicts_with_all = ["age", "gender", "symptoms", "smoking", "exercise"])]
    pub input: Option<String>,

    /// Age in years (defaults to 25)
    #[arg(long)]
    pub age: Option<u32>,

    /// Gender; only "female" is distinguished
    #[arg(long)]
    pub gender: Option<String>,

    /// Comma-separated symptom identifiers, e.g. fever,cough
    #[arg(long, value_delimiter = ',')]
    pub symptoms: Vec<String>,

    /// The person smokes
    #[arg(long)]
    pub smoking: bool,

    /// The person exercises regularly
    #[arg(long)]
    pub exercise: bool,

    /// Print the response on a single line
    #[arg(long)]
    pub compact: bool,
}

/// Build the record from the individual flags.
/// The application layer never sees clap types.
impl From<&PredictArgs> for HealthRecord {
    fn from(a: &PredictArgs) -> Self {
        HealthRecord {
            age:                a.age,
            gender:             a.gender.clone(),
            symptoms:           a.symptoms.clone(),
            lifestyle_smoking:  a.smoking,
            lifestyle_exercise: a.exercise,
            ..HealthRecord::default()
        }
    }
}

/// Arguments for the `evaluate` command
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Number of fresh synthetic examples to score
    #[arg(long, default_value_t = 200)]
    pub holdout: usize,

    /// Directory to append metrics.csv to
    #[arg(long)]
    pub metrics_dir: Option<String>,
}

/// Arguments for the `config` command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Write the configuration to this file instead of stdout
    #[arg(long)]
    pub output: Option<String>,
}
