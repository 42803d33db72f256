// ============================================================
// Layer 6 — Config Store
// ============================================================
// Reads and writes ClassifierConfig as JSON.
//
// Example file:
//   {
//     "n_trees": 25,
//     "seed": 42
//   }
//
// Keys that are left out take their defaults, so a file only
// needs to mention what it changes. A loaded config is
// validated before it is returned.
//
// Only the configuration is ever written to disk; the trained
// model itself is rebuilt on every start.
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json documentation

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::application::train_use_case::ClassifierConfig;

pub struct ConfigStore {
    /// Path to the JSON file
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write the configuration as pretty-printed JSON.
    /// Creates parent directories as needed.
    pub fn save(&self, cfg: &ClassifierConfig) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(cfg)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write config to '{}'", self.path.display()))?;

        tracing::debug!("Saved classifier config to '{}'", self.path.display());
        Ok(())
    }

    /// Read and validate the configuration
    pub fn load(&self) -> Result<ClassifierConfig> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read config from '{}'", self.path.display()))?;

        let cfg: ClassifierConfig = serde_json::from_str(&json)
            .with_context(|| format!("Invalid JSON in '{}'", self.path.display()))?;

        cfg.validate()
            .with_context(|| format!("Invalid classifier config in '{}'", self.path.display()))?;

        tracing::debug!("Loaded classifier config from '{}'", self.path.display());
        Ok(cfg)
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("health_predict_config_{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_saved_config_loads_back() {
        let path  = temp_file("saved.json");
        let store = ConfigStore::new(&path);
        let cfg   = ClassifierConfig { n_trees: 30, seed: Some(8), ..ClassifierConfig::default() };

        store.save(&cfg).unwrap();
        assert_eq!(store.load().unwrap(), cfg);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let path = temp_file("invalid.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"n_trees": 0}"#).unwrap();

        let err = ConfigStore::new(&path).load().unwrap_err();
        assert!(format!("{err:#}").contains("n_trees must be at least 1"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_names_path() {
        let path = temp_file("does_not_exist.json");
        let err  = ConfigStore::new(&path).load().unwrap_err();
        assert!(err.to_string().contains("does_not_exist.json"));
    }
}
