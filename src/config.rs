//! Configuration management for the clique counter

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::clique::EngineKind;
use crate::error::{Error, Result};

/// Settings for one `RamseyAnalyzer`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Clique engine used for both the graph and its complement
    pub engine: EngineKind,

    /// Largest clique size to compute; `None` runs until no larger clique exists
    pub max_clique_size: Option<usize>,

    /// Report normalized features alongside raw counts
    pub normalize: bool,

    /// Reject duplicate edges when reading graphs
    pub strict: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::Inductive,
            max_clique_size: None,
            normalize: false,
            strict: false,
        }
    }
}

impl AnalyzerConfig {
    /// Create a new configuration with custom values
    pub fn new(
        engine: EngineKind,
        max_clique_size: Option<usize>,
        normalize: bool,
        strict: bool,
    ) -> Self {
        Self {
            engine,
            max_clique_size,
            normalize,
            strict,
        }
    }

    /// Load a configuration from a JSON file; missing fields take their defaults
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Reading configuration from {}", path.display());
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        match self.max_clique_size {
            Some(cap) if cap < 2 => Err(Error::Config(format!(
                "max_clique_size must be at least 2, got {}",
                cap
            ))),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_json_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"engine": "dense", "max_clique_size": 4}}"#).unwrap();

        let config = AnalyzerConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config, AnalyzerConfig::new(EngineKind::Dense, Some(4), false, false));
    }

    #[test]
    fn rejects_tiny_cap() {
        let config = AnalyzerConfig::new(EngineKind::Inductive, Some(1), false, false);
        assert!(matches!(config.validate(), Err(Error::Config(_))));
        assert!(AnalyzerConfig::default().validate().is_ok());
    }
}
