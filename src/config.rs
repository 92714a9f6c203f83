use crate::lsp::text::is_valid_identifier;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub const DEFAULT_OUTPUT_VARIABLE: &str = "message";

/// Knobs for the checker, usually read from a `kale.toml` next to the sources.
///
/// ```toml
/// output_variable = "message"
/// report_unused = true
/// ```
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Variable whose value is the program's output; it must be defined and
    /// never counts as unused.
    pub output_variable: String,
    pub report_unused: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            output_variable: DEFAULT_OUTPUT_VARIABLE.to_string(),
            report_unused: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("`{0}` is not a valid output variable name")]
    InvalidOutputVariable(String),
}

impl AnalysisConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AnalysisConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if is_valid_identifier(&self.output_variable) {
            Ok(())
        } else {
            Err(ConfigError::InvalidOutputVariable(
                self.output_variable.clone(),
            ))
        }
    }
}
