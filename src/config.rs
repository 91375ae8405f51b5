use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{MidToIsoError, Result};
use crate::output::{OutputFormat, DEFAULT_FUNCTION_NAME};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "mid-to-iso3166.toml";

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set
    pub level: String,
    /// Directory for daily rolling JSON log files; console only when unset
    pub directory: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            directory: None,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub function_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Entries,
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
        }
    }
}

impl Config {
    /// Load an explicitly requested config file, or the default file if it
    /// exists, or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(path).map_err(|e| {
            MidToIsoError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]").unwrap();
        writeln!(file, "format = \"function\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Function);
        assert_eq!(config.output.function_name, "mid_to_country");
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_full_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[logging]").unwrap();
        writeln!(file, "level = \"mid_to_iso3166=debug\"").unwrap();
        writeln!(file, "directory = \"logs\"").unwrap();
        writeln!(file, "[output]").unwrap();
        writeln!(file, "function_name = \"country\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.logging.level, "mid_to_iso3166=debug");
        assert_eq!(config.logging.directory.as_deref(), Some("logs"));
        assert_eq!(config.output.format, OutputFormat::Entries);
        assert_eq!(config.output.function_name, "country");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = Config::load(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, MidToIsoError::Config(_)));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"xml\"").unwrap();
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, MidToIsoError::Toml(_)));
    }
}
