use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const ENV_HTML_OUTPUT: &str = "CPM_HTML_OUTPUT";
pub const ENV_OPEN_BROWSER: &str = "CPM_OPEN_BROWSER";
pub const ENV_LOG: &str = "CPM_LOG";
pub const ENV_HTTP_ADDR: &str = "CPM_HTTP_ADDR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error reading config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Tool settings: JSON file first, then `CPM_*` environment overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CpmConfig {
    pub html_output: PathBuf,
    pub open_browser: bool,
    pub log_filter: String,
    pub http_addr: String,
}

impl Default for CpmConfig {
    fn default() -> Self {
        Self {
            html_output: PathBuf::from("pertCPM.html"),
            open_browser: true,
            log_filter: "cpm_schedule=info".to_string(),
            http_addr: "0.0.0.0:3000".to_string(),
        }
    }
}

impl CpmConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    /// Reads `path` when given, otherwise starts from defaults, then applies the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_HTML_OUTPUT) {
            self.html_output = PathBuf::from(value);
        }
        if let Some(value) = lookup(ENV_OPEN_BROWSER) {
            self.open_browser = parse_bool(ENV_OPEN_BROWSER, &value)?;
        }
        if let Some(value) = lookup(ENV_LOG) {
            self.log_filter = value;
        }
        if let Some(value) = lookup(ENV_HTTP_ADDR) {
            self.http_addr = value;
        }
        Ok(())
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: CpmConfig = serde_json::from_str(r#"{ "open_browser": false }"#).unwrap();
        assert!(!config.open_browser);
        assert_eq!(config.html_output, PathBuf::from("pertCPM.html"));
    }

    #[test]
    fn overrides_replace_file_values() {
        let env: HashMap<&str, &str> = [(ENV_OPEN_BROWSER, "no"), (ENV_HTML_OUTPUT, "out.html")]
            .into_iter()
            .collect();
        let mut config = CpmConfig::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert!(!config.open_browser);
        assert_eq!(config.html_output, PathBuf::from("out.html"));
    }

    #[test]
    fn bad_boolean_is_reported() {
        let mut config = CpmConfig::default();
        let err = config
            .apply_overrides(|key| (key == ENV_OPEN_BROWSER).then(|| "maybe".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: ENV_OPEN_BROWSER, .. }));
    }
}
