//! Configuration file support for fleet-components.
//!
//! Provides YAML-based configuration through `fleet-components.config.yml`
//! files, including data structures, file loading, and validation. The API
//! token is never read from the file; see `FLEET_API_TOKEN`.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::component_hierarchy::domain::CriticalityFilter;
use crate::shared::error::FleetError;
use crate::shared::security::{read_regular_file, validate_identifier};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "fleet-components.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub max_retries: Option<u32>,
    pub default_vessel_id: Option<String>,
    pub default_criticality: Option<String>,
    pub snapshot_dir: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured default criticality filter, already validated on load.
    pub fn criticality(&self) -> Option<CriticalityFilter> {
        self.default_criticality
            .as_deref()
            .and_then(|value| CriticalityFilter::from_str(value).ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_regular_file(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config, path)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile, path: &Path) -> Result<()> {
    let invalid = |reason: String| FleetError::InvalidConfig {
        path: path.to_path_buf(),
        reason,
    };

    if let Some(url) = &config.api_base_url {
        let url = url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(invalid(format!(
                "api_base_url must be an http(s) URL, got '{}'",
                url
            ))
            .into());
        }
    }

    if config.timeout_secs == Some(0) {
        return Err(invalid("timeout_secs must be greater than 0".to_string()).into());
    }

    if config.max_retries == Some(0) {
        return Err(invalid("max_retries must be at least 1".to_string()).into());
    }

    if let Some(vessel_id) = &config.default_vessel_id {
        validate_identifier(vessel_id, "default_vessel_id")
            .map_err(|e| invalid(e.to_string()))?;
    }

    if let Some(criticality) = &config.default_criticality {
        CriticalityFilter::from_str(criticality).map_err(|e| invalid(e.to_string()))?;
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
api_base_url: https://fleet.example.com/api
timeout_secs: 15
max_retries: 5
default_vessel_id: V-100
default_criticality: critical
snapshot_dir: ./snapshots
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.api_base_url.as_deref(),
            Some("https://fleet.example.com/api")
        );
        assert_eq!(config.timeout_secs, Some(15));
        assert_eq!(config.max_retries, Some(5));
        assert_eq!(config.default_vessel_id.as_deref(), Some("V-100"));
        assert_eq!(config.criticality(), Some(CriticalityFilter::Critical));
        assert_eq!(config.snapshot_dir, Some(PathBuf::from("./snapshots")));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "default_vessel_id: V-7\n",
        )
        .unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.default_vessel_id.as_deref(), Some("V-7"));
        assert!(config.criticality().is_none());
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "invalid: yaml: [[[broken");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "default_vessel_id: V-1\napi_token: nope\n");

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.unknown_fields.contains_key("api_token"));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let cases = [
            ("api_base_url: ftp://fleet\n", "api_base_url"),
            ("timeout_secs: 0\n", "timeout_secs"),
            ("max_retries: 0\n", "max_retries"),
            ("default_vessel_id: ../etc\n", "default_vessel_id"),
            ("default_criticality: sometimes\n", "Invalid criticality filter"),
        ];

        for (content, expected) in cases {
            let dir = TempDir::new().unwrap();
            let config_path = write_config(&dir, content);

            let err = load_config_from_path(&config_path).unwrap_err();
            assert!(
                matches!(
                    err.downcast_ref::<FleetError>(),
                    Some(FleetError::InvalidConfig { .. })
                ),
                "{}",
                content
            );
            assert!(err.to_string().contains(expected), "{}", err);
        }
    }
}
