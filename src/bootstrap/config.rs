//! # Configuration Loader
//!
//! Reads the TOML config file and maps it to [`AppConfig`]. No validation:
//! whatever is in the file is accepted as a fact.

use anyhow::Context;
use std::path::{Path, PathBuf};
use ts_core::config::AppConfig;

/// Directory name under the platform data dir.
pub const APP_DIR_NAME: &str = "tutoring-school";

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Platform data directory for the app (e.g. `~/.local/share/tutoring-school`).
pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir().context("Failed to resolve platform data directory")?;
    Ok(base.join(APP_DIR_NAME))
}

/// Loads `config_path` when given, otherwise system defaults. Empty
/// `data_dir` and postal-code URL values are filled from the defaults.
pub fn resolve_config(config_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::with_system_defaults(default_data_dir()?);
    let Some(path) = config_path else {
        return Ok(defaults);
    };

    let mut config = load_config(path.to_path_buf())?;
    if config.data_dir.as_os_str().is_empty() {
        config.data_dir = defaults.data_dir;
    }
    if config.postal_code_base_url.is_empty() {
        config.postal_code_base_url = defaults.postal_code_base_url;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [api]
            base_url = "https://api.example.com"
            timeout_secs = 20

            [storage]
            image_base_url = "https://images.example.com"

            [paths]
            data_dir = "/tmp/tutoring"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.api_timeout_secs, 20);
        assert_eq!(config.image_base_url, "https://images.example.com");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/tutoring"));
        assert_eq!(config.postal_code_base_url, "");
    }

    #[test]
    fn test_load_config_returns_error_for_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[api\nbase_url = ").unwrap();

        let result = load_config(temp_file.path().to_path_buf());

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse config as TOML"));
    }

    #[test]
    fn test_load_config_returns_error_for_missing_file() {
        let result = load_config(PathBuf::from("/nonexistent/tutoring/config.toml"));

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read config file"));
    }

    #[test]
    fn test_resolve_config_keeps_file_values_and_fills_gaps() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\nbase_url = \"https://api.example.com\"\n")
            .unwrap();

        let Ok(config) = resolve_config(Some(temp_file.path())) else {
            // No platform data dir in this environment.
            return;
        };

        assert_eq!(config.api_base_url, "https://api.example.com");
        assert!(config.data_dir.ends_with(APP_DIR_NAME));
        assert_eq!(
            config.postal_code_base_url,
            ts_core::config::DEFAULT_POSTAL_CODE_BASE_URL
        );
    }
}
