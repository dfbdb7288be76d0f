//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! - No business logic or policies
//! - No validation logic
//! - No default value calculation inside `from_toml`
//!
//! > **This module contains data only.** Missing values are facts, not errors.

use std::path::PathBuf;

/// Public CEP lookup service used when nothing else is configured.
pub const DEFAULT_POSTAL_CODE_BASE_URL: &str = "https://viacep.com.br/ws";

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the tutoring-school REST API (may be empty)
    pub api_base_url: String,

    /// HTTP timeout in seconds; 0 means "adapter default"
    pub api_timeout_secs: u64,

    /// Base URL profile images are uploaded under
    pub image_base_url: String,

    /// Base URL of the postal-code (CEP) lookup service
    pub postal_code_base_url: String,

    /// Directory for local state such as the selection store
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// This method must NOT contain any validation or default value logic.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| -> String {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            api_base_url: str_at("api", "base_url"),
            api_timeout_secs: toml_value
                .get("api")
                .and_then(|a| a.get("timeout_secs"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
            image_base_url: str_at("storage", "image_base_url"),
            postal_code_base_url: str_at("postal_code", "base_url"),
            data_dir: PathBuf::from(str_at("paths", "data_dir")),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            api_base_url: String::new(),
            api_timeout_secs: 0,
            image_base_url: String::new(),
            postal_code_base_url: String::new(),
            data_dir: PathBuf::new(),
        }
    }

    /// Create AppConfig rooted at a platform data directory.
    ///
    /// The base directory is computed by the caller (e.g. with the `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            postal_code_base_url: DEFAULT_POSTAL_CODE_BASE_URL.to_string(),
            data_dir,
            ..Self::empty()
        }
    }

    pub fn selection_store_path(&self) -> PathBuf {
        self.data_dir.join("selection.json")
    }

    pub fn logs_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}
