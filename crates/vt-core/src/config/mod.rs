//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - ✅ Define configuration data structures
//! - ✅ Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! ❌ **No validation logic**
//! ❌ **No default value calculation**
//!
//! Defaults for "empty" values are resolved by the consumers (the HTTP
//! client picks its own timeout, the CLI picks its own viewport width).

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend base URL (may be empty - this is a fact, not an error)
    pub api_base_url: String,

    /// Request timeout in seconds, 0 when unset
    pub api_timeout_secs: u64,

    /// Initial viewport width in px, 0 when unset
    pub viewport_width: u32,

    /// Log directory; empty means stdout only
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic. Empty strings are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            api_base_url: toml_value
                .get("api")
                .and_then(|a| a.get("base_url"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            api_timeout_secs: toml_value
                .get("api")
                .and_then(|a| a.get("timeout_secs"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
            viewport_width: toml_value
                .get("list")
                .and_then(|l| l.get("viewport_width"))
                .and_then(|v| v.as_integer())
                .and_then(|w| u32::try_from(w).ok())
                .unwrap_or(0),
            log_dir: PathBuf::from(
                toml_value
                    .get("logging")
                    .and_then(|l| l.get("dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            api_base_url: String::new(),
            api_timeout_secs: 0,
            viewport_width: 0,
            log_dir: PathBuf::new(),
        }
    }
}
