//! # Configuration Loader
//!
//! ## Responsibilities
//!
//! - ✅ Read TOML configuration files
//! - ✅ Parse TOML into AppConfig DTO
//! - ✅ Report I/O and parsing errors with context
//!
//! ## Prohibited
//!
//! ❌ **No validation logic**
//! ❌ **No default value logic**
//!
//! > **Pure data loading only. Accept whatever is in the file.**

use anyhow::Context;
use std::path::Path;
use vt_core::config::AppConfig;

/// Load configuration from a TOML file
///
/// Empty strings and missing sections are accepted as facts; only I/O and
/// TOML syntax errors are reported.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_reads_valid_toml() {
        let toml_content = r#"
            [api]
            base_url = "http://localhost:3000"
            timeout_secs = 3

            [list]
            viewport_width = 1024
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.api_timeout_secs, 3);
        assert_eq!(config.viewport_width, 1024);
        assert_eq!(config.log_dir, PathBuf::new());
    }

    #[test]
    fn test_load_config_fails_on_missing_file() {
        let result = load_config(Path::new("/nonexistent/path/voluntar.toml"));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_fails_on_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[api\nbase_url = ").unwrap();

        let err = load_config(temp_file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }
}
