//! Configuration file loading

use super::schema::WaymarkConfig;
use crate::domain::{Result, WaymarkError};
use std::path::Path;

/// Loads and validates the configuration from a TOML file.
///
/// # Errors
///
/// Returns a configuration error when the file cannot be read, parsed, or
/// fails validation.
pub fn load_config(path: impl AsRef<Path>) -> Result<WaymarkConfig> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| {
        WaymarkError::Configuration(format!("Cannot read {}: {e}", path.display()))
    })?;

    let config: WaymarkConfig = toml::from_str(&raw)?;
    config.validate().map_err(WaymarkError::Configuration)?;

    tracing::debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_valid_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [catalog]
            path = "catalog.json"

            [export]
            output = "handoff.json"
            export_mode = true

            [logging]
            level = "debug"
            "#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.catalog.path, "catalog.json");
        assert!(config.export.export_mode);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let err = load_config("/nonexistent/waymark.toml").unwrap_err();
        assert!(matches!(err, WaymarkError::Configuration(_)));
    }

    #[test]
    fn test_invalid_toml_is_configuration_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not = valid = toml").unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, WaymarkError::Configuration(_)));
    }

    #[test]
    fn test_validation_failure_surfaces() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            [catalog]
            path = ""

            [export]
            output = "handoff.json"
            "#
        )
        .unwrap();
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("catalog.path"));
    }
}
