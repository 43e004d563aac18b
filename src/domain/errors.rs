//! Domain error types
//!
//! The export pipeline proper reports failure by omission and a boolean
//! outcome, never by error. These types cover the surfaces around it:
//! configuration loading, catalog parsing and bridge I/O. No third-party
//! error types leak through the public API.

use thiserror::Error;

/// Main Waymark error type
#[derive(Debug, Error)]
pub enum WaymarkError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Catalog file could not be read or parsed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Map application bridge errors (handoff plumbing, not delivery)
    #[error("Bridge error: {0}")]
    Bridge(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for WaymarkError {
    fn from(err: std::io::Error) -> Self {
        WaymarkError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for WaymarkError {
    fn from(err: serde_json::Error) -> Self {
        WaymarkError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for WaymarkError {
    fn from(err: toml::de::Error) -> Self {
        WaymarkError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WaymarkError::Configuration("missing output path".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing output path");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: WaymarkError = io_err.into();
        assert!(matches!(err, WaymarkError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: WaymarkError = json_err.into();
        assert!(matches!(err, WaymarkError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("a = b = c").unwrap_err();
        let err: WaymarkError = toml_err.into();
        assert!(matches!(err, WaymarkError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let err = WaymarkError::Bridge("send failed".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
