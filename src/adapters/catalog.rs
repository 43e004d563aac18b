//! Catalog file reader
//!
//! The CLI's stand-in for the application's persistence layer: a catalog is
//! a JSON array of tagged entities, deserialized straight into domain types.

use crate::domain::{CatalogEntity, Result, WaymarkError};
use std::path::Path;

/// Loads a catalog file into the mixed entity collection the pipeline takes.
///
/// # Errors
///
/// Returns a catalog error when the file cannot be read or parsed.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<CatalogEntity>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|e| WaymarkError::Catalog(format!("Cannot read {}: {e}", path.display())))?;

    let entities: Vec<CatalogEntity> = serde_json::from_str(&raw)
        .map_err(|e| WaymarkError::Catalog(format!("Cannot parse {}: {e}", path.display())))?;

    tracing::debug!(
        path = %path.display(),
        entities = entities.len(),
        "Catalog loaded"
    );
    Ok(entities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_mixed_catalog() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"entity": "cache", "geocode": "GC1", "name": "A",
                  "coords": {{"latitude": 1.0, "longitude": 2.0}},
                  "cache_type": "traditional", "size": "micro"}},
                {{"entity": "waypoint", "lookup": "PK", "name": "Parking",
                  "kind": "parking", "geocode": "GC1"}}
            ]"#
        )
        .unwrap();

        let entities = load_catalog(file.path()).unwrap();
        assert_eq!(entities.len(), 2);
    }

    #[test]
    fn test_missing_file_is_catalog_error() {
        let err = load_catalog("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, WaymarkError::Catalog(_)));
    }

    #[test]
    fn test_malformed_json_is_catalog_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not a catalog").unwrap();
        let err = load_catalog(file.path()).unwrap_err();
        assert!(matches!(err, WaymarkError::Catalog(_)));
    }
}
