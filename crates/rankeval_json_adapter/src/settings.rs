//! Settings file loading.
//!
//! A collection's settings file is a flat JSON object of string keys to
//! string values. The only key this adapter cares about is `baseUrl`, the
//! root address of the upstream search endpoint.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{AdapterError, Result};

/// Required settings key naming the upstream endpoint root.
pub const BASE_URL_KEY: &str = "baseUrl";

/// Recognized settings filename; any other name is "not ours".
pub const SETTINGS_FILE: &str = "settings.json";

/// Read a settings file and extract the base URL.
///
/// Returns [`AdapterError::Settings`] when the file parses but lacks
/// `baseUrl`, and the underlying IO/JSON error when it cannot be read or
/// parsed at all. The caller decides how loudly to log each case.
pub fn read_base_url(settings_file: &Path) -> Result<String> {
    let raw = fs::read_to_string(settings_file)?;
    let settings: HashMap<String, String> = serde_json::from_str(&raw)?;
    settings.get(BASE_URL_KEY).cloned().ok_or_else(|| {
        AdapterError::Settings(format!(
            "no '{}' key in {}",
            BASE_URL_KEY,
            settings_file.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_settings(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(SETTINGS_FILE);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn reads_base_url_from_well_formed_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_settings(&dir, r#"{"baseUrl": "http://localhost:8080/search"}"#);
        assert_eq!(
            read_base_url(&path).unwrap(),
            "http://localhost:8080/search"
        );
    }

    #[test]
    fn extra_string_keys_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_settings(
            &dir,
            r#"{"baseUrl": "http://localhost/search", "apiKey": "unused"}"#,
        );
        assert_eq!(read_base_url(&path).unwrap(), "http://localhost/search");
    }

    #[test]
    fn missing_base_url_is_a_settings_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_settings(&dir, r#"{"otherKey": "value"}"#);
        assert!(matches!(
            read_base_url(&path),
            Err(AdapterError::Settings(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_serde_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_settings(&dir, "this is { not json");
        assert!(matches!(read_base_url(&path), Err(AdapterError::Serde(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        assert!(matches!(read_base_url(&path), Err(AdapterError::Io(_))));
    }
}
