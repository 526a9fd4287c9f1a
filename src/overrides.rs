//! Field overrides
//!
//! Callers can pin any of the six episode fields to a literal value. A pinned
//! field is never derived, so no file is read or parsed for it.

use chrono::NaiveDate;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading overrides
#[derive(Debug, Error)]
pub enum OverridesError {
    /// Failed to read the overrides file
    #[error("Failed to read overrides file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The overrides file is not a valid JSON object of known fields
    #[error("Failed to parse overrides file {path}: {source}")]
    ParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Literal values that replace derived episode fields
///
/// `None` means "derive this field"; `Some` is used as-is, including empty
/// strings and zero. Unknown keys in JSON input are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Overrides {
    /// Full title, including any episode suffix
    pub title: Option<String>,
    /// Episode number
    pub episode: Option<u32>,
    /// Enclosure URL
    pub url: Option<String>,
    /// Audio file size in bytes
    pub size: Option<u64>,
    /// Duration in seconds
    pub duration: Option<u64>,
    /// Air date (YYYY-MM-DD in JSON)
    pub date: Option<NaiveDate>,
}

impl Overrides {
    /// Loads overrides from a JSON file
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // overrides.json: { "episode": 1200, "title": "Special #1200" }
    /// let overrides = Overrides::from_json_file(Path::new("overrides.json"))?;
    /// ```
    pub fn from_json_file(path: &Path) -> Result<Self, OverridesError> {
        let content = std::fs::read_to_string(path).map_err(|e| OverridesError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| OverridesError::ParseFailed {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Combines two override sets; fields set in `other` win
    pub fn merge(self, other: Overrides) -> Overrides {
        Overrides {
            title: other.title.or(self.title),
            episode: other.episode.or(self.episode),
            url: other.url.or(self.url),
            size: other.size.or(self.size),
            duration: other.duration.or(self.duration),
            date: other.date.or(self.date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial_and_ignore_unknown_keys() {
        let overrides: Overrides =
            serde_json::from_str(r#"{ "episode": 1200, "date": "2017-01-07", "makeCopy": true }"#)
                .unwrap();

        assert_eq!(overrides.episode, Some(1200));
        assert_eq!(overrides.date, NaiveDate::from_ymd_opt(2017, 1, 7));
        assert_eq!(overrides.title, None);
        assert_eq!(overrides.size, None);
    }

    #[test]
    fn test_empty_string_is_still_set() {
        let overrides: Overrides = serde_json::from_str(r#"{ "title": "", "size": 0 }"#).unwrap();
        assert_eq!(overrides.title, Some(String::new()));
        assert_eq!(overrides.size, Some(0));
    }

    #[test]
    fn test_merge_prefers_other() {
        let base = Overrides {
            title: Some("From file".to_string()),
            episode: Some(1),
            ..Default::default()
        };
        let flags = Overrides {
            episode: Some(2),
            url: Some("http://example.com/2.m4a".to_string()),
            ..Default::default()
        };

        let merged = base.merge(flags);
        assert_eq!(merged.title.as_deref(), Some("From file"));
        assert_eq!(merged.episode, Some(2));
        assert_eq!(merged.url.as_deref(), Some("http://example.com/2.m4a"));
        assert_eq!(merged.date, None);
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overrides.json");
        std::fs::write(&path, r#"{ "duration": 3600 }"#).unwrap();

        let overrides = Overrides::from_json_file(&path).unwrap();
        assert_eq!(overrides.duration, Some(3600));

        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            Overrides::from_json_file(&path),
            Err(OverridesError::ParseFailed { .. })
        ));
    }
}
