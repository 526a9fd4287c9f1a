//! File resolver module for locating episode files
//!
//! This module expands shell-style glob patterns ("fuzzy paths") relative to
//! an episode directory, so callers can refer to "the text file" or "the
//! audio file" without knowing their exact names.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during file resolution
#[derive(Debug, Error)]
pub enum FileResolverError {
    /// The glob pattern could not be compiled
    #[error("Invalid file pattern {pattern}: {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },

    /// A directory entry could not be read while expanding the pattern
    #[error("Failed to read {path} while matching {pattern}: {source}")]
    ReadEntryFailed {
        pattern: String,
        path: PathBuf,
        source: std::io::Error,
    },

    /// The pattern matched nothing
    #[error("No file matching {pattern} in {directory}")]
    NoMatch { pattern: String, directory: PathBuf },
}

/// Expands a glob pattern inside a directory
///
/// Matching is case-sensitive and follows shell globbing rules: `*` and `?`
/// never cross a path separator and hidden files are only matched by
/// patterns that start with a dot. Results are returned in sorted order.
///
/// An empty vector is a valid result; use [`first_match`] when exactly one
/// file is expected.
///
/// # Arguments
///
/// * `directory` - The directory the pattern is relative to
/// * `pattern` - The glob pattern, e.g. `*.txt`
pub(crate) fn fuzzy_paths(
    directory: &Path,
    pattern: &str,
) -> Result<Vec<PathBuf>, FileResolverError> {
    // Escape the directory so brackets in names like "[2016]" stay literal
    let escaped_dir = glob::Pattern::escape(&directory.to_string_lossy());
    let full_pattern = Path::new(&escaped_dir).join(pattern);
    let full_pattern = full_pattern.to_string_lossy();

    let options = glob::MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let entries = glob::glob_with(&full_pattern, options).map_err(|e| {
        FileResolverError::InvalidPattern {
            pattern: pattern.to_string(),
            source: e,
        }
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| FileResolverError::ReadEntryFailed {
            pattern: pattern.to_string(),
            path: e.path().to_path_buf(),
            source: e.into_error(),
        })?;
        paths.push(path);
    }

    tracing::debug!(
        directory = %directory.display(),
        pattern,
        matches = paths.len(),
        "expanded fuzzy path"
    );

    Ok(paths)
}

/// Picks the first path of a glob expansion
///
/// Fails with [`FileResolverError::NoMatch`] when the expansion is empty.
pub(crate) fn first_match(
    paths: &[PathBuf],
    directory: &Path,
    pattern: &str,
) -> Result<PathBuf, FileResolverError> {
    paths
        .first()
        .cloned()
        .ok_or_else(|| FileResolverError::NoMatch {
            pattern: pattern.to_string(),
            directory: directory.to_path_buf(),
        })
}
