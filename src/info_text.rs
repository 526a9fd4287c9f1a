//! Info text module
//!
//! Every episode ships with a UTF-16LE encoded text file describing the show.
//! This module decodes that file and pulls the structured bits (episode
//! number, title, air date) out of the free text.

use chrono::NaiveDate;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use thiserror::Error;

static EPISODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^ESSENTIAL MIX EPISODE: ([0-9]+)$").unwrap());

static TITLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9-]+\s+-\s+(.+?)\s+- Essential Mix").unwrap());

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{4}-[0-9]{2}-[0-9]{2})").unwrap());

/// Errors that can occur while reading or parsing the info text
#[derive(Debug, Error)]
pub enum InfoTextError {
    /// Failed to read the info file
    #[error("Failed to read info file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// No `ESSENTIAL MIX EPISODE:` line was found
    #[error("No \"ESSENTIAL MIX EPISODE: <number>\" line in info text")]
    EpisodeNotFound,

    /// The episode number does not fit into an integer
    #[error("Invalid episode number {value}: {source}")]
    InvalidEpisodeNumber {
        value: String,
        source: std::num::ParseIntError,
    },

    /// No "<date> - <title> - Essential Mix" line was found
    #[error("No \"<date> - <title> - Essential Mix\" line in info text")]
    TitleNotFound,

    /// No YYYY-MM-DD date was found
    #[error("No YYYY-MM-DD date in info text")]
    DateNotFound,

    /// The date has the right shape but is not a calendar date
    #[error("Invalid air date {value}: {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },
}

/// Reads and decodes an info file
///
/// The file is expected to be UTF-16 little-endian. A leading byte order mark
/// is dropped; malformed code units decode to U+FFFD instead of failing.
pub(crate) fn read_info_file(path: &Path) -> Result<String, InfoTextError> {
    let bytes = std::fs::read(path).map_err(|e| InfoTextError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read info file");

    Ok(decode_utf16le(&bytes))
}

/// Decodes UTF-16LE bytes into a string, lossily
pub(crate) fn decode_utf16le(bytes: &[u8]) -> String {
    let chunks = bytes.chunks_exact(2);
    let has_odd_byte = !chunks.remainder().is_empty();

    let units = chunks.map(|pair| u16::from_le_bytes([pair[0], pair[1]]));
    let mut text: String = char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();

    if has_odd_byte {
        text.push(char::REPLACEMENT_CHARACTER);
    }

    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

/// Extracts the episode number from a `ESSENTIAL MIX EPISODE: <n>` line
pub(crate) fn parse_episode_number(info: &str) -> Result<u32, InfoTextError> {
    let captures = EPISODE_PATTERN
        .captures(info)
        .ok_or(InfoTextError::EpisodeNotFound)?;
    let digits = &captures[1];

    digits
        .parse()
        .map_err(|e| InfoTextError::InvalidEpisodeNumber {
            value: digits.to_string(),
            source: e,
        })
}

/// Extracts the bare show title from a "<date> - <title> - Essential Mix" line
///
/// The episode number suffix is not part of the result.
pub(crate) fn parse_title(info: &str) -> Result<String, InfoTextError> {
    TITLE_PATTERN
        .captures(info)
        .map(|captures| captures[1].to_string())
        .ok_or(InfoTextError::TitleNotFound)
}

/// Extracts the first YYYY-MM-DD date in the text
pub(crate) fn parse_air_date(info: &str) -> Result<NaiveDate, InfoTextError> {
    let captures = DATE_PATTERN
        .captures(info)
        .ok_or(InfoTextError::DateNotFound)?;
    let value = &captures[1];

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| InfoTextError::InvalidDate {
        value: value.to_string(),
        source: e,
    })
}
