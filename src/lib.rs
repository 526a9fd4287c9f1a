//! mix_item - Turn an Essential Mix episode directory into a feed item
//!
//! This library reads the UTF-16LE description and the M4A recording of one
//! episode, derives title, episode number, download URL, size, duration and
//! air date, and renders them as a podcast feed `<item>` fragment.

mod cache;
mod episode;
mod file_resolver;
mod info_text;
mod media_probe;
mod overrides;
mod xml_item;

#[cfg(test)]
mod test_support;

pub use episode::Episode;
pub use overrides::Overrides;
pub use xml_item::{ItemFields, pub_date, render_item};

// Re-export error types
pub use file_resolver::FileResolverError;
pub use info_text::InfoTextError;
pub use media_probe::MediaProbeError;
pub use overrides::OverridesError;

use std::io;
use thiserror::Error;

/// Broad class of an [`EpisodeError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A file was missing, unreadable, or no file matched a pattern
    Io,
    /// Text or media content did not have the expected shape
    Parse,
}

/// Top-level error type for episode resolution
#[derive(Debug, Error)]
pub enum EpisodeError {
    /// Error while locating episode files
    #[error("File resolution error: {0}")]
    FileResolver(#[from] FileResolverError),

    /// Error while reading or parsing the info text
    #[error("Info text error: {0}")]
    InfoText(#[from] InfoTextError),

    /// Error while inspecting the audio file
    #[error("Media probe error: {0}")]
    MediaProbe(#[from] MediaProbeError),

    /// Error while loading overrides
    #[error("Overrides error: {0}")]
    Overrides(#[from] OverridesError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl EpisodeError {
    /// Classifies the error as an I/O or a parse failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            EpisodeError::FileResolver(_) | EpisodeError::Io(_) => ErrorKind::Io,
            EpisodeError::InfoText(InfoTextError::ReadFailed { .. }) => ErrorKind::Io,
            EpisodeError::InfoText(_) => ErrorKind::Parse,
            EpisodeError::MediaProbe(MediaProbeError::ReadFailed { .. }) => ErrorKind::Io,
            EpisodeError::MediaProbe(_) => ErrorKind::Parse,
            EpisodeError::Overrides(OverridesError::ReadFailed { .. }) => ErrorKind::Io,
            EpisodeError::Overrides(OverridesError::ParseFailed { .. }) => ErrorKind::Parse,
        }
    }
}
