//! Media probe module
//!
//! Reads the movie header of an MP4/M4A container to find out how long the
//! recording is, without decoding any audio.

use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while probing an audio file
#[derive(Debug, Error)]
pub enum MediaProbeError {
    /// Failed to open or stat the audio file
    #[error("Failed to read audio file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a readable MP4 container
    #[error("Invalid MP4 container {path}: {source}")]
    InvalidContainer { path: PathBuf, source: mp4::Error },

    /// The movie header declares a zero timescale
    #[error("Audio file {0} has no usable timescale")]
    MissingTimescale(PathBuf),
}

/// Returns the playback duration of an MP4/M4A file in whole seconds
///
/// The duration comes from the `mvhd` box and is rounded to the nearest
/// second.
///
/// # Examples
///
/// ```ignore
/// let seconds = probe_duration_secs(Path::new("episode.m4a"))?;
/// println!("{} seconds", seconds);
/// ```
pub(crate) fn probe_duration_secs(path: &Path) -> Result<u64, MediaProbeError> {
    let file = File::open(path).map_err(|e| MediaProbeError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mp4 = mp4::read_mp4(file).map_err(|e| MediaProbeError::InvalidContainer {
        path: path.to_path_buf(),
        source: e,
    })?;

    let header = &mp4.moov.mvhd;
    if header.timescale == 0 {
        return Err(MediaProbeError::MissingTimescale(path.to_path_buf()));
    }

    let seconds = (header.duration as f64 / header.timescale as f64).round() as u64;

    tracing::debug!(
        path = %path.display(),
        timescale = header.timescale,
        units = header.duration,
        seconds,
        "probed audio duration"
    );

    Ok(seconds)
}

/// Returns the size of a file in bytes
pub(crate) fn file_size(path: &Path) -> Result<u64, MediaProbeError> {
    let metadata = std::fs::metadata(path).map_err(|e| MediaProbeError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(metadata.len())
}
