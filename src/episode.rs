//! Episode metadata resolver
//!
//! An [`Episode`] wraps one episode directory and lazily derives the fields
//! of its feed item. Every expensive step (globbing, reading the info text,
//! stat-ing and probing the audio) runs at most once per instance.

use crate::cache::MemoCache;
use crate::file_resolver::{first_match, fuzzy_paths};
use crate::info_text::{parse_air_date, parse_episode_number, parse_title, read_info_file};
use crate::media_probe::{file_size, probe_duration_secs};
use crate::overrides::Overrides;
use crate::xml_item::{ItemFields, render_item};
use crate::EpisodeError;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Pattern locating the info text inside an episode directory
const INFO_PATTERN: &str = "*.txt";

/// Pattern locating the audio file inside an episode directory
const AUDIO_PATTERN: &str = "*.m4a";

/// Base URL the audio files are published under
const MEDIA_BASE_URL: &str = "http://s352287239.onlinehome.us/podcasts/essential-mix/media";

/// Lazily resolved metadata of a single episode directory
///
/// The directory is expected to hold one UTF-16LE `*.txt` description and
/// one `*.m4a` recording. When several files match, the first in sorted order
/// is used.
///
/// An `Episode` is meant for sequential use by one caller and is neither
/// `Send` nor `Sync`.
///
/// # Examples
///
/// ```no_run
/// use mix_item::{Episode, Overrides};
///
/// let episode = Episode::new("2016-11-05 - Recondite - Essential Mix", Overrides::default())?;
/// println!("{}", episode.xml_item()?);
/// # Ok::<(), mix_item::EpisodeError>(())
/// ```
pub struct Episode {
    path: PathBuf,
    overrides: Overrides,
    cache: MemoCache,
}

impl Episode {
    /// Creates a resolver for `dir`
    ///
    /// Relative paths are resolved against the current working directory.
    /// Nothing is read until a field is requested.
    pub fn new(dir: impl AsRef<Path>, overrides: Overrides) -> Result<Self, EpisodeError> {
        let path = std::path::absolute(dir.as_ref())?;

        Ok(Self {
            path,
            overrides,
            cache: MemoCache::new(),
        })
    }

    /// The absolute episode directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The overrides this resolver was created with
    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    /// The decoded contents of the episode's info text
    pub fn info_text(&self) -> Result<String, EpisodeError> {
        self.cache.get("info", || {
            let info_path = self.first_path(INFO_PATTERN)?;
            Ok(read_info_file(&info_path)?)
        })
    }

    /// The show title with its episode number, e.g. `Recondite #1187`
    pub fn title(&self) -> Result<String, EpisodeError> {
        if let Some(title) = &self.overrides.title {
            tracing::trace!("title overridden");
            return Ok(title.clone());
        }

        self.cache.get("title", || {
            let title = parse_title(&self.info_text()?)?;
            Ok(format!("{} #{}", title, self.episode()?))
        })
    }

    /// The episode number from the `ESSENTIAL MIX EPISODE:` line
    pub fn episode(&self) -> Result<u32, EpisodeError> {
        if let Some(episode) = self.overrides.episode {
            tracing::trace!("episode overridden");
            return Ok(episode);
        }

        self.cache
            .get("episode", || Ok(parse_episode_number(&self.info_text()?)?))
    }

    /// The public download URL of the audio file
    pub fn url(&self) -> Result<String, EpisodeError> {
        if let Some(url) = &self.overrides.url {
            tracing::trace!("url overridden");
            return Ok(url.clone());
        }

        self.cache
            .get("url", || Ok(format!("{}/{}.m4a", MEDIA_BASE_URL, self.episode()?)))
    }

    /// The size of the audio file in bytes
    pub fn size(&self) -> Result<u64, EpisodeError> {
        if let Some(size) = self.overrides.size {
            tracing::trace!("size overridden");
            return Ok(size);
        }

        self.cache.get("size", || {
            let audio_path = self.first_path(AUDIO_PATTERN)?;
            Ok(file_size(&audio_path)?)
        })
    }

    /// The duration of the recording in whole seconds
    pub fn duration(&self) -> Result<u64, EpisodeError> {
        if let Some(duration) = self.overrides.duration {
            tracing::trace!("duration overridden");
            return Ok(duration);
        }

        self.cache.get("duration", || {
            let audio_path = self.first_path(AUDIO_PATTERN)?;
            Ok(probe_duration_secs(&audio_path)?)
        })
    }

    /// The air date, the first `YYYY-MM-DD` in the info text
    pub fn date(&self) -> Result<NaiveDate, EpisodeError> {
        if let Some(date) = self.overrides.date {
            tracing::trace!("date overridden");
            return Ok(date);
        }

        self.cache
            .get("date", || Ok(parse_air_date(&self.info_text()?)?))
    }

    /// Renders the podcast feed `<item>` fragment for this episode
    ///
    /// Fails as a whole if any field cannot be resolved. The fragment itself
    /// is rebuilt on every call; only the fields are cached.
    pub fn xml_item(&self) -> Result<String, EpisodeError> {
        let fields = ItemFields {
            title: self.title()?,
            url: self.url()?,
            size: self.size()?,
            duration: self.duration()?,
            date: self.date()?,
        };

        tracing::debug!(path = %self.path.display(), title = %fields.title, "rendering item");

        Ok(render_item(&fields))
    }

    /// Returns every path matching `pattern` in the episode directory
    fn fuzzy_paths(&self, pattern: &str) -> Result<Vec<PathBuf>, EpisodeError> {
        self.cache.get(&format!("fuzzy{}", pattern), || {
            Ok(fuzzy_paths(&self.path, pattern)?)
        })
    }

    fn first_path(&self, pattern: &str) -> Result<PathBuf, EpisodeError> {
        let paths = self.fuzzy_paths(pattern)?;
        Ok(first_match(&paths, &self.path, pattern)?)
    }
}
