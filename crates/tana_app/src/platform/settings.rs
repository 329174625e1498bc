use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use clip_logging::{clip_info, clip_warn};
use tana_core::Options;
use tana_engine::{AtomicFileWriter, PersistError};
use thiserror::Error;

pub const DEFAULT_SETTINGS_FILE: &str = ".tana_paste.ron";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to serialize options: {0}")]
    Serialize(#[from] ron::Error),
    #[error("failed to write options: {0}")]
    Persist(#[from] PersistError),
}

/// Process-wide cache of the stored [`Options`], reloaded when the file on
/// disk changes. Per-clip overrides never reach this cache.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    options: Options,
    modified: Option<SystemTime>,
}

impl SettingsStore {
    /// Loads the file at `path`. A missing or unreadable file yields defaults.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let modified = modified_time(&path);
        let options = load_options(&path);
        Self {
            path,
            options,
            modified,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Reloads when the file's modification time moved. Returns `true` when
    /// the cached options changed as a result.
    pub fn refresh(&mut self) -> bool {
        let modified = modified_time(&self.path);
        if modified == self.modified {
            return false;
        }
        self.modified = modified;
        let reloaded = load_options(&self.path);
        if reloaded == self.options {
            return false;
        }
        clip_info!("Options in {:?} changed on disk", self.path);
        self.options = reloaded;
        true
    }

    pub fn save(&mut self, options: Options) -> Result<(), SettingsError> {
        let pretty = ron::ser::PrettyConfig::new();
        let content = ron::ser::to_string_pretty(&options, pretty)?;
        AtomicFileWriter::new(&self.path).write(&content)?;
        self.modified = modified_time(&self.path);
        self.options = options;
        clip_info!("Saved options to {:?}", self.path);
        Ok(())
    }
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|meta| meta.modified()).ok()
}

fn load_options(path: &Path) -> Options {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Options::default();
        }
        Err(err) => {
            clip_warn!("Failed to read options from {:?}: {}", path, err);
            return Options::default();
        }
    };

    match ron::from_str(&content) {
        Ok(options) => options,
        Err(err) => {
            clip_warn!("Failed to parse options from {:?}: {}", path, err);
            Options::default()
        }
    }
}
