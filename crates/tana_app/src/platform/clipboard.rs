use std::io::{self, Write};
use std::path::PathBuf;

use clip_logging::{clip_info, clip_warn};
use tana_core::CopyOutcome;
use tana_engine::{AtomicFileWriter, PersistError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CopyError {
    #[error("stdout write failed: {0}")]
    Stdout(#[from] io::Error),
    #[error("file write failed: {0}")]
    File(#[from] PersistError),
}

/// Destination for a finished outline.
pub trait ClipboardWriter {
    fn name(&self) -> String;
    fn write_text(&mut self, text: &str) -> Result<(), CopyError>;
}

pub struct StdoutWriter;

impl ClipboardWriter for StdoutWriter {
    fn name(&self) -> String {
        "stdout".to_string()
    }

    fn write_text(&mut self, text: &str) -> Result<(), CopyError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(text.as_bytes())?;
        handle.write_all(b"\n")?;
        handle.flush()?;
        Ok(())
    }
}

pub struct FileWriter {
    writer: AtomicFileWriter,
}

impl FileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            writer: AtomicFileWriter::new(path),
        }
    }
}

impl ClipboardWriter for FileWriter {
    fn name(&self) -> String {
        self.writer.target().display().to_string()
    }

    fn write_text(&mut self, text: &str) -> Result<(), CopyError> {
        self.writer.write(text)?;
        Ok(())
    }
}

/// Tries the primary writer and falls back to a second one when it fails.
/// The reported outcome is a failure only when every writer failed.
pub struct FallbackClipboard {
    primary: Box<dyn ClipboardWriter>,
    fallback: Option<Box<dyn ClipboardWriter>>,
}

impl FallbackClipboard {
    pub fn new(primary: Box<dyn ClipboardWriter>) -> Self {
        Self {
            primary,
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: Box<dyn ClipboardWriter>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Stdout alone, or the given file with stdout behind it.
    pub fn for_output(out: Option<PathBuf>) -> Self {
        match out {
            Some(path) => Self::new(Box::new(FileWriter::new(path)))
                .with_fallback(Box::new(StdoutWriter)),
            None => Self::new(Box::new(StdoutWriter)),
        }
    }

    pub fn copy(&mut self, text: &str) -> CopyOutcome {
        let primary_err = match self.primary.write_text(text) {
            Ok(()) => {
                clip_info!("Outline written to {}", self.primary.name());
                return CopyOutcome::success();
            }
            Err(err) => err,
        };
        clip_warn!("Writing to {} failed: {}", self.primary.name(), primary_err);

        let Some(fallback) = self.fallback.as_mut() else {
            return CopyOutcome::failure(primary_err.to_string());
        };
        match fallback.write_text(text) {
            Ok(()) => {
                clip_info!("Outline written to fallback {}", fallback.name());
                CopyOutcome::success()
            }
            Err(err) => {
                clip_warn!("Fallback {} failed: {}", fallback.name(), err);
                CopyOutcome::failure(format!("{primary_err}; {err}"))
            }
        }
    }
}
