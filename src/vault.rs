//! Notes directory adapter
//!
//! A `NoteVault` is a directory of markdown notes addressed by relative path.
//! Reads and writes are whole-note operations: the session computes the new
//! content first and this module writes it in one shot, so a failed write never
//! leaves a note partially updated. I/O failures are surfaced as-is and never
//! retried (a retry could duplicate or lose a draw record).

use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use crate::timefmt;

/// Errors from vault I/O
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("Failed to {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A directory of notes
#[derive(Debug, Clone)]
pub struct NoteVault {
    root: PathBuf,
}

impl NoteVault {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn abs(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.root.join(rel)
    }

    pub fn note_exists(&self, rel: impl AsRef<Path>) -> bool {
        self.abs(rel).is_file()
    }

    /// Read a whole note
    pub fn read_note(&self, rel: impl AsRef<Path>) -> Result<String, VaultError> {
        let path = self.abs(&rel);
        debug!(path = %path.display(), "reading note");
        fs::read_to_string(&path).map_err(|source| VaultError::Io {
            action: "read",
            path,
            source,
        })
    }

    /// Write a whole note, creating parent directories as needed
    pub fn write_note(&self, rel: impl AsRef<Path>, content: &str) -> Result<(), VaultError> {
        let path = self.abs(&rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| VaultError::Io {
                action: "create directory for",
                path: path.clone(),
                source,
            })?;
        }
        debug!(path = %path.display(), bytes = content.len(), "writing note");
        fs::write(&path, content).map_err(|source| VaultError::Io {
            action: "write",
            path,
            source,
        })
    }

    /// Create an empty note if it does not exist yet
    pub fn ensure_note(&self, rel: impl AsRef<Path>) -> Result<(), VaultError> {
        if !self.note_exists(&rel) {
            info!(path = %self.abs(&rel).display(), "creating empty note");
            self.write_note(&rel, "")?;
        }
        Ok(())
    }

    /// Resolve a daily-note pattern against a local date
    ///
    /// A trailing `.md` is treated as a literal extension, not as pattern
    /// letters; the original plugin likewise formatted only the date part and
    /// appended the extension afterwards.
    pub fn daily_note_rel(pattern: &str, now: &DateTime<Local>) -> PathBuf {
        let (stem, ext) = match pattern.strip_suffix(".md") {
            Some(stem) => (stem, ".md"),
            None => (pattern, ""),
        };
        PathBuf::from(format!("{}{}", timefmt::format_pattern(now, stem), ext))
    }
}
