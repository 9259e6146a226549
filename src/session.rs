//! One draw-and-insert operation
//!
//! The session resolves where a rendered draw block goes: a live editor cursor
//! when one is available and enabled, otherwise the target note via the
//! configured insert location, otherwise the daily-note fallback, otherwise a
//! user-recoverable "no note open" error. Settings come in as an explicit
//! value per operation. Content is computed first and written once; no
//! incremental writes.

use chrono::Local;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::config::Settings;
use crate::draw::DrawResult;
use crate::insert::{self, InsertLocation};
use crate::template;
use crate::vault::{NoteVault, VaultError};

/// Errors from a draw-and-insert operation
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No note is open. Open a note or enable the daily note fallback.")]
    NoNoteOpen,

    #[error(transparent)]
    Vault(#[from] VaultError),
}

/// A live editing surface with a cursor
///
/// The one host capability the cursor path needs: replace the current
/// selection. The buffer-level logic never runs through this.
pub trait EditorSurface {
    fn has_cursor(&self) -> bool;
    fn replace_selection(&mut self, text: &str);
}

/// Where the rendered block ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Taken by the live editor surface
    Cursor,
    /// Written to a note at this vault-relative path
    Note { path: PathBuf },
}

/// Binds settings and a vault for one user-triggered operation
pub struct DrawSession<'a> {
    settings: &'a Settings,
    vault: &'a NoteVault,
}

impl<'a> DrawSession<'a> {
    pub fn new(settings: &'a Settings, vault: &'a NoteVault) -> Self {
        Self { settings, vault }
    }

    /// Render the draw and insert it
    ///
    /// `active_note` plays the role of the host's active buffer; `editor` the
    /// live cursor surface, if any.
    pub fn record(
        &self,
        result: &DrawResult,
        active_note: Option<&Path>,
        editor: Option<&mut dyn EditorSurface>,
    ) -> Result<InsertOutcome, SessionError> {
        let rendered = template::render(&self.settings.output_template, result);

        if self.settings.insert_at_cursor
            && let Some(editor) = editor
            && editor.has_cursor()
        {
            editor.replace_selection(&rendered);
            info!("recorded draw at editor cursor");
            return Ok(InsertOutcome::Cursor);
        }

        let (rel, location) = match active_note {
            Some(path) => (path.to_path_buf(), self.settings.insert_location),
            None if self.settings.use_daily_note => {
                let rel = NoteVault::daily_note_rel(&self.settings.daily_note_path_pattern, &Local::now());
                // The daily fallback always appends, whatever the configured location
                (rel, InsertLocation::Append)
            }
            None => return Err(SessionError::NoNoteOpen),
        };

        self.vault.ensure_note(&rel)?;
        let content = self.vault.read_note(&rel)?;
        let updated = insert::apply(&content, &rendered, location, &self.settings.heading_name);
        self.vault.write_note(&rel, &updated)?;

        info!(note = %rel.display(), %location, "recorded draw");
        Ok(InsertOutcome::Note { path: rel })
    }
}
