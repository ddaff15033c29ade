//! JSON-file backed note storage.
//!
//! The whole note list lives in memory and is rewritten to disk after every
//! mutation. Persistence problems never escape this module: a broken file is
//! treated as an empty store on load, and a failed write is logged and
//! reported through the `bool` returned by [`NoteStore::save`].

use crate::error::{JotterError, Result};
use crate::note::Note;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Default backing file name, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "notes.json";

/// Handle to the note list and its backing file.
#[derive(Debug)]
pub struct NoteStore {
    path: PathBuf,
    notes: Vec<Note>,
}

impl NoteStore {
    /// Bind a store to `path`. Nothing is read until [`NoteStore::load`].
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            notes: Vec::new(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the backing file into memory.
    ///
    /// A missing file gives an empty store. An unreadable or malformed file
    /// is logged and also gives an empty store; its content is not kept.
    pub fn load(&mut self) -> &[Note] {
        self.notes = if self.path.exists() {
            match self.read_file() {
                Ok(notes) => {
                    debug!("Loaded {} notes from {}", notes.len(), self.path.display());
                    notes
                }
                Err(e) => {
                    warn!("Failed to load notes from {}: {}", self.path.display(), e);
                    Vec::new()
                }
            }
        } else {
            debug!("No store at {}, starting empty", self.path.display());
            Vec::new()
        };
        &self.notes
    }

    fn read_file(&self) -> Result<Vec<Note>> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overwrite the backing file with the current notes.
    ///
    /// Returns `false` if the write failed; the in-memory notes are untouched.
    pub fn save(&self) -> bool {
        match self.write_file() {
            Ok(()) => {
                debug!("Saved {} notes to {}", self.notes.len(), self.path.display());
                true
            }
            Err(e) => {
                warn!("Failed to save notes to {}: {}", self.path.display(), e);
                false
            }
        }
    }

    fn write_file(&self) -> Result<()> {
        // serde_json's pretty printer indents by two spaces and leaves
        // non-ASCII characters unescaped.
        let json = serde_json::to_string_pretty(&self.notes)?;
        fs::write(&self.path, json).map_err(JotterError::from)
    }

    /// All notes in insertion order.
    pub fn get_all(&self) -> &[Note] {
        &self.notes
    }

    /// Append a note and persist.
    pub fn add(&mut self, note: Note) {
        self.notes.push(note);
        self.save();
    }

    /// Remove the note at 0-based `index` and persist.
    ///
    /// Returns `false` and changes nothing if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.notes.len() {
            return false;
        }
        self.notes.remove(index);
        self.save();
        true
    }

    /// Drop every note and persist.
    pub fn clear(&mut self) {
        self.notes.clear();
        self.save();
    }

    /// Number of notes.
    pub fn count(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
