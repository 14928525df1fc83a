use super::{NotesSource, NotesStore};
use crate::error::Result;
use std::io::Cursor;

/// Named notes held in memory. Used by tests and anything that already has the text.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    notes: Vec<(String, String)>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store with one source named `notes.md`.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new().with_source("notes.md", text)
    }

    pub fn with_source(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.notes.push((name.into(), text.into()));
        self
    }
}

impl NotesStore for InMemoryStore {
    fn open(&self) -> Result<Vec<NotesSource>> {
        Ok(self
            .notes
            .iter()
            .map(|(name, text)| {
                NotesSource::new(name.clone(), Cursor::new(text.clone().into_bytes()))
            })
            .collect())
    }
}
