//! # Notes Store
//!
//! The notes are one logical stream of lines that may come from several physical
//! sources. [`NotesStore`] hides where those sources live:
//!
//! - [`fs::FileStore`]: the notes files resolved from the environment.
//! - [`memory::InMemoryStore`]: named in-memory texts for tests.
//!
//! A store opens every source up front, in reading order, so a missing file is
//! reported before any output is produced. Each [`NotesSource`] keeps its name so the
//! location scan can report which file a heading came from.

use crate::error::Result;
use crate::scanner::Lines;
use std::fmt;
use std::io::{self, BufRead};

pub mod fs;
pub mod memory;

/// Something that can hand out the notes sources, in order.
pub trait NotesStore {
    /// Opens every source. Fails on the first source that cannot be opened.
    fn open(&self) -> Result<Vec<NotesSource>>;
}

/// One readable, named notes source.
pub struct NotesSource {
    name: String,
    reader: Box<dyn BufRead>,
}

impl NotesSource {
    pub fn new(name: impl Into<String>, reader: impl BufRead + 'static) -> Self {
        Self {
            name: name.into(),
            reader: Box::new(reader),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_lines(self) -> Lines<Box<dyn BufRead>> {
        Lines::new(self.reader)
    }
}

impl fmt::Debug for NotesSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotesSource")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The lines of all sources as one stream. File boundaries never merge lines.
pub fn chain_lines(sources: Vec<NotesSource>) -> impl Iterator<Item = io::Result<String>> {
    sources.into_iter().flat_map(NotesSource::into_lines)
}
