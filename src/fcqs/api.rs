//! # API Facade
//!
//! A thin layer between any client and the commands. Each method opens the store once,
//! runs exactly one command over the result and writes into the caller's writer.
//!
//! ## What the API Does NOT Do
//!
//! - **Scanning logic**: that belongs in `commands/*.rs`
//! - **Choosing the output**: the caller passes any `io::Write`
//! - **Resolving notes files**: the store it is built with already knows them
//!
//! ## Generic Over NotesStore
//!
//! `FcqsApi<S: NotesStore>` works with any source of notes:
//! - Production: `FcqsApi<FileStore>`
//! - Testing: `FcqsApi<InMemoryStore>`
//!
//! API tests check that each method reaches its command with the store's lines. The
//! commands' own behavior is tested in their modules.

use crate::commands;
use crate::error::Result;
use crate::model::Title;
use crate::store::{chain_lines, NotesStore};
use std::io::Write;
use tracing::debug;

pub struct FcqsApi<S: NotesStore> {
    store: S,
}

impl<S: NotesStore> FcqsApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn write_titles<W: Write>(&self, out: &mut W) -> Result<()> {
        let sources = self.store.open()?;
        debug!(sources = sources.len(), "listing titles");
        commands::titles::run(chain_lines(sources), out)
    }

    pub fn write_contents<W: Write>(
        &self,
        out: &mut W,
        title: &Title,
        omit_title: bool,
    ) -> Result<()> {
        let sources = self.store.open()?;
        commands::contents::run(chain_lines(sources), out, title, omit_title)
    }

    pub fn write_first_url<W: Write>(&self, out: &mut W, title: &Title) -> Result<()> {
        let sources = self.store.open()?;
        commands::url::run(chain_lines(sources), out, title)
    }

    pub fn write_first_command_block<W: Write>(&self, out: &mut W, title: &Title) -> Result<()> {
        let sources = self.store.open()?;
        commands::command_block::run(chain_lines(sources), out, title)
    }

    /// Unlike the other methods, the sources are scanned one by one so each match is
    /// reported against its own file.
    pub fn write_locations<W: Write>(&self, out: &mut W, title: &Title) -> Result<()> {
        let sources = self.store.open()?;
        commands::location::run(sources, out, title)
    }
}
