//! # fcqs Architecture
//!
//! fcqs answers quick questions about a Markdown notes file: which notes exist, what a
//! note says, and the first URL, shell command or file position in it. A note is a
//! top-level heading and the lines below it; every heading with the same title adds to
//! the same note.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, reads the environment                  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Opens the store, runs one command into a writer          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Titles, contents, URL, command block, location           │
//! │  - Built on the line model, section scanner, output filter  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NotesStore trait, FileStore and InMemoryStore            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Streams In, Writers Out
//!
//! Commands take an iterator of lines and an `io::Write`. They never open files,
//! print, or exit, and they stream: a notes file is never held in memory as a whole
//! except for the one note the URL and command extractors post-process.
//!
//! ## Module Overview
//!
//! - [`model`]: titles, heading and fence line classification
//! - [`scanner`]: the fence-aware section state machine and line reader
//! - [`filter`]: blank-line collapsing and title omission for content output
//! - [`commands`]: one module per lookup
//! - [`api`]: the facade clients call
//! - [`store`]: where the notes come from
//! - [`config`]: environment settings
//! - [`shell`]: the bash integration script
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod scanner;
pub mod shell;
pub mod store;
