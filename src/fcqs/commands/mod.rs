//! # Commands
//!
//! One module per projection of the notes stream. Each command reads lines, writes its
//! result to any `io::Write`, and never decides where either of them comes from.
//!
//! - [`titles`]: every distinct title, in order of first appearance.
//! - [`contents`]: the filtered body of every section carrying a title.
//! - [`url`]: the first URL in a section.
//! - [`command_block`]: the first shell block in a section, prompts stripped.
//! - [`location`]: the file and line of a section's heading, per source.
//!
//! Read failures are wrapped as [`FcqsError::Scan`](crate::error::FcqsError::Scan)
//! naming the phase; write failures surface as `FcqsError::Io`. Output written before
//! a failure stays written.

pub mod command_block;
pub mod contents;
pub mod location;
pub mod titles;
pub mod url;
