//! # Section Scanner
//!
//! A section is a heading line plus every following line up to the next heading that
//! is not inside a code fence. The scanner walks lines once, in order, and decides for
//! each line whether it belongs to the section selected by a target [`Title`].
//!
//! ## States
//!
//! ```text
//!            fence                     fence
//!   Normal ─────────▶ Fenced   Scoped ─────────▶ ScopedFenced
//!     ▲  ◀─────────          │  ▲  ◀─────────
//!     │      fence            │  │      fence
//!     │                       │  │
//!     └── other heading ──────┘  └── target heading (from Normal)
//! ```
//!
//! - Headings are only evaluated in `Normal` and `Scoped`; inside a fence every line is
//!   plain text, so `# comment` in a shell block never ends a section.
//! - In `Scoped`, a heading carrying the same target title is kept as part of the body.
//!   That is how sections sharing a title are merged in document order.
//!
//! [`ScanState::next`] is the single transition function; [`SectionScanner`] wraps it
//! with line classification and bookkeeping.

use crate::model::{LineKind, Title};
use std::io::{self, BufRead};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Normal,
    Fenced,
    Scoped,
    ScopedFenced,
}

/// What to do with the line that caused a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Not part of the selected section.
    Skip,
    /// The heading that opens a matching section. It belongs to the output.
    Enter,
    /// A body line of the matching section.
    Include,
    /// The heading that closes the section. It does not belong to the output.
    Leave,
}

impl Action {
    pub fn emits(self) -> bool {
        matches!(self, Action::Enter | Action::Include)
    }
}

impl ScanState {
    pub fn next(self, line: &LineKind<'_>, target: &Title) -> (ScanState, Action) {
        match (self, line) {
            (ScanState::Normal, LineKind::Fence(_)) => (ScanState::Fenced, Action::Skip),
            (ScanState::Normal, LineKind::Heading(h)) if h.has_title(target) => {
                (ScanState::Scoped, Action::Enter)
            }
            (ScanState::Normal, _) => (ScanState::Normal, Action::Skip),

            (ScanState::Fenced, LineKind::Fence(_)) => (ScanState::Normal, Action::Skip),
            (ScanState::Fenced, _) => (ScanState::Fenced, Action::Skip),

            (ScanState::Scoped, LineKind::Heading(h)) if !h.has_title(target) => {
                (ScanState::Normal, Action::Leave)
            }
            (ScanState::Scoped, LineKind::Fence(_)) => (ScanState::ScopedFenced, Action::Include),
            (ScanState::Scoped, _) => (ScanState::Scoped, Action::Include),

            (ScanState::ScopedFenced, LineKind::Fence(_)) => (ScanState::Scoped, Action::Include),
            (ScanState::ScopedFenced, _) => (ScanState::ScopedFenced, Action::Include),
        }
    }
}

/// Runs the state machine for one target title.
#[derive(Debug)]
pub struct SectionScanner<'t> {
    target: &'t Title,
    state: ScanState,
    sections: usize,
}

impl<'t> SectionScanner<'t> {
    pub fn new(target: &'t Title) -> Self {
        Self {
            target,
            state: ScanState::Normal,
            sections: 0,
        }
    }

    pub fn feed(&mut self, line: &str) -> Action {
        let (state, action) = self.state.next(&LineKind::classify(line), self.target);
        if action == Action::Enter {
            self.sections += 1;
        }
        self.state = state;
        action
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Number of matching sections entered so far.
    pub fn sections(&self) -> usize {
        self.sections
    }
}

/// Newline-delimited lines of a reader.
///
/// A trailing `\r` is dropped and invalid UTF-8 is replaced, so only a failing read is
/// an error. A last line without a newline is still yielded.
pub struct Lines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.ends_with(b"\n") {
                    self.buf.pop();
                    if self.buf.ends_with(b"\r") {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}
