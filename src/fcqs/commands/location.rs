use crate::error::{FcqsError, Result, ScanPhase};
use crate::model::Title;
use crate::scanner::{Action, SectionScanner};
use crate::store::NotesSource;
use std::fmt;
use std::io::Write;
use tracing::debug;

/// Where a section's heading sits: source name and 1-based line within that source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteLocation {
    pub source: String,
    pub line: usize,
}

impl fmt::Display for NoteLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}", self.source, self.line)
    }
}

/// Finds the first heading carrying `title` in one source.
///
/// The scan starts in a fresh state, so fences never leak between sources and line
/// numbers are relative to the source.
pub fn locate(source: NotesSource, title: &Title) -> Result<Option<NoteLocation>> {
    let name = source.name().to_string();
    let mut scanner = SectionScanner::new(title);

    for (idx, line) in source.into_lines().enumerate() {
        let line = line.map_err(FcqsError::scan(ScanPhase::Location))?;
        if scanner.feed(&line) == Action::Enter {
            return Ok(Some(NoteLocation {
                source: name,
                line: idx + 1,
            }));
        }
    }
    Ok(None)
}

/// Writes one `"<source>" <line>` row per source that contains `title`, in order.
pub fn run<W: Write>(sources: Vec<NotesSource>, out: &mut W, title: &Title) -> Result<()> {
    for source in sources {
        match locate(source, title)? {
            Some(location) => {
                debug!(%title, source = %location.source, line = location.line, "located note");
                writeln!(out, "{}", location)?;
            }
            None => debug!(%title, "note not in source"),
        }
    }
    Ok(())
}
