use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The scan that was running when reading the notes failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPhase {
    Titles,
    Contents,
    Location,
}

impl fmt::Display for ScanPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScanPhase::Titles => "titles",
            ScanPhase::Contents => "contents",
            ScanPhase::Location => "location",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum FcqsError {
    #[error("title is empty")]
    EmptyTitle,

    #[error("invalid number of arguments")]
    InvalidNumberOfArgs,

    #[error("notes file name: cannot access user home directory")]
    HomeDirUnavailable,

    #[error("notes file: {}: {source}", path.display())]
    NotesFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("seek {phase}: {source}")]
    Scan {
        phase: ScanPhase,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl FcqsError {
    pub fn scan(phase: ScanPhase) -> impl FnOnce(io::Error) -> FcqsError {
        move |source| FcqsError::Scan { phase, source }
    }

    /// True when the error only means stdout went away (e.g. `fcqs | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, FcqsError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, FcqsError>;
