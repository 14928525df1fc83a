use super::{NotesSource, NotesStore};
use crate::error::{FcqsError, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Notes read from files on disk, concatenated in the given order.
#[derive(Debug, Clone)]
pub struct FileStore {
    paths: Vec<PathBuf>,
}

impl FileStore {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    fn open_file(path: &Path) -> Result<NotesSource> {
        let file = File::open(path).map_err(|source| FcqsError::NotesFile {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened notes file");
        Ok(NotesSource::new(
            path.display().to_string(),
            BufReader::new(file),
        ))
    }
}

impl NotesStore for FileStore {
    fn open(&self) -> Result<Vec<NotesSource>> {
        self.paths.iter().map(|p| Self::open_file(p)).collect()
    }
}
