use crate::error::{FcqsError, Result};
use directories::BaseDirs;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const DEFAULT_NOTES_FILE: &str = "fcnotes.md";

/// Notes files, separated like `PATH` (`:` on Unix, `;` on Windows).
pub const NOTES_FILE_ENV: &str = "FCQS_NOTES_FILE";

/// Present (with any value) means content is written without its title line.
pub const NO_TITLE_ENV: &str = "FCQS_CONTENTS_NO_TITLE";

/// `tracing` filter directives for the binary's stderr log.
pub const LOG_ENV: &str = "FCQS_LOG";

/// Settings taken from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FcqsConfig {
    /// Notes files, read in this order.
    pub notes_files: Vec<PathBuf>,
    pub omit_title: bool,
}

impl FcqsConfig {
    pub fn from_env() -> Result<Self> {
        let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        Ok(Self {
            notes_files: resolve_notes_files(env::var_os(NOTES_FILE_ENV), home.as_deref())?,
            omit_title: env::var_os(NO_TITLE_ENV).is_some(),
        })
    }
}

/// Splits the notes file list, falling back to `<home>/fcnotes.md` when it names
/// nothing. The home directory is only needed for the fallback.
pub fn resolve_notes_files(list: Option<OsString>, home: Option<&Path>) -> Result<Vec<PathBuf>> {
    let files: Vec<PathBuf> = list
        .as_deref()
        .map(|list| {
            env::split_paths(list)
                .filter(|p| !p.as_os_str().is_empty())
                .collect()
        })
        .unwrap_or_default();

    if !files.is_empty() {
        return Ok(files);
    }

    home.map(|home| vec![home.join(DEFAULT_NOTES_FILE)])
        .ok_or(FcqsError::HomeDirUnavailable)
}
