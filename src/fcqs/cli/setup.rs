use clap::{ArgGroup, Parser};
use std::sync::OnceLock;

/// `0.1.0` for a tagged, clean checkout; `0.1.0@<short hash> <commit date>` for
/// anything else built from git. Stamped by `build.rs`.
pub fn get_version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();

    VERSION.get_or_init(|| {
        let release = env!("CARGO_PKG_VERSION");
        let hash = env!("FCQS_GIT_HASH");
        if env!("FCQS_IS_RELEASE") == "true" || hash.is_empty() {
            release.to_string()
        } else {
            format!("{}@{} {}", release, hash, env!("FCQS_GIT_COMMIT_DATE"))
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "fcqs",
    bin_name = "fcqs",
    disable_version_flag = true,
    about = "Look up titles, contents, URLs and commands in Markdown notes",
    long_about = None
)]
#[command(group(ArgGroup::new("lookup").args(["url", "command", "location"])))]
pub struct Cli {
    /// Title of the note; without one, every title is listed
    #[arg(value_name = "TITLE")]
    pub titles: Vec<String>,

    /// Output the first URL from the note
    #[arg(short, long)]
    pub url: bool,

    /// Output the first command from the note
    #[arg(short, long)]
    pub command: bool,

    /// Output the note location
    #[arg(short, long)]
    pub location: bool,

    /// No title on output content
    #[arg(short = 't', long)]
    pub notitle: bool,

    /// Output bash integration script
    #[arg(long)]
    pub bash: bool,

    /// Output the version
    #[arg(short = 'v', long)]
    pub version: bool,
}

/// What to write for the selected note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Contents,
    Url,
    Command,
    Location,
}

impl Cli {
    pub fn lookup(&self) -> Lookup {
        if self.url {
            Lookup::Url
        } else if self.command {
            Lookup::Command
        } else if self.location {
            Lookup::Location
        } else {
            Lookup::Contents
        }
    }
}
