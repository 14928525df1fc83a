use super::setup::{get_version, Cli, Lookup};
use fcqs::api::FcqsApi;
use fcqs::config::FcqsConfig;
use fcqs::error::{FcqsError, Result};
use fcqs::model::Title;
use fcqs::shell::write_bash_script;
use fcqs::store::fs::FileStore;
use std::io::Write;
use tracing::debug;

/// What the arguments ask for, decided before any notes file is touched.
#[derive(Debug, PartialEq, Eq)]
enum Request {
    Titles,
    Note(Lookup, Title),
    /// An empty title: answered with no output so shell bindings need no checks.
    Nothing,
}

fn request(cli: &Cli) -> Result<Request> {
    let lookup = cli.lookup();
    match cli.titles.as_slice() {
        [] if lookup == Lookup::Contents => Ok(Request::Titles),
        [title] => match Title::new(title) {
            Ok(title) => Ok(Request::Note(lookup, title)),
            Err(_) => {
                debug!("empty title, nothing to look up");
                Ok(Request::Nothing)
            }
        },
        _ => Err(FcqsError::InvalidNumberOfArgs),
    }
}

pub fn dispatch<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    if cli.version {
        writeln!(out, "{}", get_version())?;
        return Ok(());
    }
    if cli.bash {
        return write_bash_script(out);
    }

    let request = request(cli)?;
    if request == Request::Nothing {
        return Ok(());
    }

    let config = FcqsConfig::from_env()?;
    debug!(files = ?config.notes_files, omit_title = config.omit_title, "resolved notes");
    let api = FcqsApi::new(FileStore::new(config.notes_files));

    match request {
        Request::Titles => api.write_titles(out),
        Request::Note(Lookup::Contents, title) => {
            api.write_contents(out, &title, cli.notitle || config.omit_title)
        }
        Request::Note(Lookup::Url, title) => api.write_first_url(out, &title),
        Request::Note(Lookup::Command, title) => api.write_first_command_block(out, &title),
        Request::Note(Lookup::Location, title) => api.write_locations(out, &title),
        Request::Nothing => Ok(()),
    }
}
