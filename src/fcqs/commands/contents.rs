use crate::error::{FcqsError, Result, ScanPhase};
use crate::filter::OutputFilter;
use crate::model::Title;
use crate::scanner::SectionScanner;
use std::io::{self, Write};
use tracing::debug;

/// Writes every section titled `title`, merged in document order and filtered.
///
/// Nothing is written when no section matches.
pub fn run<I, W>(lines: I, out: &mut W, title: &Title, omit_title: bool) -> Result<()>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    let mut scanner = SectionScanner::new(title);
    let mut filter = OutputFilter::new(omit_title);

    for line in lines {
        let line = line.map_err(FcqsError::scan(ScanPhase::Contents))?;
        if scanner.feed(&line).emits() {
            filter.push(out, &line)?;
        }
    }
    filter.finish(out)?;

    debug!(%title, sections = scanner.sections(), "extracted contents");
    Ok(())
}

/// Runs [`run`] into a buffer, for commands that post-process the section.
pub(crate) fn collect<I>(lines: I, title: &Title) -> Result<String>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut buf = Vec::new();
    run(lines, &mut buf, title, false)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
