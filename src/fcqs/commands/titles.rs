use crate::error::{FcqsError, Result, ScanPhase};
use crate::model::{LineKind, Title};
use std::collections::HashSet;
use std::io::{self, Write};
use tracing::debug;

/// Writes every distinct title once, in order of first appearance.
///
/// A title is held back until a non-blank, non-titled line outside a fence follows
/// it, so sections without any content are not listed (also at end of input). A
/// later titled heading replaces the held title. Blank lines change nothing.
pub fn run<I, W>(lines: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    let mut emitted: HashSet<Title> = HashSet::new();
    let mut pending: Option<Title> = None;
    let mut fenced = false;

    for line in lines {
        let line = line.map_err(FcqsError::scan(ScanPhase::Titles))?;

        let kind = LineKind::classify(&line);
        if fenced {
            if matches!(kind, LineKind::Fence(_)) {
                fenced = false;
            }
            continue;
        }
        if line.is_empty() {
            continue;
        }

        match kind {
            LineKind::Heading(heading) if heading.title().is_some() => {
                pending = heading.into_title();
            }
            kind => {
                if let Some(title) = pending.take() {
                    if !emitted.contains(&title) {
                        writeln!(out, "{}", title)?;
                        emitted.insert(title);
                    }
                }
                if matches!(kind, LineKind::Fence(_)) {
                    fenced = true;
                }
            }
        }
    }

    if let Some(title) = pending {
        debug!(%title, "title without contents at end of notes is not listed");
    }
    debug!(count = emitted.len(), "listed titles");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{self, failing_lines, lines, output};

    fn titles(text: &str) -> String {
        let mut buf = Vec::new();
        run(lines(text), &mut buf).unwrap();
        output(buf)
    }

    #[test]
    fn test_titles_of_fixture_notes() {
        let expected = "\
title
Long title and contents have lines
Regular expression meta chars in the title are ignored $
Consecutive blank lines are combined into a single line
same title
Heading levels and structures are ignored
Trailing spaces in the title are ignored
Spaces before the title are ignored
Headings in fenced code blocks are ignored
There can be no blank line
Titles without a space after the # are not recognized
URL
command-line
command-line with $
";
        assert_eq!(titles(fixtures::NOTES), expected);
    }

    #[test]
    fn test_titles_are_stable_across_runs() {
        assert_eq!(titles(fixtures::NOTES), titles(fixtures::NOTES));
    }

    #[test]
    fn test_single_section() {
        assert_eq!(titles("# title\ncontents\n"), "title\n");
    }

    #[test]
    fn test_duplicates_listed_once() {
        let text = "# same\n1st\n\n# other\nx\n# same\n2nd\n";
        assert_eq!(titles(text), "same\nother\n");
    }

    #[test]
    fn test_tabs_in_titles_are_kept() {
        assert_eq!(titles("# foo\t\nbody\n"), "foo\t\n");
    }

    #[test]
    fn test_no_space_title_is_not_listed() {
        assert_eq!(titles("#no_space_title\ncontents\n"), "");
    }

    #[test]
    fn test_no_contents_title_near_eof_is_not_listed() {
        assert_eq!(titles("# first\nbody\n\n# last\n\n"), "first\n");
        assert_eq!(titles("# only\n"), "");
    }

    #[test]
    fn test_title_followed_by_heading_is_replaced() {
        assert_eq!(titles("# empty\n# full\nbody\n"), "full\n");
    }

    #[test]
    fn test_blank_heading_releases_pending_title() {
        assert_eq!(titles("# before blank\n#\ntext\n"), "before blank\n");
    }

    #[test]
    fn test_headings_in_fences_are_ignored() {
        let text = "# real\n```\n# fenced\n```\n````\n# after four backticks\nx\n";
        assert_eq!(titles(text), "real\nafter four backticks\n");
    }

    #[test]
    fn test_multi_file_titles() {
        let sources = vec![
            crate::store::NotesSource::new("location.md", fixtures::LOCATION.as_bytes()),
            crate::store::NotesSource::new("extra.md", fixtures::LOCATION_EXTRA.as_bytes()),
        ];
        let mut buf = Vec::new();
        run(crate::store::chain_lines(sources), &mut buf).unwrap();
        assert_eq!(
            output(buf),
            "location test data\n5th Line\nother 5th Line\n9th Line\n"
        );
    }

    #[test]
    fn test_scan_error() {
        let mut buf = Vec::new();
        let err = run(failing_lines(&[]), &mut buf).unwrap_err();
        assert_eq!(err.to_string(), "seek titles: scan error");
        assert!(buf.is_empty());
    }

    #[test]
    fn test_scan_error_keeps_partial_output() {
        let mut buf = Vec::new();
        let err = run(failing_lines(&["# kept", "body"]), &mut buf).unwrap_err();
        assert!(matches!(
            err,
            FcqsError::Scan {
                phase: ScanPhase::Titles,
                ..
            }
        ));
        assert_eq!(output(buf), "kept\n");
    }
}
