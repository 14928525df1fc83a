//! # Output Line Filter
//!
//! Cleans the raw lines of a selected section before they are written:
//!
//! 1. The first line (the heading) is dropped when `omit_title` is set.
//! 2. Blank lines before the first written line are dropped.
//! 3. A run of blank lines collapses to one blank line.
//! 4. A blank line at the very end is dropped.
//!
//! Rule 4 needs one line of lookahead, so the filter holds the previous line as
//! `pending` and only writes it once the next line is known. [`OutputFilter::finish`]
//! flushes the last pending line.

use std::io::{self, Write};

#[derive(Debug, Default)]
pub struct OutputFilter {
    skip_title: bool,
    pending: Option<String>,
}

impl OutputFilter {
    pub fn new(omit_title: bool) -> Self {
        Self {
            skip_title: omit_title,
            pending: None,
        }
    }

    pub fn push<W: Write>(&mut self, out: &mut W, line: &str) -> io::Result<()> {
        match self.pending.as_deref() {
            None => {
                if self.skip_title {
                    self.skip_title = false;
                } else if !line.is_empty() {
                    self.pending = Some(line.to_string());
                }
            }
            Some(prev) => {
                if prev.is_empty() && line.is_empty() {
                    return Ok(());
                }
                writeln!(out, "{}", prev)?;
                self.pending = Some(line.to_string());
            }
        }
        Ok(())
    }

    pub fn finish<W: Write>(self, out: &mut W) -> io::Result<()> {
        match self.pending {
            Some(last) if !last.is_empty() => writeln!(out, "{}", last),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filtered(input: &str, omit_title: bool) -> String {
        let mut out = Vec::new();
        let mut filter = OutputFilter::new(omit_title);
        for line in input.lines() {
            filter.push(&mut out, line).unwrap();
        }
        filter.finish(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_filter_keeping_title() {
        for (input, expected) in [
            ("a\nb\n", "a\nb\n"),
            ("\na\nb\n\n", "a\nb\n"),
            ("a\n\n\nb\n", "a\n\nb\n"),
            ("a\n\n\n\nb\n", "a\n\nb\n"),
            ("# a\n\n\n\nb\n", "# a\n\nb\n"),
            ("# a\n", "# a\n"),
            ("", ""),
            ("\n\n", ""),
        ] {
            assert_eq!(filtered(input, false), expected, "{input:?}");
        }
    }

    #[test]
    fn test_filter_omitting_title() {
        for (input, expected) in [
            ("a\nb\n", "b\n"),
            ("\na\nb\n\n", "a\nb\n"),
            ("a\n\n\nb\n", "b\n"),
            ("a\n\n\n\nb\n", "b\n"),
            ("# a\n\n\n\nb\n", "b\n"),
            ("# a\n", ""),
        ] {
            assert_eq!(filtered(input, true), expected, "{input:?}");
        }
    }

    #[test]
    fn test_filter_keeps_whitespace_lines_and_trailing_spaces() {
        assert_eq!(filtered("a  \n  \nb\n", false), "a  \n  \nb\n");
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("write error"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_filter_surfaces_write_errors() {
        let mut filter = OutputFilter::new(false);
        filter.push(&mut BrokenWriter, "first line").unwrap();
        let err = filter.push(&mut BrokenWriter, "second line").unwrap_err();
        assert_eq!(err.to_string(), "write error");
    }
}
