//! # Domain Model: Titles, Heading Lines and Fence Lines
//!
//! Every scan in fcqs starts by classifying one raw text line. This module holds the
//! value types and the pure predicates that do that classification. Nothing here
//! performs I/O.
//!
//! ## Heading Lines
//!
//! ```text
//! # title          heading, carries "title"
//! ### deeper one   heading, carries "deeper one" (level is ignored)
//! #                heading, carries no title ("blank title")
//! #   ␠␠           heading, carries no title
//! #no_space        NOT a heading
//! ␠␠# indented     NOT a heading
//! ```
//!
//! A line is a heading iff it starts with one or more `#` and the remainder after those
//! `#` is empty or starts with a space. The carried title is the remainder with
//! surrounding spaces trimmed; trailing `#` characters are part of the title (`# C#`
//! carries `C#`).
//!
//! ## Fence Lines
//!
//! A fence line starts with exactly three backticks. Four or more backticks are
//! ordinary text. The first word after the backticks is the fence's identifier, which
//! is checked against [`SHELL_IDENTIFIERS`] when looking for command blocks.
//!
//! ## Titles
//!
//! [`Title`] is never empty. It is compared by exact string equality: no case folding
//! and no pattern interpretation, so `$`, `*` or `(` in a title are plain characters.

use crate::error::{FcqsError, Result};
use std::fmt;
use std::str::FromStr;

const ATX_HEADING_CHAR: char = '#';
const CODE_FENCE: &str = "```";

/// Fence identifiers that mark a shell or console block.
pub const SHELL_IDENTIFIERS: &[&str] = &[
    "shell",
    "sh",
    "shell-script",
    "bash",
    "zsh",
    "powershell",
    "posh",
    "pwsh",
    "shellsession",
    "console",
];

/// A non-empty note title.
///
/// Titles typed by the user are whitespace-trimmed. Titles read from headings keep
/// everything but the surrounding spaces, so `# foo\t` carries `foo\t`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Title(String);

impl Title {
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FcqsError::EmptyTitle);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Title {
    type Err = FcqsError;

    fn from_str(s: &str) -> Result<Self> {
        Title::new(s)
    }
}

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// True iff `line` is an ATX heading line as fcqs understands it.
pub fn is_heading_line(line: &str) -> bool {
    if !line.starts_with(ATX_HEADING_CHAR) {
        return false;
    }
    let rest = line.trim_start_matches(ATX_HEADING_CHAR);
    rest.is_empty() || rest.starts_with(' ')
}

/// Strips leading `#` and surrounding spaces. Best effort on non-heading input.
pub fn trimmed_title(line: &str) -> &str {
    line.trim_start_matches(ATX_HEADING_CHAR).trim_matches(' ')
}

/// True iff `line` is a heading line whose carried title is not blank.
pub fn heading_carries_title(line: &str) -> bool {
    HeadingLine::parse(line).is_some_and(|h| h.title().is_some())
}

/// True iff `line` is a heading line carrying exactly `target`.
pub fn title_line_equals(line: &str, target: &Title) -> bool {
    HeadingLine::parse(line).is_some_and(|h| h.has_title(target))
}

/// A classified heading line. A blank heading (`#`) is still a heading, it just
/// carries no usable title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingLine {
    title: Option<Title>,
}

impl HeadingLine {
    pub fn parse(line: &str) -> Option<Self> {
        if !is_heading_line(line) {
            return None;
        }
        let text = trimmed_title(line);
        let title = (!text.is_empty()).then(|| Title(text.to_string()));
        Some(Self { title })
    }

    pub fn title(&self) -> Option<&Title> {
        self.title.as_ref()
    }

    pub fn into_title(self) -> Option<Title> {
        self.title
    }

    pub fn has_title(&self, target: &Title) -> bool {
        self.title.as_ref() == Some(target)
    }
}

/// True iff `line` begins with exactly three backticks.
pub fn is_fence_line(line: &str) -> bool {
    line.starts_with(CODE_FENCE) && !line[CODE_FENCE.len()..].starts_with('`')
}

/// A code fence delimiter line, opening or closing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceLine<'a> {
    line: &'a str,
}

impl<'a> FenceLine<'a> {
    pub fn parse(line: &'a str) -> Option<Self> {
        is_fence_line(line).then_some(Self { line })
    }

    /// The first word after the backticks, if any (`"```bash session"` → `bash`).
    pub fn identifier(&self) -> Option<&'a str> {
        self.line
            .trim_matches(|c| c == '`' || c == ' ')
            .split(' ')
            .next()
            .filter(|id| !id.is_empty())
    }

    pub fn has_shell_identifier(&self) -> bool {
        self.identifier()
            .is_some_and(|id| SHELL_IDENTIFIERS.contains(&id))
    }
}

/// The classification of one line, as seen by the scanners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Fence(FenceLine<'a>),
    Heading(HeadingLine),
    Text,
}

impl<'a> LineKind<'a> {
    pub fn classify(line: &'a str) -> Self {
        if let Some(fence) = FenceLine::parse(line) {
            return LineKind::Fence(fence);
        }
        match HeadingLine::parse(line) {
            Some(heading) => LineKind::Heading(heading),
            None => LineKind::Text,
        }
    }
}
