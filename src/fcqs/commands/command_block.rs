use super::contents;
use crate::error::Result;
use crate::model::{LineKind, Title};
use std::io::{self, Write};
use tracing::debug;

const PROMPT: &str = "$";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    Outside,
    OtherFence,
    Shell,
}

/// Writes the first shell block of the sections titled `title`, without the fences
/// and with a leading `$ ` prompt removed from every line.
pub fn run<I, W>(lines: I, out: &mut W, title: &Title) -> Result<()>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    let body = contents::collect(lines, title)?;
    let mut state = BlockState::Outside;

    for line in body.lines() {
        let kind = LineKind::classify(line);
        state = match (state, kind) {
            (BlockState::Outside, LineKind::Fence(fence)) if fence.has_shell_identifier() => {
                BlockState::Shell
            }
            (BlockState::Outside, LineKind::Fence(_)) => BlockState::OtherFence,
            (BlockState::OtherFence, LineKind::Fence(_)) => BlockState::Outside,
            (BlockState::Shell, LineKind::Fence(_)) => {
                debug!(%title, "extracted command block");
                return Ok(());
            }
            (BlockState::Shell, _) => {
                writeln!(out, "{}", strip_prompt(line))?;
                BlockState::Shell
            }
            (state, _) => state,
        };
    }

    if state == BlockState::Outside {
        debug!(%title, "no shell block in note");
    }
    Ok(())
}

/// `$ date` → `date`, `$` → ``; anything else is returned as is.
fn strip_prompt(line: &str) -> &str {
    match line.strip_prefix(PROMPT) {
        Some("") => "",
        Some(rest) => rest.strip_prefix(' ').unwrap_or(line),
        None => line,
    }
}
