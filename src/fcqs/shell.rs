use crate::error::Result;
use std::io::Write;

/// Bash key bindings around `fcqs` and `fzf`, loaded with `eval "$(fcqs --bash)"`.
pub const BASH_INTEGRATION: &str = include_str!("shell.bash");

pub fn write_bash_script<W: Write>(out: &mut W) -> Result<()> {
    out.write_all(BASH_INTEGRATION.as_bytes())?;
    Ok(())
}
