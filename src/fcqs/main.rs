//! # fcqs binary
//!
//! Thin on purpose: everything user-facing lives in `cli/`, everything else in the
//! library. This file only runs the CLI and turns an error into a message and exit
//! code 1.

mod cli;

use console::Style;

fn main() {
    if let Err(e) = cli::run() {
        let label = Style::new().red().bold().for_stderr();
        eprintln!("{} {}", label.apply_to("Error:"), e);
        std::process::exit(1);
    }
}
