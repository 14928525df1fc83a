//! First-URL extraction.
//!
//! Only scheme-qualified URLs count: `scheme://...` for any scheme, plus a handful of
//! schemes that never carry `//` (`mailto:`, `tel:`, ...). Bare domains such as
//! `example.com` are ignored. Trailing sentence punctuation and unbalanced closing
//! brackets are not part of the URL, so `(see http://a.example/x).` yields
//! `http://a.example/x`.

use super::contents;
use crate::error::Result;
use crate::model::Title;
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{self, Write};
use tracing::debug;

static STRICT_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)\b(?:[a-z][a-z0-9+.\-]*://[^\s<>"'`{}|\\^]+|(?:mailto|magnet|tel|sms|xmpp|urn|news|bitcoin):[^\s<>"'`{}|\\^/][^\s<>"'`{}|\\^]*)"#,
    )
    .expect("strict URL pattern is valid")
});

/// Writes the first URL of the sections titled `title`, if there is one.
pub fn run<I, W>(lines: I, out: &mut W, title: &Title) -> Result<()>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    let body = contents::collect(lines, title)?;
    match first_url(&body) {
        Some(url) => {
            debug!(%title, url, "found URL");
            writeln!(out, "{}", url)?;
        }
        None => debug!(%title, "no URL in note"),
    }
    Ok(())
}

/// The first strict URL in `text`.
pub fn first_url(text: &str) -> Option<&str> {
    STRICT_URL
        .find_iter(text)
        .map(|m| trim_url_tail(m.as_str()))
        .find(|url| !url.ends_with(':') && !url.ends_with("//"))
}

fn trim_url_tail(mut url: &str) -> &str {
    loop {
        let Some(last) = url.chars().last() else {
            return url;
        };
        let strip = match last {
            '.' | ',' | ':' | ';' | '!' | '?' => true,
            ')' => unbalanced(url, '(', ')'),
            ']' => unbalanced(url, '[', ']'),
            _ => false,
        };
        if !strip {
            return url;
        }
        url = &url[..url.len() - last.len_utf8()];
    }
}

fn unbalanced(url: &str, open: char, close: char) -> bool {
    url.matches(close).count() > url.matches(open).count()
}
