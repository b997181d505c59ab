//! Markup decoding: front-matter extraction and markdown conversion.
//!
//! Source documents carry metadata as leading `Key: value` lines:
//!
//! ```text
//! template: page.html
//! title: Installing
//! parent: guide
//!
//! # Installing
//!
//! Body markdown starts after the first blank or non-matching line.
//! ```
//!
//! The metadata block ends at the first blank line (consumed) or the first
//! line that is not a `Key: value` pair (kept as body). Keys may contain
//! ASCII letters, digits, `_` and `-`; on repeated keys the first occurrence
//! wins. Everything after the block is converted to HTML.
//!
//! Decoding is pure and total over valid UTF-8 — files that fail to read as
//! text are the scanner's problem, not this module's.

use pulldown_cmark::{Parser, html as md_html};
use std::collections::BTreeMap;

/// Decode raw document text into `(html_content, raw_metadata)`.
///
/// Keys keep their original case here; case folding and per-key
/// normalization happen in [`crate::metadata::extract`].
pub fn decode(text: &str) -> (String, BTreeMap<String, String>) {
    let (meta, body) = split_front_matter(text);
    let mut html = String::new();
    let parser = Parser::new(body);
    md_html::push_html(&mut html, parser);
    (html, meta)
}

fn split_front_matter(text: &str) -> (BTreeMap<String, String>, &str) {
    let mut meta = BTreeMap::new();
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let trimmed = line.trim_end_matches(['\n', '\r']);
        if trimmed.trim().is_empty() {
            // Blank line terminates the block and belongs to it.
            offset += line.len();
            break;
        }
        match parse_meta_line(trimmed) {
            Some((key, value)) => {
                meta.entry(key).or_insert(value);
                offset += line.len();
            }
            None => break,
        }
    }
    if meta.is_empty() {
        return (meta, text);
    }
    (meta, &text[offset..])
}

fn parse_meta_line(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty()
        || !key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return None;
    }
    Some((key.to_string(), value.trim_start().to_string()))
}
