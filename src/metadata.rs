//! Front-matter normalization.
//!
//! The markup decoder hands back raw string values keyed by whatever the
//! author typed. This module applies the fixed per-key normalization table
//! before page construction:
//!
//! | key | normalization |
//! |---------------|--------------------------------------------------|
//! | `template` | trimmed |
//! | `title` | trimmed |
//! | `title_short` | trimmed |
//! | `parent` | trimmed |
//! | `sort` | trimmed (integer parsing happens in [`crate::page::Page::new`]) |
//! | `in_nav` | `true` iff the trimmed value is `"1"` or `"true"` |
//!
//! Keys are matched case-insensitively (lower-cased first). Anything not in
//! the table passes through untouched into [`PageMeta::extra`] and is visible
//! to templates as opaque extra metadata.

use std::collections::BTreeMap;

/// Normalized front-matter fields recognized by the page constructor.
///
/// `None` means the key was absent — defaulting rules live in
/// [`crate::page::Page::new`], not here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageMeta {
    pub template: Option<String>,
    pub title: Option<String>,
    pub title_short: Option<String>,
    pub parent: Option<String>,
    /// Kept as a string; `Page::new` parses it and fails the build on
    /// non-integer input.
    pub sort: Option<String>,
    pub in_nav: Option<bool>,
    /// Unrecognized keys, lower-cased, values untouched.
    pub extra: BTreeMap<String, String>,
}

/// Apply the normalization table to a raw decoded metadata mapping.
pub fn extract(raw: &BTreeMap<String, String>) -> PageMeta {
    let mut meta = PageMeta::default();
    for (key, value) in raw {
        match key.to_lowercase().as_str() {
            "template" => meta.template = Some(value.trim().to_string()),
            "title" => meta.title = Some(value.trim().to_string()),
            "title_short" => meta.title_short = Some(value.trim().to_string()),
            "parent" => meta.parent = Some(value.trim().to_string()),
            "sort" => meta.sort = Some(value.trim().to_string()),
            "in_nav" => meta.in_nav = Some(parse_flag(value)),
            other => {
                meta.extra.insert(other.to_string(), value.clone());
            }
        }
    }
    meta
}

/// `"1"` and `"true"` (case-sensitive, after trimming) are the only truthy
/// tokens. Everything else, including `"TRUE"` and `"yes"`, is false.
fn parse_flag(value: &str) -> bool {
    let v = value.trim();
    v == "1" || v == "true"
}
