//! The in-memory representation of one source document.
//!
//! A [`Page`] is created once per source file and never recreated. Identity
//! fields (`output_path`, `url`, `name`) are pure functions of the source
//! path and site configuration; display fields fall back along the chain
//! `title_short` → `title` → `name`.
//!
//! Construction is where the two fatal metadata errors surface: a missing
//! `template` key and a non-integer `sort` value both abort the whole build.

use crate::metadata::PageMeta;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("{0}: missing required 'template' key")]
    MissingTemplate(String),
    #[error("{path}: 'sort' must be an integer, got '{value}'")]
    InvalidSort { path: String, value: String },
}

/// Extension given to every rendered output file.
const OUTPUT_EXT: &str = "html";

/// One source document plus its resolved identity.
#[derive(Debug, Clone)]
pub struct Page {
    /// Origin file, relative to the content root, slash-separated.
    pub source_path: String,
    /// `source_path` with its extension replaced by `html`.
    pub output_path: String,
    /// Canonical site-rooted URL: `base_url` + `/` + `output_path`.
    pub url: String,
    /// Base filename of `source_path`, extension stripped. Other documents
    /// reference this as their `parent`.
    pub name: String,
    pub title: String,
    pub title_short: String,
    /// Rendered body markup, opaque to the core.
    pub content: String,
    pub template: String,
    /// `None` means this document is a root.
    pub parent: Option<String>,
    /// Exposed to templates as a sibling sort key; the core never orders by it.
    pub sort: i64,
    pub in_nav: bool,
    /// Unrecognized front-matter, lower-cased keys, visible to templates.
    pub extra: BTreeMap<String, String>,
    /// Indices into the flat registry. Populated only by [`crate::tree::build`];
    /// empty for leaf documents.
    pub children: Vec<usize>,
}

impl Page {
    /// Construct a page from a decoded source file.
    ///
    /// `source_path` must already be relative and slash-separated;
    /// `base_url` must have no trailing slash (the config loader normalizes).
    pub fn new(
        source_path: &str,
        content: String,
        meta: PageMeta,
        base_url: &str,
    ) -> Result<Page, PageError> {
        let template = meta
            .template
            .filter(|t| !t.is_empty())
            .ok_or_else(|| PageError::MissingTemplate(source_path.to_string()))?;

        let sort = match meta.sort {
            None => 1,
            Some(raw) => raw.parse::<i64>().map_err(|_| PageError::InvalidSort {
                path: source_path.to_string(),
                value: raw.clone(),
            })?,
        };

        let name = stem(source_path).to_string();
        let output_path = output_path(source_path);
        let url = format!("{base_url}/{output_path}");

        let title = meta.title.unwrap_or_else(|| name.clone());
        let title_short = meta.title_short.unwrap_or_else(|| title.clone());

        Ok(Page {
            source_path: source_path.to_string(),
            output_path,
            url,
            name,
            title,
            title_short,
            content,
            template,
            parent: meta.parent.filter(|p| !p.is_empty()),
            sort,
            in_nav: meta.in_nav.unwrap_or(true),
            extra: meta.extra,
            children: Vec::new(),
        })
    }
}

/// The filename component of a slash-separated relative path.
fn filename(path: &str) -> &str {
    path.rsplit_once('/').map(|(_, f)| f).unwrap_or(path)
}

/// Filename with its (last) extension stripped.
fn stem(path: &str) -> &str {
    let file = filename(path);
    match file.rsplit_once('.') {
        Some((s, _)) if !s.is_empty() => s,
        _ => file,
    }
}

/// Replace the source extension with [`OUTPUT_EXT`]; append it when the
/// file has none.
fn output_path(path: &str) -> String {
    let file = filename(path);
    let dir_len = path.len() - file.len();
    format!("{}{}.{}", &path[..dir_len], stem(path), OUTPUT_EXT)
}
