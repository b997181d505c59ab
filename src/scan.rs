//! Content scanning: filesystem walk, decoding, and tree assembly.
//!
//! Walks the content root recursively and turns every regular file into a
//! [`Page`]. There is no extension filtering: anything that reads as UTF-8
//! text is decoded as markdown-with-front-matter. Files that cannot be read
//! as text are warned about and skipped — they join neither the registry
//! nor the output. Hidden entries and `config.toml` are not content.
//!
//! The walk is sorted by file name, so scan order — and with it child order
//! and root order in the assembled forest — is deterministic across
//! platforms and filesystems.
//!
//! ## Output
//!
//! Produces a [`Site`]:
//! - the flat registry of every page, for iteration during rendering
//! - the root indices of the assembled forest, for navigation
//! - the site configuration loaded from `config.toml`

use crate::config::{self, SiteConfig};
use crate::page::{Page, PageError};
use crate::{metadata, reader, tree};
use std::fs;
use std::path::Path;
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Page(#[from] PageError),
}

/// Everything one build knows about the site.
#[derive(Debug)]
pub struct Site {
    /// Indices of forest roots, in scan order.
    pub roots: Vec<usize>,
    /// The flat registry: every page, in scan order, `children` resolved.
    pub pages: Vec<Page>,
    pub config: SiteConfig,
}

/// Scan the content root into a [`Site`].
pub fn scan(root: &Path) -> Result<Site, ScanError> {
    let config = config::load_config(root)?;

    let mut pages = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() || entry.file_name() == "config.toml" {
            continue;
        }

        let source_path = relative_source_path(entry.path(), root);
        let text = match fs::read_to_string(entry.path()) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("warning: skipping {source_path}: {err}");
                continue;
            }
        };

        let (content, raw) = reader::decode(&text);
        let meta = metadata::extract(&raw);
        pages.push(Page::new(&source_path, content, meta, &config.base_url)?);
    }

    let (roots, pages) = tree::build(pages);
    for &index in &tree::orphans(&pages) {
        let page = &pages[index];
        eprintln!(
            "warning: {}: parent '{}' matches no document; page is unreachable from navigation",
            page.source_path,
            page.parent.as_deref().unwrap_or_default(),
        );
    }

    Ok(Site {
        roots,
        pages,
        config,
    })
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Path relative to the content root, slash-separated on every platform.
fn relative_source_path(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
