//! # Leafpress
//!
//! A minimal static site generator for hierarchical markdown content.
//! Markdown files carry `key: value` front-matter naming a template and,
//! optionally, a parent page; parent references assemble the flat file set
//! into a document tree, and every page is rendered through its template
//! with the tree as navigation context.
//!
//! # Architecture: Scan, Assemble, Render
//!
//! A build is one synchronous pass through three steps:
//!
//! ```text
//! 1. Scan      content/   →  flat page registry     (walk + decode + metadata)
//! 2. Assemble  registry   →  forest of roots        (parent references → children)
//! 3. Render    registry   →  output/                (one HTML file per page)
//! ```
//!
//! The flat registry owns every page and drives rendering — every page is
//! written, whether or not it is reachable from the forest. The forest is a
//! set of index lists over the same registry and exists for navigation:
//! templates receive the roots with nested children and an `active` flag
//! marking the trail to the current page.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | walks the content root, decodes each file, assembles the [`scan::Site`] |
//! | [`reader`] | front-matter splitting and markdown → HTML conversion |
//! | [`metadata`] | normalization table for recognized front-matter keys |
//! | [`page`] | the page record: identity derivation, defaulting, fatal validation |
//! | [`tree`] | forest assembly from parent references, subtree membership, orphan listing |
//! | [`urls`] | relative-URL computation between rendered pages |
//! | [`render`] | template environment, per-page context, output writes, static copy |
//! | [`config`] | `config.toml` loading and validation |
//! | [`output`] | CLI output formatting — tree-based display of build results |
//!
//! # Design Decisions
//!
//! ## Relative links everywhere
//!
//! Rendered pages never reference each other by absolute URL. Templates call
//! `url(target)` and get a path relative to the page being rendered, so the
//! output tree works from any mount point — a web root, a subdirectory, or
//! `file://` straight off disk. The canonical `base_url` from `config.toml`
//! only shapes the URLs templates see, not what lands in hrefs.
//!
//! ## Declarative hierarchy over directory hierarchy
//!
//! The document tree comes from `parent:` front-matter, not from where files
//! sit on disk. Authors can reorganize directories without touching
//! navigation, and one directory can feed several subtrees. The directory
//! layout still matters for output paths: `en/guide.md` renders to
//! `en/guide.html`.
//!
//! ## Runtime templates over compile-time templates
//!
//! Templates are [minijinja](https://docs.rs/minijinja) files loaded from a
//! directory at build time. Site authors edit templates without recompiling
//! the generator, and one binary serves any number of differently-themed
//! sites. Template errors surface at build time, per page, and abort the
//! build.
//!
//! ## Sort keys are exposed, not applied
//!
//! `sort:` is parsed, validated, and handed to templates — and the core
//! never orders children by it. Child order is scan order (sorted file
//! names, deterministic). Templates that want sorted navigation use
//! minijinja's `sort` filter; templates that want authored order get it
//! for free.

pub mod config;
pub mod metadata;
pub mod output;
pub mod page;
pub mod reader;
pub mod render;
pub mod scan;
pub mod tree;
pub mod urls;

#[cfg(test)]
pub(crate) mod test_helpers;
