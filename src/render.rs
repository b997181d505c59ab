//! Rendering: template invocation and output writes.
//!
//! The driver walks the flat registry and renders every page through its
//! named template, loaded from the templates root by a
//! [`minijinja::path_loader`]. Output lands under the output root at each
//! page's `output_path`, mirroring the content tree's relative structure;
//! intermediate directories are created on demand. Any template or write
//! failure aborts the rest of the build — previously written files stay on
//! disk.
//!
//! ## Template context
//!
//! Each render call gets a freshly built context — nothing is shared or
//! rebound between pages:
//!
//! - `page` — the current document, every field, `children` resolved to
//!   nested views, body HTML in `page.content` (use the `safe` filter).
//! - `pages` — the root forest. Every view carries an `active` flag: true
//!   on the current page and on each node whose subtree contains it, for
//!   navigation highlighting.
//! - `site` — the site configuration (`site.title`, `site.base_url`).
//! - `url(target)` — relative URL from the current page to `target`, where
//!   `target` is a canonical URL such as another view's `.url`.
//!
//! ## Static assets
//!
//! `templates/static/`, when present, replaces `output/static/` wholesale
//! before any page is written.

use crate::page::Page;
use crate::scan::Site;
use crate::{tree, urls};
use minijinja::value::Value;
use minijinja::{Environment, context, path_loader};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Name of the asset directory under the templates root, mirrored into the
/// output root.
const STATIC_DIR: &str = "static";

/// Render every page of `site` into `output_dir`.
pub fn render_site(
    site: &Site,
    templates_dir: &Path,
    output_dir: &Path,
    copy_static: bool,
) -> Result<(), RenderError> {
    let mut env = Environment::new();
    env.set_loader(path_loader(templates_dir));

    fs::create_dir_all(output_dir)?;
    if copy_static {
        replace_static(templates_dir, output_dir)?;
    }

    for index in 0..site.pages.len() {
        let page = &site.pages[index];
        let template = env.get_template(&page.template)?;
        let html = template.render(page_context(site, index))?;

        let out_path = output_dir.join(&page.output_path);
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&out_path, html)?;
    }
    Ok(())
}

/// Template-visible view of one document.
#[derive(Serialize)]
struct DocView<'a> {
    name: &'a str,
    title: &'a str,
    title_short: &'a str,
    url: &'a str,
    source_path: &'a str,
    output_path: &'a str,
    template: &'a str,
    parent: Option<&'a str>,
    sort: i64,
    in_nav: bool,
    /// True on the current page and on every node whose subtree holds it.
    active: bool,
    /// Body HTML; present only on the current page's own view.
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<&'a str>,
    extra: &'a BTreeMap<String, String>,
    children: Vec<DocView<'a>>,
}

/// Build the context for rendering one page.
fn page_context(site: &Site, index: usize) -> Value {
    let mut path = Vec::new();
    let page_view = doc_view(&site.pages, index, index, true, &mut path);
    let nav: Vec<DocView> = site
        .roots
        .iter()
        .map(|&root| doc_view(&site.pages, root, index, false, &mut path))
        .collect();

    let from = site.pages[index].url.clone();
    context! {
        page => page_view,
        pages => nav,
        site => &site.config,
        url => Value::from_function(move |to: String| Value::from_safe_string(urls::relative_url(&from, &to))),
    }
}

/// Recursively materialize a view. `path` holds the ancestor indices of the
/// current descent; a child already on it is skipped rather than recursed
/// into, so self-referential pages terminate.
fn doc_view<'a>(
    pages: &'a [Page],
    index: usize,
    current: usize,
    with_content: bool,
    path: &mut Vec<usize>,
) -> DocView<'a> {
    let page = &pages[index];

    path.push(index);
    let child_indices: Vec<usize> = page
        .children
        .iter()
        .copied()
        .filter(|child| !path.contains(child))
        .collect();
    let children = child_indices
        .into_iter()
        .map(|child| doc_view(pages, child, current, false, path))
        .collect();
    path.pop();

    DocView {
        name: &page.name,
        title: &page.title,
        title_short: &page.title_short,
        url: &page.url,
        source_path: &page.source_path,
        output_path: &page.output_path,
        template: &page.template,
        parent: page.parent.as_deref(),
        sort: page.sort,
        in_nav: page.in_nav,
        active: index == current || tree::within(pages, current, &page.children),
        content: with_content.then_some(page.content.as_str()),
        extra: &page.extra,
        children,
    }
}

/// Replace `output/static/` with `templates/static/`, wholesale.
fn replace_static(templates_dir: &Path, output_dir: &Path) -> Result<(), RenderError> {
    let src = templates_dir.join(STATIC_DIR);
    if !src.is_dir() {
        return Ok(());
    }
    let dst = output_dir.join(STATIC_DIR);
    if dst.exists() {
        fs::remove_dir_all(&dst)?;
    }
    fs::create_dir_all(&dst)?;
    copy_dir_recursive(&src, &dst)?;
    Ok(())
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan;
    use crate::test_helpers::{NAV_TEMPLATE, write_file};
    use tempfile::TempDir;

    fn site_dirs() -> (TempDir, TempDir, TempDir) {
        (
            TempDir::new().unwrap(),
            TempDir::new().unwrap(),
            TempDir::new().unwrap(),
        )
    }

    #[test]
    fn renders_every_page_to_its_output_path() {
        let (content, templates, output) = site_dirs();
        write_file(content.path(), "index.md", "template: page.html\n\n# Home\n");
        write_file(
            content.path(),
            "en/guide.md",
            "template: page.html\nparent: index\n\n# Guide\n",
        );
        write_file(templates.path(), "page.html", NAV_TEMPLATE);

        let site = scan::scan(content.path()).unwrap();
        render_site(&site, templates.path(), output.path(), true).unwrap();

        let home = fs::read_to_string(output.path().join("index.html")).unwrap();
        let guide = fs::read_to_string(output.path().join("en/guide.html")).unwrap();
        assert!(home.contains("<h1>Home</h1>"));
        assert!(guide.contains("<h1>Guide</h1>"));
    }

    #[test]
    fn url_function_produces_relative_links() {
        let (content, templates, output) = site_dirs();
        write_file(content.path(), "index.md", "template: page.html\n\nx\n");
        write_file(
            content.path(),
            "en/guide.md",
            "template: page.html\nparent: index\n\nx\n",
        );
        write_file(templates.path(), "page.html", NAV_TEMPLATE);

        let site = scan::scan(content.path()).unwrap();
        render_site(&site, templates.path(), output.path(), true).unwrap();

        // From en/guide.html the root index is one directory up.
        let guide = fs::read_to_string(output.path().join("en/guide.html")).unwrap();
        assert!(guide.contains("href=\"../index.html\""));
        // From index.html it is the bare filename.
        let home = fs::read_to_string(output.path().join("index.html")).unwrap();
        assert!(home.contains("href=\"index.html\""));
    }

    #[test]
    fn active_marks_the_trail_to_the_current_page() {
        let (content, templates, output) = site_dirs();
        write_file(content.path(), "index.md", "template: page.html\n\nx\n");
        write_file(content.path(), "other.md", "template: page.html\n\nx\n");
        write_file(
            content.path(),
            "guide.md",
            "template: page.html\nparent: index\n\nx\n",
        );
        write_file(templates.path(), "page.html", NAV_TEMPLATE);

        let site = scan::scan(content.path()).unwrap();
        render_site(&site, templates.path(), output.path(), true).unwrap();

        let guide = fs::read_to_string(output.path().join("guide.html")).unwrap();
        // "index" is on the active trail while rendering its child, "other" is not.
        assert!(guide.contains("class=\"active\">index<"));
        assert!(!guide.contains("class=\"active\">other<"));
    }

    #[test]
    fn missing_template_is_fatal() {
        let (content, templates, output) = site_dirs();
        write_file(content.path(), "index.md", "template: nope.html\n\nx\n");

        let site = scan::scan(content.path()).unwrap();
        let result = render_site(&site, templates.path(), output.path(), true);
        assert!(matches!(result, Err(RenderError::Template(_))));
    }

    #[test]
    fn static_dir_replaces_destination_wholesale() {
        let (content, templates, output) = site_dirs();
        write_file(content.path(), "index.md", "template: page.html\n\nx\n");
        write_file(templates.path(), "page.html", NAV_TEMPLATE);
        write_file(templates.path(), "static/style.css", "body {}\n");
        write_file(output.path(), "static/stale.css", "gone\n");

        let site = scan::scan(content.path()).unwrap();
        render_site(&site, templates.path(), output.path(), true).unwrap();

        assert!(output.path().join("static/style.css").exists());
        assert!(!output.path().join("static/stale.css").exists());
    }

    #[test]
    fn static_copy_can_be_suppressed() {
        let (content, templates, output) = site_dirs();
        write_file(content.path(), "index.md", "template: page.html\n\nx\n");
        write_file(templates.path(), "page.html", NAV_TEMPLATE);
        write_file(templates.path(), "static/style.css", "body {}\n");

        let site = scan::scan(content.path()).unwrap();
        render_site(&site, templates.path(), output.path(), false).unwrap();

        assert!(!output.path().join("static/style.css").exists());
    }

    #[test]
    fn extra_metadata_reaches_templates() {
        let (content, templates, output) = site_dirs();
        write_file(
            content.path(),
            "index.md",
            "template: page.html\nauthor: jo\n\nx\n",
        );
        write_file(
            templates.path(),
            "page.html",
            "{{ page.extra.author }}\n",
        );

        let site = scan::scan(content.path()).unwrap();
        render_site(&site, templates.path(), output.path(), true).unwrap();

        let html = fs::read_to_string(output.path().join("index.html")).unwrap();
        assert!(html.contains("jo"));
    }

    #[test]
    fn self_referential_page_still_renders() {
        let (content, templates, output) = site_dirs();
        write_file(
            content.path(),
            "loop.md",
            "template: page.html\nparent: loop\n\n# Loop\n",
        );
        write_file(templates.path(), "page.html", NAV_TEMPLATE);

        let site = scan::scan(content.path()).unwrap();
        render_site(&site, templates.path(), output.path(), true).unwrap();

        let html = fs::read_to_string(output.path().join("loop.html")).unwrap();
        assert!(html.contains("<h1>Loop</h1>"));
    }
}
