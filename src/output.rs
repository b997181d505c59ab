//! CLI output formatting.
//!
//! Output is information-centric, not file-centric: the primary display for
//! every page is its title and positional index, with the source path as
//! secondary context on an indented `Source:` line. Each stage has a
//! `format_*` function (returns `Vec<String>`) for testability and a
//! `print_*` wrapper that writes to stdout. Format functions are pure — no
//! I/O, no side effects.
//!
//! ## Scan
//!
//! ```text
//! Pages
//! 001 Home (2 subpages)
//!     Source: index.md
//!     001 Guide
//!         Source: en/guide.md
//!     002 About
//!         Source: about.md
//!
//! Unreachable
//! 001 lost
//!     Source: lost.md
//!     Parent: nonexistent
//!
//! 4 pages, 1 root
//! ```
//!
//! ## Render
//!
//! ```text
//! 001 Home → index.html
//! 002 Guide → en/guide.html
//!
//! Rendered 2 pages
//! ```

use crate::scan::Site;
use crate::tree;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a page header: positional index + title, with subpage count for
/// branch nodes.
fn entity_header(index: usize, title: &str, children: usize) -> String {
    if children > 0 {
        format!("{} {} ({} subpages)", format_index(index), title, children)
    } else {
        format!("{} {}", format_index(index), title)
    }
}

/// Format the scanned page forest, unreachable pages, and totals.
pub fn format_scan_output(site: &Site) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    for (pos, &root) in site.roots.iter().enumerate() {
        format_subtree(site, root, pos + 1, 0, &mut Vec::new(), &mut lines);
    }

    let orphans = tree::orphans(&site.pages);
    if !orphans.is_empty() {
        lines.push(String::new());
        lines.push("Unreachable".to_string());
        for (pos, &index) in orphans.iter().enumerate() {
            let page = &site.pages[index];
            lines.push(entity_header(pos + 1, &page.title, 0));
            lines.push(format!("{}Source: {}", indent(1), page.source_path));
            lines.push(format!(
                "{}Parent: {}",
                indent(1),
                page.parent.as_deref().unwrap_or_default()
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "{} pages, {} {}",
        site.pages.len(),
        site.roots.len(),
        if site.roots.len() == 1 { "root" } else { "roots" }
    ));
    lines
}

fn format_subtree(
    site: &Site,
    index: usize,
    pos: usize,
    depth: usize,
    path: &mut Vec<usize>,
    lines: &mut Vec<String>,
) {
    let page = &site.pages[index];
    lines.push(format!(
        "{}{}",
        indent(depth),
        entity_header(pos, &page.title, page.children.len())
    ));
    lines.push(format!("{}Source: {}", indent(depth + 1), page.source_path));

    path.push(index);
    let children: Vec<usize> = page
        .children
        .iter()
        .copied()
        .filter(|child| !path.contains(child))
        .collect();
    for (child_pos, child) in children.into_iter().enumerate() {
        format_subtree(site, child, child_pos + 1, depth + 1, path, lines);
    }
    path.pop();
}

/// Format the render stage summary: one line per written page.
pub fn format_render_output(site: &Site) -> Vec<String> {
    let mut lines: Vec<String> = site
        .pages
        .iter()
        .enumerate()
        .map(|(pos, page)| {
            format!("{} {} → {}", format_index(pos + 1), page.title, page.output_path)
        })
        .collect();
    lines.push(String::new());
    lines.push(format!(
        "Rendered {} {}",
        site.pages.len(),
        if site.pages.len() == 1 { "page" } else { "pages" }
    ));
    lines
}

pub fn print_scan_output(site: &Site) {
    for line in format_scan_output(site) {
        println!("{line}");
    }
}

pub fn print_render_output(site: &Site) {
    for line in format_render_output(site) {
        println!("{line}");
    }
}
