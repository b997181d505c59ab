//! Shared test utilities for the leafpress test suite.
//!
//! Provides a bare-hands [`Page`] builder for tree tests and filesystem
//! scaffolding helpers for scan/render tests. Tests write their fixture
//! sites into a `TempDir` with [`write_file`] so every test owns an
//! isolated tree it can mutate freely.

use crate::metadata::PageMeta;
use crate::page::Page;
use std::fs;
use std::path::Path;

/// A template that exercises the full render context: title, nav with
/// active highlighting, relative links, and body content.
pub const NAV_TEMPLATE: &str = "\
<html><head><title>{{ page.title }}{% if site.title %} - {{ site.title }}{% endif %}</title></head>
<body>
<nav>{% for item in pages %}<a href=\"{{ url(item.url) }}\"{% if item.active %} class=\"active\"{% endif %}>{{ item.name }}</a>{% endfor %}</nav>
<main>{{ page.content|safe }}</main>
</body></html>
";

/// Build a minimal valid page named `name`, source `<name>.md`.
pub fn page(name: &str, parent: Option<&str>) -> Page {
    let meta = PageMeta {
        template: Some("page.html".to_string()),
        parent: parent.map(String::from),
        ..PageMeta::default()
    };
    Page::new(&format!("{name}.md"), String::new(), meta, "").unwrap()
}

/// Write `body` to `root/rel`, creating intermediate directories.
pub fn write_file(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}
