//! Relative-URL resolution between rendered documents.
//!
//! Templates link between documents by canonical URL; the output on disk is
//! plain files, so every href must be rewritten relative to the page it
//! appears in. Only the path component participates — scheme and host are
//! stripped before comparison.

/// Relative path that navigates from the document at `from` to the document
/// at `to`, suitable for an `href` inside the rendered output of `from`.
///
/// `from` is a file, not a directory: resolution happens against its
/// containing directory, so `relative_url(x, x)` is the bare filename of
/// `x`, two documents in one directory resolve without `../`, and each
/// directory of descent below the target's level costs exactly one `../`.
pub fn relative_url(from: &str, to: &str) -> String {
    let from_parts: Vec<&str> = path_of(from).split('/').filter(|s| !s.is_empty()).collect();
    let to_parts: Vec<&str> = path_of(to).split('/').filter(|s| !s.is_empty()).collect();

    // The source file itself is never a common ancestor.
    let from_dir = &from_parts[..from_parts.len().saturating_sub(1)];
    let common = from_dir
        .iter()
        .zip(to_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<&str> = Vec::new();
    for _ in common..from_dir.len() {
        segments.push("..");
    }
    segments.extend(&to_parts[common..]);
    segments.join("/")
}

/// Strip scheme and host, keeping the path component.
fn path_of(url: &str) -> &str {
    match url.find("://") {
        Some(scheme_end) => {
            let rest = &url[scheme_end + 3..];
            match rest.find('/') {
                Some(path_start) => &rest[path_start..],
                None => "/",
            }
        }
        None => url,
    }
}
