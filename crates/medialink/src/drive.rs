use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

// A "file view" URL: a file path segment followed by the identifier segment.
static FILE_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/file/d/([^/?#]+)").unwrap());

/// Rewrite a file-view URL into a direct-download URL.
///
/// URLs that do not carry the `/file/d/<id>` shape pass through unchanged,
/// so callers must not assume the result differs from the input. Empty
/// input is `None`, not an error.
pub fn direct_download_url(url: &str) -> Option<Cow<'_, str>> {
    if url.is_empty() {
        return None;
    }
    match FILE_ID_PATTERN.captures(url).and_then(|caps| caps.get(1)) {
        Some(id) => Some(Cow::Owned(format!(
            "https://drive.google.com/uc?export=download&id={}",
            id.as_str()
        ))),
        None => Some(Cow::Borrowed(url)),
    }
}
