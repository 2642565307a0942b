//! Canonical `og:url` construction.

use regex::Regex;
use std::sync::LazyLock;

/// Either an http(s) scheme prefix (kept) or a run of slashes (collapsed).
static SLASH_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(https?://)|(/)+").unwrap());

/// Join `application_url` (default `/`) and `current_url`, collapse repeated
/// slashes outside the `http://`/`https://` prefix and drop a trailing slash.
///
/// Returns `/` when nothing is left.
///
/// # Examples
/// ```
/// use headsync::meta::canonical_url;
///
/// assert_eq!(canonical_url(Some("https://x.com/"), "/path"), "https://x.com/path");
/// assert_eq!(canonical_url(None, "/"), "/");
/// ```
pub fn canonical_url(application_url: Option<&str>, current_url: &str) -> String {
    let base = application_url.filter(|url| !url.is_empty()).unwrap_or("/");
    let joined = format!("{base}{current_url}");
    let collapsed = SLASH_RUNS.replace_all(&joined, "${1}${2}");
    let url = collapsed.strip_suffix('/').unwrap_or(&collapsed);

    if url.is_empty() {
        "/".to_owned()
    } else {
        url.to_owned()
    }
}
