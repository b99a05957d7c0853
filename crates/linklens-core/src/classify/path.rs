//! Path segment extraction helpers.

use url::Url;

/// First non-empty path segment, e.g. the id in `https://youtu.be/{id}`.
///
/// Returns `None` when the path is empty or root.
pub(super) fn first_path_segment(url: &Url) -> Option<String> {
    url.path()
        .split('/')
        .find(|s| !s.is_empty())
        .map(str::to_string)
}
