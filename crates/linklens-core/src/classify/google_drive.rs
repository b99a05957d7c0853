//! Google Drive file id extraction and derived URL set.
//!
//! Drive URLs come in several shapes (`/file/d/{id}/view`, `/open?id={id}`,
//! folder links, bare share links). The pattern list below is tried in a
//! fixed order that covers them; a whole-URL scan is the last resort. Do not
//! collapse the list into one pattern — the shapes drift and the ordered
//! attempts are what keeps them all covered.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::error::AnalyzeError;
use crate::analysis::{ContentSource, UrlAnalysis};

/// Ordered id patterns, most specific URL shape first.
static ID_ATTEMPTS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"/file/d/([A-Za-z0-9_-]+)").unwrap(),
        Regex::new(r"/file/d/([A-Za-z0-9_-]+)/view").unwrap(),
        Regex::new(r"/file/d/([A-Za-z0-9_-]+)/edit").unwrap(),
        Regex::new(r"/open\?id=([A-Za-z0-9_-]+)").unwrap(),
        Regex::new(r"/drive/folders/([A-Za-z0-9_-]+)").unwrap(),
    ]
});

/// Fallback scan over the full URL when no shaped pattern matched.
static ID_FALLBACKS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"/d/([A-Za-z0-9_-]+)").unwrap(),
        Regex::new(r"id=([A-Za-z0-9_-]+)").unwrap(),
    ]
});

/// Extracts the file id and derives preview, download, and view URLs.
pub(super) fn extract(url: &Url, original: &str) -> Result<UrlAnalysis, AnalyzeError> {
    let id = query_id(url)
        .or_else(|| first_capture(&ID_ATTEMPTS, original))
        .or_else(|| first_capture(&ID_FALLBACKS, original))
        .ok_or(AnalyzeError::UnresolvedResourceId("Google Drive file ID"))?;

    Ok(UrlAnalysis {
        embed_url: Some(format!("https://drive.google.com/file/d/{id}/preview")),
        download_url: Some(format!(
            "https://drive.google.com/uc?export=download&id={id}"
        )),
        view_url: Some(format!("https://drive.google.com/file/d/{id}/view")),
        resource_id: Some(id),
        ..UrlAnalysis::valid(ContentSource::GoogleDrive, original)
    })
}

fn query_id(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == "id")
        .map(|(_, v)| v.into_owned())
        .filter(|s| !s.is_empty())
}

fn first_capture(patterns: &[Regex], input: &str) -> Option<String> {
    patterns
        .iter()
        .find_map(|re| re.captures(input))
        .map(|c| c[1].to_string())
}
