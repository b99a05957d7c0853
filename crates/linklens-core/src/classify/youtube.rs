//! YouTube video id extraction and embed/thumbnail derivation.

use url::Url;

use super::error::AnalyzeError;
use super::path::first_path_segment;
use crate::analysis::{ContentSource, UrlAnalysis};

/// Extracts the video id from either URL shape and derives the embed and
/// thumbnail URLs.
///
/// `youtu.be/{id}` carries the id in the path; `youtube.com/watch?v={id}`
/// carries it in the `v` query parameter. Both shapes with the same id yield
/// the same derived URLs.
pub(super) fn extract(url: &Url, original: &str) -> Result<UrlAnalysis, AnalyzeError> {
    let host = url.host_str().unwrap_or("");

    let id = if host.contains("youtu.be") {
        first_path_segment(url)
    } else {
        url.query_pairs()
            .find(|(k, _)| k == "v")
            .map(|(_, v)| v.into_owned())
    };

    let id = id
        .filter(|s| !s.is_empty())
        .ok_or(AnalyzeError::UnresolvedResourceId("YouTube video ID"))?;

    Ok(UrlAnalysis {
        embed_url: Some(format!("https://www.youtube.com/embed/{id}")),
        thumbnail_url: Some(format!("https://img.youtube.com/vi/{id}/maxresdefault.jpg")),
        resource_id: Some(id),
        ..UrlAnalysis::valid(ContentSource::Youtube, original)
    })
}
