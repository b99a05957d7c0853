//! Vimeo video id extraction.

use url::Url;

use super::error::AnalyzeError;
use super::path::first_path_segment;
use crate::analysis::{ContentSource, UrlAnalysis};

/// Extracts the numeric video id from `vimeo.com/{id}`.
///
/// Vimeo ids are all digits; anything else in the first path segment (channel
/// names, showcase paths) is rejected.
pub(super) fn extract(url: &Url, original: &str) -> Result<UrlAnalysis, AnalyzeError> {
    let id = first_path_segment(url)
        .filter(|s| is_all_digits(s))
        .ok_or(AnalyzeError::UnresolvedResourceId("Vimeo video ID"))?;

    Ok(UrlAnalysis {
        embed_url: Some(format!("https://player.vimeo.com/video/{id}")),
        resource_id: Some(id),
        ..UrlAnalysis::valid(ContentSource::Vimeo, original)
    })
}

fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
