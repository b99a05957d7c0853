//! OneDrive links: embed URL derived by rewriting the share-link action.

use crate::analysis::{ContentSource, UrlAnalysis};

/// No id extraction; the embed URL is the original with the first `/view`
/// replaced by `/embed`. When `/view` is absent the URL passes through
/// unchanged; that is the established observable behavior, so no validation
/// is applied here.
pub(super) fn extract(original: &str) -> UrlAnalysis {
    UrlAnalysis {
        embed_url: Some(original.replacen("/view", "/embed", 1)),
        ..UrlAnalysis::valid(ContentSource::OneDrive, original)
    }
}
