//! Dropbox links: no iframe support, passed through for link-out rendering.

use crate::analysis::{ContentSource, UrlAnalysis};

/// No id extraction; a Dropbox host match is always valid and the original
/// URL is carried as the embed URL for the caller's link-out card.
pub(super) fn extract(original: &str) -> UrlAnalysis {
    UrlAnalysis {
        embed_url: Some(original.to_string()),
        ..UrlAnalysis::valid(ContentSource::Dropbox, original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_valid_pass_through() {
        let url = "https://www.dropbox.com/s/abc123/report.pdf?dl=0";
        let a = extract(url);
        assert_eq!(a.source, ContentSource::Dropbox);
        assert!(a.is_valid);
        assert_eq!(a.embed_url.as_deref(), Some(url));
        assert!(a.resource_id.is_none());
    }
}
