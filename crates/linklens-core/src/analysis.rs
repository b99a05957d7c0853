//! Classification result types.
//!
//! A [`UrlAnalysis`] is built fresh on every call, carries no resources, and
//! is a pure function of the input string.

use serde::Serialize;

/// Where a content URL is hosted, as decided by hostname matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Youtube,
    Vimeo,
    GoogleDrive,
    Dropbox,
    OneDrive,
    /// Any host outside the recognized providers; rendered as a link-out.
    External,
    /// Input that could not be classified (blank, malformed, or missing id).
    Unknown,
}

impl ContentSource {
    /// Human-readable label for UI display. Total over all variants.
    pub fn display_name(self) -> &'static str {
        match self {
            ContentSource::Youtube => "YouTube Video",
            ContentSource::Vimeo => "Vimeo Video",
            ContentSource::GoogleDrive => "Google Drive Document",
            ContentSource::Dropbox => "Dropbox File",
            ContentSource::OneDrive => "OneDrive File",
            ContentSource::External => "External Link",
            ContentSource::Unknown => "Unknown",
        }
    }

    /// Whether this source can be rendered inside an iframe.
    ///
    /// Declarative only: the caller picks iframe vs link-out based on this,
    /// nothing here attempts the embed.
    pub fn supports_embedding(self) -> bool {
        matches!(
            self,
            ContentSource::Youtube
                | ContentSource::Vimeo
                | ContentSource::GoogleDrive
                | ContentSource::OneDrive
        )
    }
}

/// Result of classifying one content URL.
///
/// Invariant: `is_valid == false` iff `source == Unknown`, and then `error`
/// is set while `embed_url`/`resource_id` are absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlAnalysis {
    #[serde(rename = "type")]
    pub source: ContentSource,
    pub is_valid: bool,
    /// Input string preserved verbatim.
    pub original_url: String,
    /// URL suitable for iframe embedding, when the source supports it
    /// (or the pass-through URL for External).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    /// Provider-specific identifier (video id, file id).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    /// Direct-download URL; only derived for Google Drive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    /// Browser view URL; only derived for Google Drive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_url: Option<String>,
    /// Preview image URL; only derivable for YouTube.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Why classification failed, when `is_valid` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UrlAnalysis {
    /// Valid skeleton for `source`; extractors fill in the derived URLs.
    pub(crate) fn valid(source: ContentSource, original_url: &str) -> Self {
        Self {
            source,
            is_valid: true,
            original_url: original_url.to_string(),
            embed_url: None,
            resource_id: None,
            download_url: None,
            view_url: None,
            thumbnail_url: None,
            error: None,
        }
    }

    /// Failed classification: `Unknown`, no derived fields, error message set.
    pub(crate) fn invalid(original_url: &str, error: String) -> Self {
        Self {
            source: ContentSource::Unknown,
            is_valid: false,
            original_url: original_url.to_string(),
            embed_url: None,
            resource_id: None,
            download_url: None,
            view_url: None,
            thumbnail_url: None,
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_is_total() {
        assert_eq!(ContentSource::Youtube.display_name(), "YouTube Video");
        assert_eq!(ContentSource::Vimeo.display_name(), "Vimeo Video");
        assert_eq!(
            ContentSource::GoogleDrive.display_name(),
            "Google Drive Document"
        );
        assert_eq!(ContentSource::Dropbox.display_name(), "Dropbox File");
        assert_eq!(ContentSource::OneDrive.display_name(), "OneDrive File");
        assert_eq!(ContentSource::External.display_name(), "External Link");
        assert_eq!(ContentSource::Unknown.display_name(), "Unknown");
    }

    #[test]
    fn embedding_support_flags() {
        assert!(ContentSource::Youtube.supports_embedding());
        assert!(ContentSource::Vimeo.supports_embedding());
        assert!(ContentSource::GoogleDrive.supports_embedding());
        assert!(ContentSource::OneDrive.supports_embedding());
        assert!(!ContentSource::Dropbox.supports_embedding());
        assert!(!ContentSource::External.supports_embedding());
        assert!(!ContentSource::Unknown.supports_embedding());
    }

    #[test]
    fn invalid_analysis_shape() {
        let a = UrlAnalysis::invalid("not a url", "Invalid URL format".to_string());
        assert_eq!(a.source, ContentSource::Unknown);
        assert!(!a.is_valid);
        assert_eq!(a.original_url, "not a url");
        assert!(a.embed_url.is_none());
        assert!(a.resource_id.is_none());
        assert_eq!(a.error.as_deref(), Some("Invalid URL format"));
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let a = UrlAnalysis {
            resource_id: Some("dQw4w9WgXcQ".to_string()),
            ..UrlAnalysis::valid(ContentSource::Youtube, "https://youtu.be/dQw4w9WgXcQ")
        };
        let json = serde_json::to_string(&a).unwrap();
        assert!(json.contains("\"type\":\"youtube\""));
        assert!(json.contains("\"isValid\":true"));
        assert!(json.contains("\"originalUrl\""));
        assert!(json.contains("\"resourceId\""));
        // Absent optionals are omitted entirely.
        assert!(!json.contains("downloadUrl"));
        assert!(!json.contains("error"));
    }
}
