//! Typed failures for the classification pipeline.

use thiserror::Error;

/// Why an input failed to classify.
///
/// `analyze` folds these into `UrlAnalysis::error` text; callers branch on
/// the result record, never on `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzeError {
    /// Input was empty or whitespace only.
    #[error("Invalid URL provided")]
    MissingInput,
    /// Input is not a parseable URL.
    #[error("Invalid URL format")]
    MalformedUrl,
    /// Host matched a known provider but no usable resource id was found.
    #[error("Could not extract {0}")]
    UnresolvedResourceId(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_caller_facing_text() {
        assert_eq!(AnalyzeError::MissingInput.to_string(), "Invalid URL provided");
        assert_eq!(AnalyzeError::MalformedUrl.to_string(), "Invalid URL format");
        assert_eq!(
            AnalyzeError::UnresolvedResourceId("YouTube video ID").to_string(),
            "Could not extract YouTube video ID"
        );
    }
}
