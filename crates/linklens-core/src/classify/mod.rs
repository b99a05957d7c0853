//! Content URL classification pipeline.
//!
//! Control flows one way: raw string → parsed URL → provider match (first
//! match wins, fixed order) → derived URL set. No I/O and no shared state;
//! any network-dependent concern (HEAD checks, rendering) belongs to the
//! caller, not here.

mod dropbox;
mod error;
mod google_drive;
mod onedrive;
mod path;
mod vimeo;
mod youtube;

pub use error::AnalyzeError;

use url::Url;

use crate::analysis::{ContentSource, UrlAnalysis};

/// Recognized providers with the host substrings that select them.
///
/// The order is the match priority. Host substrings for different providers
/// do not overlap, so first-match-wins behaves like exclusive matching, but
/// the order is still fixed so classification is reproducible.
pub const PROVIDER_HOSTS: &[(ContentSource, &[&str])] = &[
    (ContentSource::Youtube, &["youtube.com", "youtu.be"]),
    (ContentSource::Vimeo, &["vimeo.com"]),
    (ContentSource::GoogleDrive, &["drive.google.com"]),
    (ContentSource::Dropbox, &["dropbox.com"]),
    (ContentSource::OneDrive, &["onedrive.live.com", "1drv.ms"]),
];

/// Classifies a content URL.
///
/// Never panics and never returns an error for bad input: failures are folded
/// into `UrlAnalysis { is_valid: false, error }` so callers can render inline
/// validation feedback by branching on the record.
pub fn analyze(input: &str) -> UrlAnalysis {
    match classify(input) {
        Ok(analysis) => analysis,
        Err(err) => UrlAnalysis::invalid(input, err.to_string()),
    }
}

fn classify(input: &str) -> Result<UrlAnalysis, AnalyzeError> {
    if input.trim().is_empty() {
        return Err(AnalyzeError::MissingInput);
    }

    let url = Url::parse(input).map_err(|_| AnalyzeError::MalformedUrl)?;
    let host = url.host_str().unwrap_or("").to_ascii_lowercase();

    match match_source(&host) {
        Some(ContentSource::Youtube) => youtube::extract(&url, input),
        Some(ContentSource::Vimeo) => vimeo::extract(&url, input),
        Some(ContentSource::GoogleDrive) => google_drive::extract(&url, input),
        Some(ContentSource::Dropbox) => Ok(dropbox::extract(input)),
        Some(ContentSource::OneDrive) => Ok(onedrive::extract(input)),
        // Arbitrary hosts render as a link-out, so they are always valid.
        _ => Ok(UrlAnalysis {
            embed_url: Some(input.to_string()),
            ..UrlAnalysis::valid(ContentSource::External, input)
        }),
    }
}

/// First provider whose host substrings match, in `PROVIDER_HOSTS` order.
fn match_source(host: &str) -> Option<ContentSource> {
    PROVIDER_HOSTS
        .iter()
        .find(|(_, hosts)| hosts.iter().any(|h| host.contains(h)))
        .map(|(source, _)| *source)
}
