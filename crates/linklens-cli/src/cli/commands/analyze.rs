//! `linklens analyze <url>` – classify a single URL.

use anyhow::Result;
use linklens_core::analysis::UrlAnalysis;
use linklens_core::classify;

/// An invalid URL is a classification result, not an operational failure, so
/// this returns Ok for it and the caller exits 0.
pub fn run_analyze(url: &str, json: bool) -> Result<()> {
    let analysis = classify::analyze(url);
    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_text(&analysis);
    }
    Ok(())
}

fn print_text(a: &UrlAnalysis) {
    println!("{:<12}{}", "source", a.source.display_name());
    println!("{:<12}{}", "valid", a.is_valid);
    println!("{:<12}{}", "embeddable", a.source.supports_embedding());
    if let Some(id) = &a.resource_id {
        println!("{:<12}{}", "id", id);
    }
    if let Some(u) = &a.embed_url {
        println!("{:<12}{}", "embed", u);
    }
    if let Some(u) = &a.download_url {
        println!("{:<12}{}", "download", u);
    }
    if let Some(u) = &a.view_url {
        println!("{:<12}{}", "view", u);
    }
    if let Some(u) = &a.thumbnail_url {
        println!("{:<12}{}", "thumbnail", u);
    }
    if let Some(e) = &a.error {
        println!("{:<12}{}", "error", e);
    }
}
