//! `linklens batch <path>` – classify URLs from a file, one per line.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use linklens_core::analysis::UrlAnalysis;
use linklens_core::classify;

pub fn run_batch(path: &Path, json: bool, stop_on_invalid: bool) -> Result<()> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("cannot read URL list {}", path.display()))?;

    let mut results: Vec<UrlAnalysis> = Vec::new();
    let mut stopped_at: Option<String> = None;
    for url in url_lines(&data) {
        let analysis = classify::analyze(url);
        let invalid = !analysis.is_valid;
        results.push(analysis);
        if invalid && stop_on_invalid {
            stopped_at = Some(url.to_string());
            break;
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_table(&results);
    }

    if let Some(url) = stopped_at {
        bail!("stopped at invalid URL: {url}");
    }
    Ok(())
}

/// Lines that hold URLs: trimmed, blanks and #-comments skipped.
fn url_lines(data: &str) -> impl Iterator<Item = &str> {
    data.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
}

fn print_table(results: &[UrlAnalysis]) {
    println!("{:<22} {:<7} {:<6} {}", "SOURCE", "VALID", "EMBED", "URL");
    for a in results {
        println!(
            "{:<22} {:<7} {:<6} {}",
            a.source.display_name(),
            a.is_valid,
            if a.source.supports_embedding() {
                "yes"
            } else {
                "no"
            },
            a.original_url
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn url_lines_skips_blanks_and_comments() {
        let data = "# header\nhttps://a.example/x\n\n  https://b.example/y  \n# tail\n";
        let lines: Vec<&str> = url_lines(data).collect();
        assert_eq!(lines, vec!["https://a.example/x", "https://b.example/y"]);
    }

    #[test]
    fn batch_reads_file_in_both_formats() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "https://youtu.be/abc123").unwrap();
        writeln!(file, "https://example.com/doc.pdf").unwrap();
        run_batch(file.path(), false, false).unwrap();
        run_batch(file.path(), true, false).unwrap();
    }

    #[test]
    fn batch_invalid_without_stop_is_ok() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "https://vimeo.com/abc").unwrap();
        writeln!(file, "https://youtu.be/ok1").unwrap();
        run_batch(file.path(), false, false).unwrap();
    }

    #[test]
    fn batch_stop_on_invalid_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "https://vimeo.com/abc").unwrap();
        writeln!(file, "https://youtu.be/ok1").unwrap();
        let err = run_batch(file.path(), false, true).unwrap_err();
        assert!(err.to_string().contains("https://vimeo.com/abc"));
    }

    #[test]
    fn batch_missing_file_errors() {
        let err = run_batch(Path::new("/nonexistent/urls.txt"), false, false).unwrap_err();
        assert!(format!("{err:#}").contains("urls.txt"));
    }
}
