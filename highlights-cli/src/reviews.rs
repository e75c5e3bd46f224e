use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Reads a review file, one review per line
/// A trailing newline produces a final empty review; CR of CRLF endings is dropped
pub fn load_reviews(path: &Path) -> Result<Vec<String>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read reviews from {}", path.display()))?;

    let reviews = split_reviews(&data);
    debug!("Loaded {} reviews from {}", reviews.len(), path.display());

    Ok(reviews)
}

fn split_reviews(data: &str) -> Vec<String> {
    data.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
