//! History snapshot reader.
//!
//! Snapshots are written by an external collector as
//! `historico_YYYY-MM-DDHhh-mm.json` files holding a raw JSON array of
//! profile entries. This module only reads them: listing newest-first and
//! loading one file with follower/like totals.

use std::path::Path;

use regex::Regex;
use serde_json::Value;
use tokio::fs;

use crate::types::{HistoryFileEntry, HistoryLoadResponse};

const SNAPSHOT_PREFIX: &str = "historico_";
const SNAPSHOT_SUFFIX: &str = ".json";

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("History file not found: {0}")]
    NotFound(String),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

/// List snapshot files in `dir`, newest first.
///
/// An absent directory is an empty listing. The embedded timestamp format
/// sorts lexically in chronological order, so a lexical sort + reverse
/// yields newest-first.
pub async fn list_snapshots(dir: &Path) -> Result<Vec<HistoryFileEntry>, HistoryError> {
    let mut read_dir = match fs::read_dir(dir).await {
        Ok(read_dir) => read_dir,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut names = Vec::new();
    while let Some(entry) = read_dir.next_entry().await? {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with(SNAPSHOT_PREFIX) && name.ends_with(SNAPSHOT_SUFFIX) {
            names.push(name);
        }
    }
    names.sort_unstable();
    names.reverse();

    Ok(names
        .into_iter()
        .map(|filename| HistoryFileEntry {
            date: display_date(&filename),
            full_path: dir.join(&filename).to_string_lossy().into_owned(),
            filename,
        })
        .collect())
}

/// Load one snapshot and compute follower/like totals.
///
/// The filename must be a plain name inside `dir`.
pub async fn load_snapshot(
    dir: &Path,
    filename: &str,
) -> Result<HistoryLoadResponse, HistoryError> {
    if filename.contains('/') || filename.contains('\\') || filename.contains("..") {
        return Err(HistoryError::InvalidFilename(filename.to_string()));
    }

    let path = dir.join(filename);
    let content = match fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(HistoryError::NotFound(filename.to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    let profiles: Vec<Value> = serde_json::from_str(&content)?;

    Ok(HistoryLoadResponse {
        filename: filename.to_string(),
        date: display_date(filename),
        total_followers: metric_total(&profiles, "followers"),
        total_likes: metric_total(&profiles, "likes"),
        profiles,
    })
}

/// Display date for a snapshot filename: `DD/MM/YYYY HH:MM` when the fixed
/// pattern matches, otherwise the raw filename.
pub fn display_date(filename: &str) -> String {
    let re = Regex::new(r"^historico_(\d{4})-(\d{2})-(\d{2})H(\d{2})-(\d{2})\.json$").unwrap();
    match re.captures(filename) {
        Some(c) => format!("{}/{}/{} {}:{}", &c[3], &c[2], &c[1], &c[4], &c[5]),
        None => filename.to_string(),
    }
}

/// Sum a display-string metric over all profiles.
fn metric_total(profiles: &[Value], field: &str) -> u64 {
    profiles.iter().map(|p| metric_value(p.get(field))).sum()
}

/// Numeric value of one metric field.
///
/// Display strings keep only their digits ("1,234" → 1234, "1.2K" → 12);
/// absent, empty, or non-numeric fields count as 0.
fn metric_value(value: Option<&Value>) -> u64 {
    let display = match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => return 0,
    };
    let digits: String = display.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}
