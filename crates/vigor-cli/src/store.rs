//! JSON-file stand-in for the assessment history store.
//!
//! A history file is a JSON array of entries, newest first.

use std::path::Path;

use eyre::WrapErr;
use serde::de::DeserializeOwned;
use vigor_core::models::history::AssessmentHistoryEntry;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> eyre::Result<T> {
    let contents = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents).wrap_err_with(|| format!("invalid JSON in {}", path.display()))
}

/// A missing file is an empty history.
pub fn load_history(path: &Path) -> eyre::Result<Vec<AssessmentHistoryEntry>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no history file, starting empty");
        return Ok(Vec::new());
    }
    read_json(path)
}

pub fn prepend_entry(path: &Path, entry: AssessmentHistoryEntry) -> eyre::Result<usize> {
    let mut history = load_history(path)?;
    history.insert(0, entry);

    let json = serde_json::to_string_pretty(&history)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), entries = history.len(), "history saved");
    Ok(history.len())
}
