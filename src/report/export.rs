//! Writing generated documents to disk

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use tracing::info;

/// Default export file name for a document generated at `at`
///
/// e.g. `veo3_prompt_20261017_142501.json`
pub fn default_export_name(at: DateTime<Local>) -> String {
    format!("veo3_prompt_{}.json", at.format("%Y%m%d_%H%M%S"))
}

/// Default export path inside `dir`, timestamped with the current local time
pub fn default_export_path(dir: &Path) -> PathBuf {
    dir.join(default_export_name(Local::now()))
}

/// Write the rendered JSON document to `path` with a trailing newline,
/// creating missing parent directories
///
/// # Arguments
/// * `json` - Rendered document text
/// * `path` - Destination file; overwritten if it exists
pub fn export_document(json: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(path, format!("{}\n", json))
        .with_context(|| format!("Failed to write document: {}", path.display()))?;

    info!(path = %path.display(), bytes = json.len(), "document exported");
    Ok(())
}
