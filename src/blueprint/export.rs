//! Blueprint export
//!
//! Serializes the artifact list as a single JSON document. The export is
//! write-only: nothing in the application reads it back.

use std::path::{Path, PathBuf};

use crate::request::Distribution;
use crate::utils::export_path;
use crate::{log_error, log_info};

use super::models::GeneratedArtifact;

const MODULE: &str = "blueprint::export";

/// Render artifacts as a pretty-printed JSON array
pub fn export_json(artifacts: &[GeneratedArtifact]) -> Result<String, String> {
    serde_json::to_string_pretty(artifacts)
        .map_err(|e| format!("Failed to serialize blueprint: {}", e))
}

/// Write the export document for `distribution` into `dir`
///
/// Returns the path written. An existing file with the same name is
/// replaced.
pub fn write_export(
    dir: &Path,
    distribution: Distribution,
    artifacts: &[GeneratedArtifact],
) -> Result<PathBuf, String> {
    if artifacts.is_empty() {
        return Err("Nothing to export: no artifacts have been generated".to_string());
    }

    let json = export_json(artifacts)?;
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create export directory: {}", e))?;

    let path = export_path(dir, distribution);
    std::fs::write(&path, json).map_err(|e| {
        log_error!(MODULE, "Failed to write {}: {}", path.display(), e);
        format!("Failed to write export: {}", e)
    })?;

    log_info!(
        MODULE,
        "Exported {} artifacts to {}",
        artifacts.len(),
        path.display()
    );
    Ok(path)
}
