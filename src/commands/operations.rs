//! Core operations module
//!
//! Handles blueprint generation, assistant chat and export.

use std::path::{Path, PathBuf};

use crate::blueprint::{write_export, BlueprintGenerator, GeneratedArtifact, GenerationError};
use crate::{log_error, log_info, log_warn};

use super::state::{AppState, Severity};

const MODULE: &str = "operations";

/// Generate a blueprint for the current request
///
/// Only one generation may be in flight; a second call made meanwhile is
/// rejected before anything reaches the completion service. Failures are
/// not returned as errors: they leave an empty artifact list and a single
/// error entry in the build log.
pub async fn generate(
    state: &AppState,
    generator: &BlueprintGenerator,
) -> Result<Vec<GeneratedArtifact>, String> {
    let _generating = state.begin_generation().ok_or_else(|| {
        log_warn!(MODULE, "Generation requested while another is in progress");
        GenerationError::AlreadyGenerating.to_string()
    })?;

    state.set_artifacts(Vec::new());
    state.clear_log();

    let request = state.request();
    state.push_log(
        Severity::Info,
        format!(
            "Starting blueprint generation for {} {} ({})",
            request.distribution, request.distribution_version, request.architecture
        ),
    );

    let result = generator
        .generate_blueprint_with_progress(&request, |phase| {
            state.push_log(Severity::Info, format!("{}...", phase));
        })
        .await;

    match result {
        Ok(artifacts) => {
            log_info!(MODULE, "Generation completed: {} artifacts", artifacts.len());
            state.set_artifacts(artifacts.clone());
            state.push_log(
                Severity::Success,
                format!("Blueprint ready: {} artifacts generated", artifacts.len()),
            );
            Ok(artifacts)
        }
        Err(e) => {
            log_error!(MODULE, "Generation failed: {}", e);
            state.push_log(Severity::Error, e.to_string());
            Ok(Vec::new())
        }
    }
}

/// Ask the assistant a free-form question
pub async fn assist(generator: &BlueprintGenerator, prompt: &str) -> Result<String, String> {
    generator.assist(prompt).await.map_err(|e| {
        log_error!(MODULE, "Assistant request failed: {}", e);
        e.to_string()
    })
}

/// Export the current artifacts into `dir`
///
/// The file is named after the current distribution.
pub fn export_artifacts(state: &AppState, dir: &Path) -> Result<PathBuf, String> {
    let distribution = state.request().distribution;
    let artifacts = state.artifacts();
    log_info!(
        MODULE,
        "Exporting {} artifacts to {}",
        artifacts.len(),
        dir.display()
    );
    write_export(dir, distribution, &artifacts)
}
