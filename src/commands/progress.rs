//! Progress and result queries
//!
//! Read-only views the front end polls while and after generating.

use crate::blueprint::GeneratedArtifact;

use super::state::{AppState, BuildLogEntry, GenerationStatus, Severity};

pub fn get_build_log(state: &AppState) -> Vec<BuildLogEntry> {
    state.build_log()
}

pub fn get_artifacts(state: &AppState) -> Vec<GeneratedArtifact> {
    state.artifacts()
}

pub fn get_generation_status(state: &AppState) -> GenerationStatus {
    state.status()
}

/// True when the last generation logged an error
pub fn has_errors(state: &AppState) -> bool {
    state
        .build_log()
        .iter()
        .any(|entry| entry.severity == Severity::Error)
}
