//! Request editing commands
//!
//! Field updates, package list edits and template loading. Each update
//! installs a new request revision.

use std::sync::Arc;

use crate::request::{find_template, templates, Architecture, Distribution, ImageRequest, Template};
use crate::{log_debug, log_info, log_warn};

use super::state::AppState;

const MODULE: &str = "commands::form";

pub fn get_request(state: &AppState) -> Arc<ImageRequest> {
    state.request()
}

pub fn set_distribution(state: &AppState, distribution: Distribution) {
    log_debug!(MODULE, "Distribution: {}", distribution);
    state.update_request(|r| r.distribution = distribution);
}

pub fn set_distribution_version(state: &AppState, version: String) {
    log_debug!(MODULE, "Distribution version: {}", version);
    state.update_request(|r| r.distribution_version = version);
}

pub fn set_architecture(state: &AppState, architecture: Architecture) {
    log_debug!(MODULE, "Architecture: {}", architecture);
    state.update_request(|r| r.architecture = architecture);
}

pub fn set_hostname(state: &AppState, hostname: String) {
    state.update_request(|r| r.hostname = hostname);
}

pub fn set_username(state: &AppState, username: String) {
    state.update_request(|r| r.username = username);
}

pub fn set_custom_instructions(state: &AppState, instructions: String) {
    state.update_request(|r| r.custom_instructions = instructions);
}

pub fn set_cloud_init(state: &AppState, enabled: bool) {
    log_debug!(MODULE, "Cloud-init: {}", enabled);
    state.update_request(|r| r.cloud_init_enabled = enabled);
}

/// Add a package; returns false when it was blank or already listed
pub fn add_package(state: &AppState, name: &str) -> bool {
    let added = state.update_request(|r| r.add_package(name));
    if added {
        log_debug!(MODULE, "Added package: {}", name.trim());
    } else {
        log_debug!(MODULE, "Ignored package: {:?}", name);
    }
    added
}

pub fn remove_package(state: &AppState, name: &str) -> bool {
    state.update_request(|r| r.remove_package(name))
}

/// Replace the whole request, e.g. with one loaded from a file
pub fn replace_request(state: &AppState, request: ImageRequest) -> Arc<ImageRequest> {
    state.replace_request(request)
}

pub fn list_templates() -> Vec<Template> {
    templates()
}

/// Load a template, replacing the request and clearing log and artifacts
///
/// Rejected while a generation is in flight, since its result would land
/// in the freshly loaded session.
pub fn load_template(state: &AppState, id: &str) -> Result<Arc<ImageRequest>, String> {
    let template = find_template(id).ok_or_else(|| {
        log_warn!(MODULE, "Unknown template: {}", id);
        format!("Unknown template: {}", id)
    })?;

    let _loading = state.begin_generation().ok_or_else(|| {
        log_warn!(MODULE, "Template load requested while a generation is in progress");
        "Cannot load a template while a blueprint generation is in progress".to_string()
    })?;

    log_info!(MODULE, "Loading template: {}", template.label);
    let request = state.replace_request(template.request);
    state.clear_log();
    state.set_artifacts(Vec::new());
    Ok(request)
}
