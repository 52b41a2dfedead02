//! Application state management
//!
//! Shared session state: the current request revision, the artifact list,
//! the build log and the generation flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::blueprint::GeneratedArtifact;
use crate::request::ImageRequest;

/// Severity of a build log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// One user-facing line of the build log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildLogEntry {
    pub timestamp: String,
    pub message: String,
    pub severity: Severity,
}

impl BuildLogEntry {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
            message: message.into(),
            severity,
        }
    }
}

/// Whether a generation is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    Idle,
    Generating,
}

/// Application state shared by all commands
pub struct AppState {
    request: RwLock<Arc<ImageRequest>>,
    artifacts: Mutex<Vec<GeneratedArtifact>>,
    build_log: Mutex<Vec<BuildLogEntry>>,
    is_generating: AtomicBool,
}

impl AppState {
    pub fn new(request: ImageRequest) -> Self {
        Self {
            request: RwLock::new(Arc::new(request)),
            artifacts: Mutex::new(Vec::new()),
            build_log: Mutex::new(Vec::new()),
            is_generating: AtomicBool::new(false),
        }
    }

    /// Snapshot of the current request revision
    pub fn request(&self) -> Arc<ImageRequest> {
        self.request
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the current request with a new revision
    pub fn replace_request(&self, request: ImageRequest) -> Arc<ImageRequest> {
        let next = Arc::new(request);
        *self.request.write().unwrap_or_else(PoisonError::into_inner) = next.clone();
        next
    }

    /// Derive a new revision from the current one
    ///
    /// Snapshots handed out earlier are unaffected.
    pub fn update_request<F, R>(&self, update: F) -> R
    where
        F: FnOnce(&mut ImageRequest) -> R,
    {
        let mut guard = self.request.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = ImageRequest::clone(&guard);
        let result = update(&mut next);
        *guard = Arc::new(next);
        result
    }

    pub fn artifacts(&self) -> Vec<GeneratedArtifact> {
        lock(&self.artifacts).clone()
    }

    pub(crate) fn set_artifacts(&self, artifacts: Vec<GeneratedArtifact>) {
        *lock(&self.artifacts) = artifacts;
    }

    pub fn build_log(&self) -> Vec<BuildLogEntry> {
        lock(&self.build_log).clone()
    }

    pub(crate) fn push_log(&self, severity: Severity, message: impl Into<String>) {
        lock(&self.build_log).push(BuildLogEntry::new(severity, message));
    }

    pub(crate) fn clear_log(&self) {
        lock(&self.build_log).clear();
    }

    pub fn status(&self) -> GenerationStatus {
        if self.is_generating.load(Ordering::SeqCst) {
            GenerationStatus::Generating
        } else {
            GenerationStatus::Idle
        }
    }

    /// Move from idle to generating
    ///
    /// Returns None when a generation is already in flight. The returned
    /// guard moves the state back to idle when dropped.
    pub(crate) fn begin_generation(&self) -> Option<GenerationGuard<'_>> {
        self.is_generating
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| GenerationGuard { state: self })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ImageRequest::default())
    }
}

/// Marks a generation as in flight for as long as it lives
pub(crate) struct GenerationGuard<'a> {
    state: &'a AppState,
}

impl Drop for GenerationGuard<'_> {
    fn drop(&mut self) {
        self.state.is_generating.store(false, Ordering::SeqCst);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_creates_new_revision() {
        let state = AppState::default();
        let before = state.request();

        let added = state.update_request(|r| r.add_package("nginx"));

        assert!(added);
        assert!(!before.has_package("nginx"));
        assert!(state.request().has_package("nginx"));
        assert!(!Arc::ptr_eq(&before, &state.request()));
    }

    #[test]
    fn test_generation_guard_is_exclusive() {
        let state = AppState::default();
        assert_eq!(state.status(), GenerationStatus::Idle);

        let guard = state.begin_generation();
        assert!(guard.is_some());
        assert_eq!(state.status(), GenerationStatus::Generating);
        assert!(state.begin_generation().is_none());

        drop(guard);
        assert_eq!(state.status(), GenerationStatus::Idle);
        assert!(state.begin_generation().is_some());
    }

    #[test]
    fn test_log_entry_serializes_lowercase_severity() {
        let entry = BuildLogEntry::new(Severity::Warning, "careful");
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["severity"], "warning");
        assert_eq!(value["message"], "careful");
        assert_eq!(entry.timestamp.len(), 8);
    }
}
