//! Command handlers
//!
//! The operations a front end invokes, all working on a shared [`AppState`].

pub mod form;
pub mod operations;
pub mod progress;
mod state;

pub use state::{AppState, BuildLogEntry, GenerationStatus, Severity};
