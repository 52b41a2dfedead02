//! Utility functions shared across the application
//!
//! This module contains common helpers for formatting and path management.

mod format;
mod path;

pub use format::*;
pub use path::*;
