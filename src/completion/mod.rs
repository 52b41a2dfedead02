//! Completion service module
//!
//! The seam between blueprint generation and the hosted text-generation
//! service. [`GeminiClient`] talks to the real API; tests plug in their
//! own [`CompletionService`].

mod error;
mod gemini;

pub use error::{Result, ServiceError};
pub use gemini::GeminiClient;

use async_trait::async_trait;

/// A hosted completion backend
///
/// Every call is a single non-streaming attempt; implementations must not
/// retry on their own.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Submit a prompt with a structured-output schema and return the raw
    /// response text, which is expected (not guaranteed) to be JSON
    async fn complete_json(&self, prompt: &str, schema: &serde_json::Value) -> Result<String>;

    /// Submit a prompt and return the free-form response text
    async fn complete_text(&self, prompt: &str) -> Result<String>;
}

#[cfg(test)]
pub(crate) mod testing;
