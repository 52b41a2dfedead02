//! In-process completion services for unit tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Notify;

use super::{CompletionService, Result, ServiceError};

type Call = (String, Option<serde_json::Value>);

/// Answers every call with the same outcome and records the calls
pub struct StaticService {
    response: std::result::Result<String, fn() -> ServiceError>,
    gate: Option<Notify>,
    calls: AtomicUsize,
    last: Mutex<Option<Call>>,
}

impl StaticService {
    pub fn ok(text: &str) -> Self {
        Self {
            response: Ok(text.to_string()),
            gate: None,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn err(make: fn() -> ServiceError) -> Self {
        Self {
            response: Err(make),
            gate: None,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    /// Hold every call until [`StaticService::release`] is called
    pub fn gated(mut self) -> Self {
        self.gate = Some(Notify::new());
        self
    }

    pub fn release(&self) {
        if let Some(ref gate) = self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_call(&self) -> Option<Call> {
        self.last.lock().unwrap().clone()
    }

    async fn answer(&self, prompt: &str, schema: Option<&serde_json::Value>) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((prompt.to_string(), schema.cloned()));
        if let Some(ref gate) = self.gate {
            gate.notified().await;
        }
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(make) => Err(make()),
        }
    }
}

#[async_trait]
impl CompletionService for StaticService {
    async fn complete_json(&self, prompt: &str, schema: &serde_json::Value) -> Result<String> {
        self.answer(prompt, Some(schema)).await
    }

    async fn complete_text(&self, prompt: &str) -> Result<String> {
        self.answer(prompt, None).await
    }
}
