//! Blueprint generation module
//!
//! Builds the prompt for an image request, makes exactly one structured
//! completion call, and validates the response into artifacts.

mod error;
mod export;
mod models;
mod prompt;
mod schema;

pub use error::GenerationError;
pub use export::{export_json, write_export};
pub use models::{BuildPhase, GeneratedArtifact};
pub use prompt::{build_prompt, PACKAGE_DELIMITER};
pub use schema::{parse_artifacts, response_schema, ARTIFACT_FIELDS};

use std::sync::Arc;

use crate::completion::CompletionService;
use crate::request::ImageRequest;
use crate::{log_debug, log_error, log_info};

const MODULE: &str = "blueprint";

/// Generates artifact bundles through a completion service
#[derive(Clone)]
pub struct BlueprintGenerator {
    service: Arc<dyn CompletionService>,
}

impl BlueprintGenerator {
    pub fn new(service: Arc<dyn CompletionService>) -> Self {
        Self { service }
    }

    /// Generate the artifacts for `request`
    pub async fn generate_blueprint(
        &self,
        request: &ImageRequest,
    ) -> Result<Vec<GeneratedArtifact>, GenerationError> {
        self.generate_blueprint_with_progress(request, |_| {}).await
    }

    /// Generate the artifacts for `request`, reporting each phase
    ///
    /// One service call is made. Any failure, including a response that
    /// does not match the schema, is returned as an error with no partial
    /// result.
    pub async fn generate_blueprint_with_progress<F>(
        &self,
        request: &ImageRequest,
        mut on_phase: F,
    ) -> Result<Vec<GeneratedArtifact>, GenerationError>
    where
        F: FnMut(BuildPhase) + Send,
    {
        on_phase(BuildPhase::ComposingPrompt);
        let prompt = build_prompt(request);
        let schema = response_schema();
        log_info!(
            MODULE,
            "Generating blueprint for {} {} ({})",
            request.distribution,
            request.distribution_version,
            request.architecture
        );
        log_debug!(MODULE, "Prompt is {} bytes", prompt.len());

        on_phase(BuildPhase::AwaitingService);
        let text = self.service.complete_json(&prompt, &schema).await?;

        on_phase(BuildPhase::ValidatingResponse);
        let artifacts = parse_artifacts(&text).map_err(|e| {
            log_error!(MODULE, "{}", e);
            e
        })?;

        log_info!(MODULE, "Blueprint contains {} artifacts", artifacts.len());
        Ok(artifacts)
    }

    /// Free-form assistant call: prompt in, text out, no schema
    pub async fn assist(&self, prompt: &str) -> Result<String, GenerationError> {
        log_info!(MODULE, "Assistant request ({} bytes)", prompt.len());
        Ok(self.service.complete_text(prompt).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::testing::StaticService;
    use crate::completion::ServiceError;

    fn four_artifacts() -> String {
        serde_json::json!([
            {"name": "README.md", "content": "# Usage", "language": "markdown"},
            {"name": "user-data", "content": "#cloud-config", "language": "yaml"},
            {"name": "build-iso.sh", "content": "#!/bin/bash", "language": "bash"},
            {"name": "isolinux.cfg", "content": "DEFAULT install", "language": "ini"}
        ])
        .to_string()
    }

    #[tokio::test]
    async fn test_generate_returns_artifacts_in_order() {
        let service = Arc::new(StaticService::ok(&four_artifacts()));
        let generator = BlueprintGenerator::new(service.clone());

        let artifacts = generator
            .generate_blueprint(&ImageRequest::default())
            .await
            .unwrap();

        let names: Vec<&str> = artifacts.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["README.md", "user-data", "build-iso.sh", "isolinux.cfg"]);
        assert_eq!(service.calls(), 1);
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_and_schema() {
        let service = Arc::new(StaticService::ok(&four_artifacts()));
        let generator = BlueprintGenerator::new(service.clone());
        let request = ImageRequest::default().with_package("nginx");

        generator.generate_blueprint(&request).await.unwrap();

        let (prompt, schema) = service.last_call().unwrap();
        assert_eq!(prompt, build_prompt(&request));
        assert_eq!(schema, Some(response_schema()));
    }

    #[tokio::test]
    async fn test_phases_are_reported_in_order() {
        let service = Arc::new(StaticService::ok(&four_artifacts()));
        let generator = BlueprintGenerator::new(service);
        let mut phases = Vec::new();

        generator
            .generate_blueprint_with_progress(&ImageRequest::default(), |p| phases.push(p))
            .await
            .unwrap();

        assert_eq!(
            phases,
            vec![
                BuildPhase::ComposingPrompt,
                BuildPhase::AwaitingService,
                BuildPhase::ValidatingResponse
            ]
        );
    }

    #[tokio::test]
    async fn test_malformed_response_is_error() {
        let service = Arc::new(StaticService::ok("I cannot help with that."));
        let generator = BlueprintGenerator::new(service.clone());

        let result = generator.generate_blueprint(&ImageRequest::default()).await;
        assert!(matches!(result, Err(GenerationError::MalformedResponse(_))));
        assert_eq!(service.calls(), 1);
    }

    #[tokio::test]
    async fn test_service_failure_is_not_retried() {
        let service = Arc::new(StaticService::err(|| ServiceError::Api {
            status: 429,
            message: "quota exceeded".to_string(),
        }));
        let generator = BlueprintGenerator::new(service.clone());

        let result = generator.generate_blueprint(&ImageRequest::default()).await;
        match result {
            Err(GenerationError::Service(e)) => assert!(e.to_string().contains("quota exceeded")),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(service.calls(), 1);
    }

    #[tokio::test]
    async fn test_assist_returns_text_unparsed() {
        let service = Arc::new(StaticService::ok("Use `xorriso -as mkisofs`."));
        let generator = BlueprintGenerator::new(service.clone());

        let answer = generator.assist("How do I build the ISO?").await.unwrap();
        assert_eq!(answer, "Use `xorriso -as mkisofs`.");

        let (prompt, schema) = service.last_call().unwrap();
        assert_eq!(prompt, "How do I build the ISO?");
        assert!(schema.is_none());
    }
}
