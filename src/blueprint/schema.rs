//! Response schema and validation
//!
//! The service is asked for an array of `{name, content, language}`
//! objects. Whatever comes back is checked against that shape at the
//! boundary and rejected as a whole on any deviation.

use serde_json::{json, Value};

use super::error::GenerationError;
use super::models::GeneratedArtifact;

/// Fields every artifact object must carry, all strings
pub const ARTIFACT_FIELDS: [&str; 3] = ["name", "content", "language"];

/// Structured-output schema sent with the blueprint request
pub fn response_schema() -> Value {
    let properties: serde_json::Map<String, Value> = ARTIFACT_FIELDS
        .iter()
        .map(|field| (field.to_string(), json!({ "type": "STRING" })))
        .collect();

    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": properties,
            "required": ARTIFACT_FIELDS,
        }
    })
}

/// Parse the raw response text into artifacts
///
/// Fails on non-JSON text, a non-array top level, missing or non-string
/// fields, unknown fields, and an empty array.
pub fn parse_artifacts(text: &str) -> Result<Vec<GeneratedArtifact>, GenerationError> {
    let artifacts: Vec<GeneratedArtifact> = serde_json::from_str(text.trim())
        .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

    if artifacts.is_empty() {
        return Err(GenerationError::MalformedResponse(
            "response contained no artifacts".to_string(),
        ));
    }

    Ok(artifacts)
}
