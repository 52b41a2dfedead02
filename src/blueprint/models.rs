//! Blueprint data models

use std::fmt;

use serde::{Deserialize, Serialize};

/// One generated configuration file
///
/// Field contents are passed through exactly as the service returned
/// them: names may collide and `language` is only a highlighting hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratedArtifact {
    pub name: String,
    pub content: String,
    pub language: String,
}

/// Stages a generation run reports as it goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildPhase {
    ComposingPrompt,
    AwaitingService,
    ValidatingResponse,
}

impl fmt::Display for BuildPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            BuildPhase::ComposingPrompt => "Composing blueprint prompt",
            BuildPhase::AwaitingService => "Waiting for completion service",
            BuildPhase::ValidatingResponse => "Validating generated artifacts",
        };
        f.write_str(text)
    }
}
