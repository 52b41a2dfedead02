//! User settings
//!
//! Persisted in `settings.json` under the per-user config directory.
//! Environment variables override the stored values; the API credential
//! is only ever read from the environment.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config;
use crate::utils::get_config_dir;
use crate::{log_debug, log_info, log_warn};

const MODULE: &str = "settings";

/// Values stored in settings.json
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub api_base_url: Option<String>,
    pub model: Option<String>,
    pub developer_mode: bool,
}

/// Fully resolved completion service settings
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSettings {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
}

/// Default location of settings.json
pub fn settings_path() -> PathBuf {
    get_config_dir(config::app::NAME).join(config::settings::FILE_NAME)
}

impl Settings {
    /// Read settings from `path`
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse {}: {}", path.display(), e))
    }

    /// Read settings from `path`, falling back to defaults
    ///
    /// A missing file is normal on first run. A corrupt file is logged and
    /// ignored.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log_debug!(MODULE, "No settings at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(settings) => {
                log_debug!(MODULE, "Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log_warn!(MODULE, "{}. Using default settings.", e);
                Self::default()
            }
        }
    }

    /// Write settings to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create settings directory: {}", e))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;
        std::fs::write(path, json)
            .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        log_info!(MODULE, "Saved settings to {}", path.display());
        Ok(())
    }

    /// Resolve API settings against the process environment
    pub fn resolve_api(&self) -> ApiSettings {
        self.resolve_api_with(|name| std::env::var(name).ok())
    }

    /// Resolve API settings using `lookup` for environment variables
    ///
    /// Precedence: environment, then settings.json, then built-in defaults.
    /// Empty values count as unset.
    pub fn resolve_api_with<F>(&self, lookup: F) -> ApiSettings
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let base_url = non_empty(lookup(config::api::BASE_URL_ENV_VAR))
            .or_else(|| non_empty(self.api_base_url.clone()))
            .unwrap_or_else(|| config::api::DEFAULT_BASE_URL.to_string());

        let model = non_empty(lookup(config::api::MODEL_ENV_VAR))
            .or_else(|| non_empty(self.model.clone()))
            .unwrap_or_else(|| config::api::DEFAULT_MODEL.to_string());

        let api_key = config::api::API_KEY_ENV_VARS
            .iter()
            .find_map(|name| non_empty(lookup(name)));

        ApiSettings {
            base_url,
            model,
            api_key,
        }
    }
}
