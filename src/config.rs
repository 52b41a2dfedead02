//! Application configuration constants
//!
//! Centralized values for the application name, completion service
//! endpoints and export naming. User-adjustable values live in
//! [`crate::settings`].

pub mod app {
    /// Application name, used for the settings directory
    pub const NAME: &str = "distro-blueprint";
    /// User agent sent to the completion service
    pub const USER_AGENT: &str = concat!("Distro-Blueprint/", env!("CARGO_PKG_VERSION"));
}

pub mod api {
    /// Default base URL of the Gemini REST API
    pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
    /// Default model used for blueprint generation and assistant chat
    pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
    /// Environment variables checked, in order, for the API credential
    pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];
    /// Environment override for the base URL
    pub const BASE_URL_ENV_VAR: &str = "DISTRO_BLUEPRINT_API_BASE";
    /// Environment override for the model name
    pub const MODEL_ENV_VAR: &str = "DISTRO_BLUEPRINT_MODEL";
    /// Header carrying the API credential
    pub const API_KEY_HEADER: &str = "x-goog-api-key";
    /// MIME type requested for structured output
    pub const JSON_MIME_TYPE: &str = "application/json";
}

pub mod export {
    /// Suffix appended to the lower-cased distribution id
    pub const FILE_SUFFIX: &str = "-iso-blueprint.json";
}

pub mod settings {
    /// Settings file name inside the config directory
    pub const FILE_NAME: &str = "settings.json";
}
