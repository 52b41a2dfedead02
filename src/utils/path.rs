//! Path utility functions
//!
//! Locations for settings and exported blueprints.

use std::path::{Path, PathBuf};

use crate::config;
use crate::request::Distribution;

/// Per-user configuration directory for the application
///
/// Falls back to the current directory when the platform has none.
pub fn get_config_dir(app_name: &str) -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(app_name)
}

/// Default directory exported blueprints are written to
pub fn get_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// File name of the export document for a distribution
pub fn export_file_name(distribution: Distribution) -> String {
    format!("{}{}", distribution.id(), config::export::FILE_SUFFIX)
}

/// Full export path inside `dir`
pub fn export_path(dir: &Path, distribution: Distribution) -> PathBuf {
    dir.join(export_file_name(distribution))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name(Distribution::Ubuntu),
            "ubuntu-iso-blueprint.json"
        );
        assert_eq!(
            export_file_name(Distribution::ArchLinux),
            "archlinux-iso-blueprint.json"
        );
    }

    #[test]
    fn test_export_path_joins_dir() {
        let path = export_path(Path::new("/tmp/out"), Distribution::Alpine);
        assert_eq!(path, PathBuf::from("/tmp/out/alpine-iso-blueprint.json"));
    }

    #[test]
    fn test_config_dir_ends_with_app_name() {
        assert!(get_config_dir("distro-blueprint").ends_with("distro-blueprint"));
    }
}
