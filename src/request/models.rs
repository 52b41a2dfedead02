//! Image request data models
//!
//! Types describing the Linux image a user wants a blueprint for.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Supported target distributions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Distribution {
    Ubuntu,
    Debian,
    #[serde(rename = "Arch Linux", alias = "ArchLinux")]
    ArchLinux,
    Fedora,
    Alpine,
}

impl Distribution {
    pub const ALL: [Distribution; 5] = [
        Distribution::Ubuntu,
        Distribution::Debian,
        Distribution::ArchLinux,
        Distribution::Fedora,
        Distribution::Alpine,
    ];

    /// Human-readable name used in prompts and listings
    pub fn display_name(&self) -> &'static str {
        match self {
            Distribution::Ubuntu => "Ubuntu",
            Distribution::Debian => "Debian",
            Distribution::ArchLinux => "Arch Linux",
            Distribution::Fedora => "Fedora",
            Distribution::Alpine => "Alpine",
        }
    }

    /// Lower-case identifier used for file names and CLI arguments
    pub fn id(&self) -> &'static str {
        match self {
            Distribution::Ubuntu => "ubuntu",
            Distribution::Debian => "debian",
            Distribution::ArchLinux => "archlinux",
            Distribution::Fedora => "fedora",
            Distribution::Alpine => "alpine",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Distribution {
    type Err = String;

    /// Accepts the identifier or the display name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        Distribution::ALL
            .into_iter()
            .find(|d| d.id() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown distribution '{}' (expected one of: ubuntu, debian, archlinux, fedora, alpine)",
                    s
                )
            })
    }
}

/// Supported CPU architectures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Architecture {
    #[serde(rename = "x86_64")]
    X86_64,
    #[serde(rename = "aarch64")]
    Aarch64,
}

impl Architecture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Architecture::X86_64 => "x86_64",
            Architecture::Aarch64 => "aarch64",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Architecture {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "x86_64" | "amd64" => Ok(Architecture::X86_64),
            "aarch64" | "arm64" => Ok(Architecture::Aarch64),
            other => Err(format!(
                "Unknown architecture '{}' (expected x86_64 or aarch64)",
                other
            )),
        }
    }
}

/// Parameters of the image a blueprint is generated for
///
/// A request is treated as an immutable revision once it is shared: the
/// session replaces the whole record instead of editing it in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRequest {
    pub distribution: Distribution,
    pub distribution_version: String,
    pub architecture: Architecture,
    pub hostname: String,
    pub username: String,
    /// Carried for completeness, never sent to the completion service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    packages: IndexSet<String>,
    #[serde(default)]
    pub custom_instructions: String,
    #[serde(default)]
    pub cloud_init_enabled: bool,
}

impl Default for ImageRequest {
    fn default() -> Self {
        Self {
            distribution: Distribution::Ubuntu,
            distribution_version: "24.04 LTS".to_string(),
            architecture: Architecture::X86_64,
            hostname: "linux-custom".to_string(),
            username: "admin".to_string(),
            password: None,
            packages: ["curl", "git", "vim", "htop"]
                .into_iter()
                .map(String::from)
                .collect(),
            custom_instructions: String::new(),
            cloud_init_enabled: true,
        }
    }
}

impl ImageRequest {
    /// Packages in insertion (display) order
    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.packages.iter().map(String::as_str)
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    pub fn has_package(&self, name: &str) -> bool {
        self.packages.contains(name.trim())
    }

    /// Add a package, keeping the list free of duplicates
    ///
    /// Returns false when the name is blank or already present.
    pub fn add_package(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        self.packages.insert(name.to_string())
    }

    /// Remove a package, preserving the order of the remaining ones
    pub fn remove_package(&mut self, name: &str) -> bool {
        self.packages.shift_remove(name.trim())
    }

    /// Replace the package list, dropping blanks and duplicates
    pub fn set_packages<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.packages.clear();
        for name in names {
            self.add_package(name.as_ref());
        }
    }

    /// Builder-style variant of [`ImageRequest::add_package`]
    pub fn with_package(mut self, name: &str) -> Self {
        self.add_package(name);
        self
    }
}
