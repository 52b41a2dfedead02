//! Preset image requests
//!
//! Canned configurations that wholesale-replace the current request.

use serde::Serialize;

use crate::utils::normalize_slug;

use super::models::{Architecture, Distribution, ImageRequest};

/// A named preset configuration
#[derive(Debug, Clone, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub request: ImageRequest,
}

#[allow(clippy::too_many_arguments)]
fn request(
    distribution: Distribution,
    version: &str,
    architecture: Architecture,
    hostname: &str,
    username: &str,
    packages: &[&str],
    custom_instructions: &str,
    cloud_init_enabled: bool,
) -> ImageRequest {
    let mut request = ImageRequest::default();
    request.distribution = distribution;
    request.distribution_version = version.to_string();
    request.architecture = architecture;
    request.hostname = hostname.to_string();
    request.username = username.to_string();
    request.password = None;
    request.custom_instructions = custom_instructions.to_string();
    request.cloud_init_enabled = cloud_init_enabled;
    request.set_packages(packages);
    request
}

/// All built-in templates, in display order
pub fn templates() -> Vec<Template> {
    vec![
        Template {
            id: "ubuntu-server",
            label: "Ubuntu Server",
            description: "Headless Ubuntu LTS with SSH and a firewall",
            request: request(
                Distribution::Ubuntu,
                "24.04 LTS",
                Architecture::X86_64,
                "ubuntu-srv",
                "sysadmin",
                &["openssh-server", "htop", "ufw", "fail2ban"],
                "Enable UFW allowing only SSH. Disable root login over SSH.",
                true,
            ),
        },
        Template {
            id: "debian-minimal",
            label: "Debian Minimal",
            description: "Small Debian stable base for appliances",
            request: request(
                Distribution::Debian,
                "12 (Bookworm)",
                Architecture::X86_64,
                "debian-min",
                "admin",
                &["openssh-server", "sudo", "curl"],
                "Use a single ext4 root partition and no swap.",
                false,
            ),
        },
        Template {
            id: "arch-desktop",
            label: "Arch Desktop",
            description: "Rolling Arch Linux with a lightweight desktop",
            request: request(
                Distribution::ArchLinux,
                "rolling",
                Architecture::X86_64,
                "arch-box",
                "archer",
                &["base-devel", "xfce4", "lightdm", "networkmanager", "firefox"],
                "Enable NetworkManager and LightDM at boot.",
                false,
            ),
        },
        Template {
            id: "fedora-workstation",
            label: "Fedora Workstation",
            description: "Fedora workstation with developer tooling",
            request: request(
                Distribution::Fedora,
                "41",
                Architecture::X86_64,
                "fedora-ws",
                "developer",
                &["git", "podman", "vim-enhanced", "gcc"],
                "Use Btrfs with a separate home subvolume.",
                true,
            ),
        },
        Template {
            id: "alpine-edge",
            label: "Alpine Edge Node",
            description: "Tiny Alpine image for ARM edge devices",
            request: request(
                Distribution::Alpine,
                "3.20",
                Architecture::Aarch64,
                "edge-node",
                "edge",
                &["openssh", "chrony", "docker"],
                "Run docker at boot and keep the root filesystem read-only.",
                true,
            ),
        },
    ]
}

/// Look up a template by id (case and separator insensitive)
pub fn find_template(id: &str) -> Option<Template> {
    let wanted = normalize_slug(id);
    templates().into_iter().find(|t| t.id == wanted)
}
