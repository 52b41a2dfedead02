//! Prompt construction
//!
//! Turns an [`ImageRequest`] into the single instruction block sent to
//! the completion service. The per-distribution installer format is left
//! to the service; the prompt only lists examples.

use crate::request::ImageRequest;

/// Delimiter between package names in the prompt
pub const PACKAGE_DELIMITER: &str = ", ";

const ARTIFACT_INSTRUCTIONS: &str = "\
Generate the following files for this image:
1. README.md: a usage guide explaining how to turn these files into a bootable ISO \
with a local ISO-mastering tool (for example xorriso or Cubic), step by step.
2. The primary unattended-installation configuration for this distribution family \
(for example user-data autoinstall/cloud-init for Ubuntu, preseed.cfg for Debian, \
a kickstart file for Fedora, an archinstall JSON configuration for Arch Linux, \
an answers file for Alpine).
3. An automation script (for example build-iso.sh) that drives the image build process.
4. A boot-loader menu configuration (for example isolinux.cfg or grub.cfg).";

const RESPONSE_INSTRUCTIONS: &str = "\
Respond with a JSON array only. Each element must be an object with exactly the fields \
\"name\" (the file name), \"content\" (the full file body) and \"language\" \
(a syntax-highlighting hint such as yaml, bash, markdown or ini).";

fn or_none(value: &str) -> &str {
    if value.trim().is_empty() {
        "none"
    } else {
        value
    }
}

/// Build the blueprint prompt for `request`
///
/// The password is never included.
pub fn build_prompt(request: &ImageRequest) -> String {
    let packages = request.packages().collect::<Vec<_>>().join(PACKAGE_DELIMITER);
    let cloud_init = if request.cloud_init_enabled {
        "enabled"
    } else {
        "disabled"
    };

    format!(
        "You are an expert Linux systems engineer preparing a custom bootable installation image.\n\
         \n\
         Target distribution: {} {}\n\
         Target architecture: {}\n\
         Hostname: {}\n\
         Username: {}\n\
         Packages to install: {}\n\
         Cloud-init style automation: {}\n\
         Custom instructions: {}\n\
         \n\
         {}\n\
         \n\
         {}",
        request.distribution.display_name(),
        request.distribution_version,
        request.architecture,
        request.hostname,
        request.username,
        or_none(&packages),
        cloud_init,
        or_none(&request.custom_instructions),
        ARTIFACT_INSTRUCTIONS,
        RESPONSE_INSTRUCTIONS,
    )
}
