//! Command-line front end
//!
//! Each subcommand builds an [`AppState`], drives it through the command
//! layer and prints the outcome.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, bail, Context};
use clap::Args;

use distro_blueprint::blueprint::{build_prompt, BlueprintGenerator};
use distro_blueprint::commands::{form, operations, progress, AppState, Severity};
use distro_blueprint::completion::GeminiClient;
use distro_blueprint::request::{Architecture, Distribution, ImageRequest};
use distro_blueprint::settings::ApiSettings;
use distro_blueprint::utils::{count_lines, format_size, get_export_dir};
use distro_blueprint::{log_debug, log_info};

const MODULE: &str = "cli";

/// Options describing the image request
#[derive(Args, Debug, Clone, Default)]
pub struct RequestArgs {
    /// Start from a built-in template (see `templates`)
    #[arg(long, short)]
    pub template: Option<String>,
    /// Start from an image request JSON file
    #[arg(long, conflicts_with = "template")]
    pub request: Option<PathBuf>,
    /// Target distribution (ubuntu, debian, archlinux, fedora, alpine)
    #[arg(long)]
    pub distro: Option<Distribution>,
    /// Distribution version label, e.g. "24.04 LTS"
    #[arg(long)]
    pub distro_version: Option<String>,
    /// Target architecture (x86_64, aarch64)
    #[arg(long)]
    pub arch: Option<Architecture>,
    #[arg(long)]
    pub hostname: Option<String>,
    #[arg(long)]
    pub username: Option<String>,
    /// Package to install (repeatable)
    #[arg(long = "package", short = 'p')]
    pub packages: Vec<String>,
    /// Package to drop from the starting list (repeatable)
    #[arg(long = "remove-package")]
    pub remove_packages: Vec<String>,
    /// Free-text customization notes
    #[arg(long)]
    pub instructions: Option<String>,
    /// Disable cloud-init style automation
    #[arg(long)]
    pub no_cloud_init: bool,
}

/// Build session state from the request options
pub fn build_state(args: &RequestArgs) -> anyhow::Result<AppState> {
    let state = AppState::default();

    if let Some(ref id) = args.template {
        form::load_template(&state, id).map_err(|e| anyhow!(e))?;
    }
    if let Some(ref path) = args.request {
        form::replace_request(&state, read_request(path)?);
    }

    if let Some(distribution) = args.distro {
        form::set_distribution(&state, distribution);
    }
    if let Some(ref version) = args.distro_version {
        form::set_distribution_version(&state, version.clone());
    }
    if let Some(architecture) = args.arch {
        form::set_architecture(&state, architecture);
    }
    if let Some(ref hostname) = args.hostname {
        form::set_hostname(&state, hostname.clone());
    }
    if let Some(ref username) = args.username {
        form::set_username(&state, username.clone());
    }
    for name in &args.remove_packages {
        form::remove_package(&state, name);
    }
    for name in &args.packages {
        form::add_package(&state, name);
    }
    if let Some(ref instructions) = args.instructions {
        form::set_custom_instructions(&state, instructions.clone());
    }
    if args.no_cloud_init {
        form::set_cloud_init(&state, false);
    }

    Ok(state)
}

fn read_request(path: &Path) -> anyhow::Result<ImageRequest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let request = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse image request {}", path.display()))?;
    log_debug!(MODULE, "Loaded request from {}", path.display());
    Ok(request)
}

fn generator(api: &ApiSettings) -> anyhow::Result<BlueprintGenerator> {
    let client = GeminiClient::new(api).context("Failed to create completion client")?;
    log_info!(MODULE, "Using model {} at {}", client.model(), api.base_url);
    Ok(BlueprintGenerator::new(Arc::new(client)))
}

fn print_request(request: &ImageRequest) {
    println!(
        "{} {} ({}) host={} user={} cloud-init={}",
        request.distribution,
        request.distribution_version,
        request.architecture,
        request.hostname,
        request.username,
        if request.cloud_init_enabled { "on" } else { "off" }
    );
    println!(
        "  packages: {}",
        request.packages().collect::<Vec<_>>().join(", ")
    );
}

pub fn templates() -> anyhow::Result<()> {
    for template in form::list_templates() {
        println!("{:<20} {}", template.id, template.label);
        println!("{:<20} {}", "", template.description);
        print!("{:<20} ", "");
        print_request(&template.request);
        println!();
    }
    Ok(())
}

pub fn prompt(args: &RequestArgs) -> anyhow::Result<()> {
    let state = build_state(args)?;
    println!("{}", build_prompt(&state.request()));
    Ok(())
}

pub async fn generate(
    args: &RequestArgs,
    out: Option<PathBuf>,
    print_contents: bool,
    api: &ApiSettings,
) -> anyhow::Result<()> {
    let state = build_state(args)?;
    let generator = generator(api)?;
    print_request(&state.request());

    let artifacts = operations::generate(&state, &generator)
        .await
        .map_err(|e| anyhow!(e))?;

    for entry in progress::get_build_log(&state) {
        let tag = match entry.severity {
            Severity::Info => "INFO",
            Severity::Success => "DONE",
            Severity::Warning => "WARN",
            Severity::Error => "FAIL",
        };
        println!("[{}] {} {}", entry.timestamp, tag, entry.message);
    }

    if progress::has_errors(&state) {
        bail!("Blueprint generation failed");
    }

    println!();
    for artifact in &artifacts {
        println!(
            "  {:<28} {:<10} {:>5} lines  {}",
            artifact.name,
            artifact.language,
            count_lines(&artifact.content),
            format_size(artifact.content.len() as u64)
        );
    }

    if print_contents {
        for artifact in &artifacts {
            println!("\n===== {} ({}) =====", artifact.name, artifact.language);
            println!("{}", artifact.content);
        }
    }

    let dir = out.unwrap_or_else(get_export_dir);
    let path = operations::export_artifacts(&state, &dir).map_err(|e| anyhow!(e))?;
    println!("\nBlueprint exported to {}", path.display());
    Ok(())
}

pub async fn chat(prompt: &str, api: &ApiSettings) -> anyhow::Result<()> {
    let generator = generator(api)?;
    let answer = operations::assist(&generator, prompt)
        .await
        .map_err(|e| anyhow!(e))?;
    println!("{}", answer);
    Ok(())
}
