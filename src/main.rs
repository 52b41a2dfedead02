//! Distro Blueprint - Generate configuration bundles for custom Linux images
//!
//! Command-line front end over the blueprint command layer.

mod cli;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use distro_blueprint::settings::{settings_path, Settings};
use distro_blueprint::{config, log_debug, log_info, logging};

#[derive(Parser)]
#[command(
    name = "distro-blueprint",
    version,
    about = "Generate unattended-install and boot configuration bundles for custom Linux images"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in request templates
    Templates,
    /// Print the generation prompt without calling the service
    Prompt {
        #[command(flatten)]
        request: cli::RequestArgs,
    },
    /// Generate a blueprint and export it as JSON
    Generate {
        #[command(flatten)]
        request: cli::RequestArgs,
        /// Directory to write the export to (default: Downloads)
        #[arg(long, short)]
        out: Option<PathBuf>,
        /// Print every artifact body after generation
        #[arg(long)]
        print: bool,
    },
    /// Ask the assistant a free-form question
    Chat {
        /// Question to send
        prompt: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let settings_file = settings_path();
    let settings = Settings::load_or_default(&settings_file);
    if settings.developer_mode && !cli.verbose {
        logging::set_log_level(true);
    }

    log_info!("main", "=== {} {} ===", config::app::NAME, env!("CARGO_PKG_VERSION"));
    log_debug!("main", "Settings file: {}", settings_file.display());

    let api = settings.resolve_api();

    match cli.command {
        Commands::Templates => cli::templates(),
        Commands::Prompt { request } => cli::prompt(&request),
        Commands::Generate {
            request,
            out,
            print,
        } => cli::generate(&request, out, print, &api).await,
        Commands::Chat { prompt } => cli::chat(&prompt, &api).await,
    }
}
