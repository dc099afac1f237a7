use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use faces_core::AppConfig;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "faces")]
#[command(author, version, about = "Facing my faces: a multi-locale illustration gallery")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (defaults to ~/.config/faces/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the site
    Serve {
        /// Address to listen on, overrides [server].bind
        #[arg(short = 'b', long)]
        bind: Option<String>,
    },
    /// Print a content directory feed and its pair grid
    Feed {
        /// Directory name, defaults to the gallery directory
        directory: Option<String>,
    },
    /// Show the previous/next items the site links from an item
    Siblings {
        /// Item slug
        slug: String,
        /// Directory name, defaults to the gallery directory
        #[arg(short = 'd', long)]
        directory: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_filter = logging::init();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    logging::apply_config_level(&log_filter, &config.general.log_level);
    let config = Arc::new(config);

    match cli.command {
        Some(Commands::Serve { bind }) => commands::serve::run(config, bind).await,
        None => commands::serve::run(config, None).await,
        Some(Commands::Feed { directory }) => {
            commands::feed::run(&config, directory.as_deref()).await
        }
        Some(Commands::Siblings { slug, directory }) => {
            commands::siblings::run(&config, directory.as_deref(), &slug).await
        }
    }
}
