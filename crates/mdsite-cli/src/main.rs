//! mdsite CLI - static site generator.
//!
//! Provides commands for:
//! - `build`: Regenerate the public directory from static files and Markdown pages
//! - `render`: Print the HTML fragment for one Markdown file

mod config;
mod error;
mod site;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{SiteArgs, SiteConfig};
use error::Result;

/// mdsite - Markdown static site generator.
#[derive(Parser)]
#[command(name = "mdsite", version, about)]
struct Cli {
    /// Log build progress (otherwise RUST_LOG controls logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild the public directory.
    Build(SiteArgs),
    /// Render one Markdown file to stdout.
    Render {
        /// Markdown file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli.command) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Build(args) => {
            let config = SiteConfig::from(args);
            let pages = site::build(&config)?;
            info!(pages, public = %config.public_dir.display(), "site built");
        }
        Commands::Render { file } => {
            println!("{}", site::render_file(&file)?);
        }
    }
    Ok(())
}
