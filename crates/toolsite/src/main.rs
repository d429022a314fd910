//! toolsite CLI - build a launcher site from a manifest of HTML tool templates.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "toolsite")]
#[command(about = "Build a launcher site from a manifest of HTML tool templates")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Project root holding tools.json and templates/
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Path to toolsite.toml config file (defaults to <root>/toolsite.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Commands {
    /// Render every tool page and the index (the default)
    Build {
        /// Output directory (defaults to config or "docs")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// HTML-escape names and descriptions on the index page
        #[arg(long)]
        escape_html: bool,

        /// Fail when two tools write the same output file
        #[arg(long)]
        deny_duplicates: bool,
    },

    /// Create a starter manifest and template
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        yes: bool,
    },

    /// Validate the manifest and templates without writing anything
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let command = cli.command.unwrap_or(Commands::Build {
        output: None,
        escape_html: false,
        deny_duplicates: false,
    });

    match command {
        Commands::Build {
            output,
            escape_html,
            deny_duplicates,
        } => {
            let overrides = config::Overrides {
                output,
                escape_html,
                deny_duplicate_outputs: deny_duplicates,
            };
            commands::build::run(&cli.root, cli.config.as_deref(), overrides)?;
        }
        Commands::Init { yes } => {
            commands::init::run(&cli.root, yes)?;
        }
        Commands::Check => {
            commands::check::run(&cli.root, cli.config.as_deref())?;
        }
    }

    Ok(())
}
