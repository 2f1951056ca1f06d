//! crashsnap CLI
//!
//! Command-line tools for crash report files.
//!
//! # Commands
//!
//! - `inspect` - Display the header and section counts of a report
//! - `render` - Render a report as its JSON event document
//! - `upgrade` - Rewrite a report in the current format version
//! - `verify` - Check that every report in a directory can be read

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// crashsnap command-line report tools.
#[derive(Parser)]
#[command(name = "crashsnap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the header and section counts of a report file
    Inspect {
        /// Report file
        file: PathBuf,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Render a report file as its JSON event document
    Render {
        /// Report file
        file: PathBuf,

        /// Pretty-print the document
        #[arg(short, long)]
        pretty: bool,

        /// Write the document here instead of standard output
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rewrite a report file in the current format version
    Upgrade {
        /// Report file to read
        src: PathBuf,

        /// Destination for the upgraded report
        dst: PathBuf,
    },

    /// Check that every report file in a directory can be read
    Verify {
        /// Directory of report files
        dir: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Inspect { file, format } => {
            commands::inspect::run(&file, &format)?;
        }
        Commands::Render {
            file,
            pretty,
            output,
        } => {
            commands::render::run(&file, pretty, output.as_deref())?;
        }
        Commands::Upgrade { src, dst } => {
            commands::upgrade::run(&src, &dst)?;
        }
        Commands::Verify { dir } => {
            commands::verify::run(&dir)?;
        }
        Commands::Version => {
            println!("crashsnap CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("crashsnap core v{}", crashsnap_core::VERSION);
            println!(
                "Report format v{}",
                crashsnap_core::CURRENT_VERSION
            );
        }
    }

    Ok(())
}
