//! TargetKit CLI — Command-line interface for morph-target imports.
//!
//! Usage:
//!   targetkit load --mesh <MESH> <FILE>         Import one target file
//!   targetkit batch --mesh <MESH> --dir <DIR> <NAMES>...
//!                                               Import many target files
//!   targetkit inspect <FILE>                    Summarize a target file
//!   targetkit init <NAME>                       Create an empty mesh document

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "targetkit",
    about = "Import vertex-displacement targets as mesh shape keys",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import a single target file as a shape key
    Load {
        /// Path to the mesh document
        #[arg(short, long)]
        mesh: PathBuf,

        /// Scene scale unit: m|dm|cm (defaults to the configured unit)
        #[arg(short, long)]
        unit: Option<String>,

        /// Target file to import
        file: PathBuf,
    },

    /// Import a batch of target files from one directory
    Batch {
        /// Path to the mesh document
        #[arg(short, long)]
        mesh: PathBuf,

        /// Scene scale unit: m|dm|cm (defaults to the configured unit)
        #[arg(short, long)]
        unit: Option<String>,

        /// Directory holding the target files
        #[arg(short, long)]
        dir: PathBuf,

        /// Target file names, processed in the order given
        #[arg(required = true)]
        files: Vec<String>,
    },

    /// Parse a target file and print a summary
    Inspect {
        /// Target file to inspect
        file: PathBuf,
    },

    /// Create a new empty base mesh document
    Init {
        /// Mesh name
        name: String,

        /// Number of base vertices
        #[arg(long, default_value = "8")]
        vertices: usize,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Config is loaded before the subscriber exists; its diagnostics are
    // surfaced once logging is up.
    let (config, config_diagnostics) =
        targetkit_common::config::AppConfig::load_with_diagnostics();

    let logging = if cli.verbose {
        config.logging.with_level("debug")
    } else {
        config.logging.clone()
    };
    targetkit_common::logging::init_logging(&logging);

    for message in config_diagnostics {
        tracing::warn!("{message}");
    }

    match cli.command {
        Commands::Load { mesh, unit, file } => commands::load::run(mesh, file, unit, &config),
        Commands::Batch {
            mesh,
            unit,
            dir,
            files,
        } => commands::batch::run(mesh, dir, files, unit, &config),
        Commands::Inspect { file } => commands::inspect::run(file),
        Commands::Init {
            name,
            vertices,
            output,
        } => commands::init::run(name, vertices, output),
    }
}
