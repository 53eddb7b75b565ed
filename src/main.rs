use anyhow::Result;
use clap::{Parser, Subcommand};
use modelgraph::cli::{self, OutputFormat};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Reflects domain-model type descriptors into a reference graph and renders
/// it as diagram markup.
#[derive(Parser)]
#[command(name = "mgtool", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate diagram markup from a model descriptor file.
    Generate {
        /// Path to the JSON model descriptor file.
        model: PathBuf,
        /// Output file; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output markup format.
        #[arg(short, long, value_enum, default_value = "mermaid")]
        format: OutputFormat,
    },
    /// Print node/edge counts for a model descriptor file.
    Stats {
        /// Path to the JSON model descriptor file.
        model: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate {
            model,
            output,
            format,
        } => cli::generate(&model, output.as_deref(), format),
        Command::Stats { model } => cli::stats(&model),
    }
}
