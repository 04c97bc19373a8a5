mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{edit, inspect, EditArgs, InspectArgs};
use config::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// LivePDF CLI - inspect and edit the text of PDF glyph dumps
#[derive(Parser, Debug)]
#[command(name = "livepdf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to ./livepdf.config.json when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show pages, paragraphs and statistics of a glyph dump
    Inspect(InspectArgs),

    /// Apply an action script to one paragraph and print the result
    Edit(EditArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::load(&cwd, cli.config.as_deref())?;

    match cli.command {
        Command::Inspect(args) => inspect(args, &config),
        Command::Edit(args) => edit(args, &config),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
