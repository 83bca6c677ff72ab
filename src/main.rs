//! Panelgen - VCV Rack panel-to-source helper
//!
//! Reads the `components` layer of an SVG panel and generates the
//! `ModuleWidget` statements that place each param, port, light, and widget.

use clap::{Parser, Subcommand};
use panelgen::cli::{CliError, CliResult, CreateModuleArgs, ExitCode, InspectArgs};
use panelgen::config::Config;
use panelgen::constants::{APP_BINARY_NAME, APP_NAME};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Panelgen - generate VCV Rack widget source from SVG panels
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate widget source for a module from its panel
    #[command(after_help = format!(
        "Example:\n  {APP_BINARY_NAME} createmodule MyModule res/MyModule.svg src/MyModule.cpp\n\n\
         See https://vcvrack.com/manual/PanelTutorial.html for creating SVG panel files."
    ))]
    Createmodule(CreateModuleArgs),

    /// List the components found on a panel
    Inspect(InspectArgs),
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run(&cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code
        }
    };
    std::process::exit(exit_code.code());
}

fn run(cli: &Cli) -> CliResult<()> {
    let config = Config::load(cli.config.as_deref())
        .map_err(|e| CliError::validation(format!("{e:#}")))?;
    tracing::debug!(app = APP_NAME, ?config, "configuration loaded");

    match &cli.command {
        Command::Createmodule(args) => args.execute(&config),
        Command::Inspect(args) => args.execute(&config),
    }
}
