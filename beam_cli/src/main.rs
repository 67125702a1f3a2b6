//! # Beamline CLI Application
//!
//! Command-line front end for `beam_core`: reads a beam from flags or a JSON
//! file, runs the analysis and prints reactions, diagrams and derivations.
//!
//! ```text
//! beam_cli analyze --span 25 --support cantilever --load 12.5@12.5
//! beam_cli analyze --input beam.json --superpose --format json
//! beam_cli template > beam.json
//! ```

mod args;
mod report;

use std::process::ExitCode;

use anyhow::Result;
use beam_core::{analyze, BeamInput, CalcError, PointLoad, SupportConfiguration};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::args::{AnalyzeArgs, Cli, Command, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize structured logging (stderr, so JSON output stays clean)
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("beam_core={0},beam_cli={0}", default_level))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting beam_cli v{}", env!("CARGO_PKG_VERSION"));

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if let Some(calc) = e.downcast_ref::<CalcError>() {
                if let Ok(json) = serde_json::to_string_pretty(calc) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Analyze(args) => run_analyze(&args),
        Command::Template => {
            println!("{}", template()?.to_json()?);
            Ok(())
        }
    }
}

fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let input = args.beam_input()?;
    let analysis = analyze(&input, &args.options())?;

    match args.format {
        OutputFormat::Text => report::print_text(&input, &analysis),
        OutputFormat::Json => report::print_json(&analysis)?,
        OutputFormat::Latex => report::print_latex(&analysis),
    }
    Ok(())
}

/// Example beam for `beam_cli template`
fn template() -> Result<BeamInput> {
    Ok(BeamInput::new(6.0, SupportConfiguration::default())
        .with_label("B-1")
        .with_load(PointLoad::new(20.0, 2.0)?)
        .with_load(PointLoad::new(15.0, 4.5)?))
}
