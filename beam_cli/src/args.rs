//! Command-line arguments
//!
//! A beam comes either from a JSON file (`--input`) or from flags; flags
//! given alongside a file override the matching fields.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use beam_core::calculations::{Coincidence, DEFAULT_SAMPLE_COUNT};
use beam_core::{AnalysisOptions, BeamInput, MomentMode, PointLoad, SupportConfiguration, SupportType};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{debug, warn};

#[derive(Debug, Parser)]
#[command(name = "beam_cli", version, about = "Single-span beam analysis: reactions, shear and moment diagrams")]
pub struct Cli {
    /// Log calculation details (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a beam and print reactions, diagrams and derivations
    Analyze(AnalyzeArgs),
    /// Print an example beam definition as JSON
    Template,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SupportArg {
    SimplySupported,
    Cantilever,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EndArg {
    Pin,
    Roller,
    Fixed,
}

impl From<EndArg> for SupportType {
    fn from(end: EndArg) -> Self {
        match end {
            EndArg::Pin => SupportType::Pin,
            EndArg::Roller => SupportType::Roller,
            EndArg::Fixed => SupportType::Fixed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// Full analysis as JSON
    Json,
    /// Derivations as LaTeX
    Latex,
}

#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Beam definition file (JSON)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Span length (m)
    #[arg(long)]
    pub span: Option<f64>,

    /// Support configuration
    #[arg(long, value_enum)]
    pub support: Option<SupportArg>,

    /// Left end tag (simply supported only, display only)
    #[arg(long, value_enum)]
    pub left: Option<EndArg>,

    /// Right end tag (simply supported only, display only)
    #[arg(long, value_enum)]
    pub right: Option<EndArg>,

    /// Point load as MAGNITUDE@LOCATION in kN and m, e.g. 12.5@4 (repeatable)
    #[arg(long = "load", value_name = "P@A", value_parser = parse_load, allow_hyphen_values = true)]
    pub loads: Vec<PointLoad>,

    /// Shear diagram grid points
    #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    pub samples: usize,

    /// Match shear trace points to loads within this distance (m) instead of exactly
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Superpose all loads in the moment diagram
    #[arg(long)]
    pub superpose: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl AnalyzeArgs {
    /// Build the beam from the input file and/or flags
    pub fn beam_input(&self) -> Result<BeamInput> {
        let mut input = match &self.input {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("failed to read beam file '{}'", path.display()))?;
                let input = BeamInput::from_json(&json)
                    .with_context(|| format!("failed to parse beam file '{}'", path.display()))?;
                debug!(path = %path.display(), loads = input.loads.len(), "loaded beam file");
                input
            }
            None => match self.span {
                Some(span_m) => BeamInput::new(span_m, SupportConfiguration::default()).with_label("CLI"),
                None => bail!("either --input or --span is required"),
            },
        };

        if let Some(span_m) = self.span {
            input.span_m = span_m;
        }

        input.supports = self.supports(input.supports);
        input.loads.extend(self.loads.iter().copied());

        Ok(input)
    }

    fn supports(&self, current: SupportConfiguration) -> SupportConfiguration {
        let (left, right) = match current {
            SupportConfiguration::SimplySupported { left, right } => (left, right),
            SupportConfiguration::Cantilever => (SupportType::Pin, SupportType::Roller),
        };
        let left = self.left.map(SupportType::from).unwrap_or(left);
        let right = self.right.map(SupportType::from).unwrap_or(right);

        let cantilever = match self.support {
            Some(SupportArg::Cantilever) => true,
            Some(SupportArg::SimplySupported) => false,
            None => current == SupportConfiguration::Cantilever,
        };

        if cantilever {
            if self.left.is_some() || self.right.is_some() {
                warn!("--left/--right are ignored for a cantilever (fixed / free)");
            }
            SupportConfiguration::Cantilever
        } else {
            SupportConfiguration::simply_supported(left, right)
        }
    }

    /// Analysis options from flags
    pub fn options(&self) -> AnalysisOptions {
        AnalysisOptions {
            sample_count: self.samples,
            coincidence: match self.tolerance {
                Some(epsilon) => Coincidence::Tolerance(epsilon),
                None => Coincidence::Exact,
            },
            moment_mode: if self.superpose {
                MomentMode::Superposed
            } else {
                MomentMode::Compatible
            },
        }
    }
}

/// Parse `MAGNITUDE@LOCATION`
fn parse_load(text: &str) -> Result<PointLoad, String> {
    let (magnitude, location) = text
        .split_once('@')
        .ok_or_else(|| format!("expected MAGNITUDE@LOCATION, got '{}'", text))?;
    let magnitude: f64 = magnitude
        .trim()
        .parse()
        .map_err(|_| format!("invalid load magnitude '{}'", magnitude))?;
    let location: f64 = location
        .trim()
        .parse()
        .map_err(|_| format!("invalid load location '{}'", location))?;
    PointLoad::new(magnitude, location).map_err(|e| e.to_string())
}
