//! Shear Force Diagram
//!
//! Samples shear force on a uniform grid from the left (fixed) end to the
//! far end. Reactions are solved internally, so callers only pass the beam.
//!
//! ## Convention
//!
//! ```text
//! V(x) = V_a - Σ { P : a ≤ x }
//! ```
//!
//! The boundary is inclusive: at a grid point that lands exactly on a load,
//! the diagram already shows the value after the step.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::field::{linspace, FieldSample};
use crate::calculations::reactions::solve;
use crate::derivation::{Derivation, DerivationLine};
use crate::errors::{CalcError, CalcResult};
use crate::loads::PointLoad;
use crate::supports::SupportConfiguration;
use crate::units::Unit;

/// Number of grid points used when the caller does not choose one
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// How a grid point is matched to a load location for the derivation trace
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "rule", content = "epsilon_m", rename_all = "snake_case")]
pub enum Coincidence {
    /// Bitwise float equality; only fires when a load sits exactly on the grid
    #[default]
    Exact,
    /// `|x - a| <= epsilon` (m)
    Tolerance(f64),
}

impl Coincidence {
    fn matches(&self, x_m: f64, location_m: f64) -> bool {
        match self {
            Coincidence::Exact => x_m == location_m,
            Coincidence::Tolerance(epsilon) => (x_m - location_m).abs() <= *epsilon,
        }
    }
}

/// Sampling options for [`sample_with`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShearOptions {
    /// Grid points from 0 to span inclusive (at least 2)
    pub sample_count: usize,
    /// Which grid points get a trace line
    pub coincidence: Coincidence,
}

impl Default for ShearOptions {
    fn default() -> Self {
        ShearOptions {
            sample_count: DEFAULT_SAMPLE_COUNT,
            coincidence: Coincidence::Exact,
        }
    }
}

impl ShearOptions {
    /// Validate option values.
    pub fn validate(&self) -> CalcResult<()> {
        if self.sample_count < 2 {
            return Err(CalcError::invalid_input(
                "sample_count",
                self.sample_count.to_string(),
                "At least two sample points are needed to form a diagram",
            ));
        }
        if let Coincidence::Tolerance(epsilon) = self.coincidence {
            if !epsilon.is_finite() || epsilon < 0.0 {
                return Err(CalcError::invalid_input(
                    "coincidence.epsilon_m",
                    epsilon.to_string(),
                    "Tolerance must be a finite, non-negative distance",
                ));
            }
        }
        Ok(())
    }
}

/// Sample the shear force with exact coincidence matching.
///
/// # Example
/// ```rust
/// use beam_core::calculations::shear::sample;
/// use beam_core::loads::PointLoad;
/// use beam_core::supports::SupportConfiguration;
///
/// let loads = [PointLoad::new(12.5, 12.5).unwrap()];
/// let (field, _) = sample(&SupportConfiguration::Cantilever, 25.0, &loads, 100).unwrap();
///
/// assert_eq!(field.len(), 100);
/// assert_eq!(field.first().unwrap().value, 12.5);
/// assert_eq!(field.value_at_or_after(12.5), Some(0.0));
/// ```
pub fn sample(
    config: &SupportConfiguration,
    span_m: f64,
    loads: &[PointLoad],
    sample_count: usize,
) -> CalcResult<(FieldSample, Derivation)> {
    let options = ShearOptions {
        sample_count,
        ..ShearOptions::default()
    };
    sample_with(config, span_m, loads, &options)
}

/// Sample the shear force with explicit options.
///
/// # Errors
/// Invalid options, plus anything the reaction solver rejects.
pub fn sample_with(
    config: &SupportConfiguration,
    span_m: f64,
    loads: &[PointLoad],
    options: &ShearOptions,
) -> CalcResult<(FieldSample, Derivation)> {
    options.validate()?;
    let (reactions, _) = solve(config, span_m, loads)?;

    // Both configurations walk from the left (fixed) end
    let start_kn = reactions.va_kn;

    let grid = linspace(0.0, span_m, options.sample_count);
    let mut field = FieldSample::with_capacity(grid.len());
    for &x in &grid {
        let passed: f64 = loads
            .iter()
            .filter(|load| load.location_m() <= x)
            .map(PointLoad::magnitude_kn)
            .sum();
        field.push(x, start_kn - passed);
    }

    let mut critical = vec![0];
    critical.extend(
        grid.iter()
            .enumerate()
            .filter(|&(_, &x)| {
                loads
                    .iter()
                    .any(|load| options.coincidence.matches(x, load.location_m()))
            })
            .map(|(i, _)| i),
    );
    critical.push(grid.len() - 1);

    let mut lines = Vec::with_capacity(critical.len() + 1);
    lines.push(DerivationLine::heading("Shear Force Diagram Calculations:"));
    for i in critical {
        let point = field.points()[i];
        lines.push(DerivationLine::value(
            format!("V(x = {:.2})", point.position_m),
            point.value,
            Unit::KiloNewton,
        ));
    }

    debug!(
        samples = field.len(),
        trace_lines = lines.len() - 1,
        "sampled shear field"
    );

    Ok((field, Derivation::Steps(lines)))
}
