//! Bending Moment Diagram
//!
//! Moments are reported only at characteristic positions (supports and load
//! locations), not on a uniform grid. Positive moment is sagging; a
//! cantilever's fixed end hogs, so its moments come out negative.
//!
//! ## Modes
//!
//! [`MomentMode::Compatible`] reproduces the single-load idealization the
//! diagrams have always used:
//!
//! ```text
//! Cantilever:        (0, -P·a), (a, 0)  per load, then (L, 0) if a < L
//! Simply supported:  (0, 0), (a, V_a·a) per load, (L, 0)
//! ```
//!
//! Each load is treated on its own, so with several loads the values are
//! only exact for the dominant one and the points follow load order.
//!
//! [`MomentMode::Superposed`] evaluates the full superposed moment at the
//! sorted, de-duplicated critical positions `{0, a_i, L}`:
//!
//! ```text
//! Simply supported:  M(x) = V_a·x - Σ { P·(x - a) : a < x }
//! Cantilever:        M(x) = -Σ { P·(a - x) : a > x }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::field::FieldSample;
use crate::calculations::reactions::ReactionSet;
use crate::derivation::{Derivation, DerivationLine};
use crate::errors::CalcResult;
use crate::loads::{validate_loads, validate_span, PointLoad};
use crate::supports::SupportConfiguration;
use crate::units::Unit;

/// Which moment algorithm to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MomentMode {
    /// Per-load critical points in load order (single-load idealization)
    #[default]
    Compatible,
    /// True superposition of all loads at sorted critical positions
    Superposed,
}

/// Bending moment at the critical points, compatible mode.
///
/// Takes the reactions explicitly because the simply-supported diagram
/// needs the already-solved `V_a`.
///
/// # Example
/// ```rust
/// use beam_core::calculations::moment::moment_field;
/// use beam_core::calculations::reactions::solve;
/// use beam_core::loads::PointLoad;
/// use beam_core::supports::SupportConfiguration;
///
/// let config = SupportConfiguration::Cantilever;
/// let loads = [PointLoad::new(12.5, 12.5).unwrap()];
/// let (reactions, _) = solve(&config, 25.0, &loads).unwrap();
/// let (field, _) = moment_field(&config, 25.0, &loads, &reactions).unwrap();
///
/// assert_eq!(field.first().unwrap().value, -156.25);
/// assert_eq!(field.positions(), vec![0.0, 12.5, 25.0]);
/// ```
pub fn moment_field(
    config: &SupportConfiguration,
    span_m: f64,
    loads: &[PointLoad],
    reactions: &ReactionSet,
) -> CalcResult<(FieldSample, Derivation)> {
    moment_field_with(config, span_m, loads, reactions, MomentMode::Compatible)
}

/// Bending moment at the critical points using the chosen mode.
///
/// An empty load sequence yields the two zero-moment anchors `(0, 0)` and
/// `(L, 0)` for every configuration and mode.
pub fn moment_field_with(
    config: &SupportConfiguration,
    span_m: f64,
    loads: &[PointLoad],
    reactions: &ReactionSet,
    mode: MomentMode,
) -> CalcResult<(FieldSample, Derivation)> {
    validate_span(span_m)?;
    validate_loads(loads, span_m)?;

    let field = if loads.is_empty() {
        let mut anchors = FieldSample::with_capacity(2);
        anchors.push(0.0, 0.0);
        anchors.push(span_m, 0.0);
        anchors
    } else {
        match mode {
            MomentMode::Compatible => compatible_field(config, span_m, loads, reactions),
            MomentMode::Superposed => superposed_field(config, span_m, loads, reactions),
        }
    };

    let mut lines = Vec::with_capacity(field.len() + 1);
    lines.push(DerivationLine::heading("Bending Moment Diagram Calculations:"));
    for point in &field {
        lines.push(DerivationLine::value(
            format!("M(x = {:.2})", point.position_m),
            point.value,
            Unit::KiloNewtonMeter,
        ));
    }

    debug!(?mode, points = field.len(), "built moment field");

    Ok((field, Derivation::Steps(lines)))
}

fn compatible_field(
    config: &SupportConfiguration,
    span_m: f64,
    loads: &[PointLoad],
    reactions: &ReactionSet,
) -> FieldSample {
    match config {
        SupportConfiguration::Cantilever => {
            let mut field = FieldSample::with_capacity(2 * loads.len() + 1);
            for load in loads {
                field.push(0.0, -load.moment_about(0.0));
                field.push(load.location_m(), 0.0);
            }
            // Free end, unless the last load already sits on it
            if let Some(last) = loads.last() {
                if last.location_m() < span_m {
                    field.push(span_m, 0.0);
                }
            }
            field
        }
        SupportConfiguration::SimplySupported { .. } => {
            let mut field = FieldSample::with_capacity(loads.len() + 2);
            field.push(0.0, 0.0);
            for load in loads {
                field.push(load.location_m(), reactions.va_kn * load.location_m());
            }
            field.push(span_m, 0.0);
            field
        }
    }
}

fn superposed_field(
    config: &SupportConfiguration,
    span_m: f64,
    loads: &[PointLoad],
    reactions: &ReactionSet,
) -> FieldSample {
    let positions = critical_positions(span_m, loads);
    let mut field = FieldSample::with_capacity(positions.len());
    for x in positions {
        let value = match config {
            SupportConfiguration::SimplySupported { .. } => {
                simply_supported_moment_at(x, loads, reactions.va_kn)
            }
            SupportConfiguration::Cantilever => cantilever_moment_at(x, loads),
        };
        field.push(x, value);
    }
    field
}

/// Supports plus every load location, sorted and de-duplicated
fn critical_positions(span_m: f64, loads: &[PointLoad]) -> Vec<f64> {
    let mut positions = Vec::with_capacity(loads.len() + 2);
    positions.push(0.0);
    positions.extend(loads.iter().map(PointLoad::location_m));
    positions.push(span_m);
    positions.sort_by(f64::total_cmp);
    positions.dedup();
    positions
}

/// Section moment from the free body left of `x` (sagging positive)
fn simply_supported_moment_at(x_m: f64, loads: &[PointLoad], va_kn: f64) -> f64 {
    let loads_left: f64 = loads
        .iter()
        .filter(|load| load.location_m() < x_m)
        .map(|load| -load.moment_about(x_m))
        .sum();
    va_kn * x_m - loads_left
}

/// Section moment from the free body right of `x` (hogging negative)
fn cantilever_moment_at(x_m: f64, loads: &[PointLoad]) -> f64 {
    let loads_right: f64 = loads
        .iter()
        .filter(|load| load.location_m() > x_m)
        .map(|load| load.moment_about(x_m))
        .sum();
    0.0 - loads_right
}
