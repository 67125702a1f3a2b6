//! Support Reactions
//!
//! Static equilibrium of a single-span beam under point loads.
//!
//! ## Formulas
//!
//! Simply supported (span L, loads P at a):
//! ```text
//! ΣM_a = Σ P·a        V_b = ΣM_a / L
//! ΣM_b = Σ P·(L - a)  V_a = ΣM_b / L
//! ```
//!
//! Cantilever fixed at x = 0:
//! ```text
//! V_a = Σ P
//! M_a = Σ P·a   (hogging, reported positive)
//! ```
//!
//! A zero span is not an error: it yields zero reactions and a diagnostic
//! message so callers always have something to show.
//!
//! ## Example
//! ```rust
//! use beam_core::calculations::reactions::solve;
//! use beam_core::loads::PointLoad;
//! use beam_core::supports::SupportConfiguration;
//!
//! let loads = [PointLoad::new(12.5, 12.5).unwrap()];
//! let (reactions, trace) = solve(&SupportConfiguration::Cantilever, 25.0, &loads).unwrap();
//!
//! assert_eq!(reactions.va_kn, 12.5);
//! assert_eq!(reactions.ma_knm, 156.25);
//! println!("{}", trace);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::derivation::{Derivation, DerivationLine, Expr, Step};
use crate::errors::CalcResult;
use crate::loads::{total_load, validate_loads, validate_span, PointLoad};
use crate::supports::SupportConfiguration;
use crate::units::Unit;

/// Message returned in place of a trace when the span is zero
pub const ZERO_SPAN_MESSAGE: &str = "Span length cannot be zero.";

/// Support reactions for one (configuration, span, loads) triple.
///
/// Fields that do not apply to the configuration stay zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReactionSet {
    /// Vertical reaction at the left (or fixed) end (kN), positive upward
    pub va_kn: f64,
    /// Vertical reaction at the right end (kN), simply supported only
    pub vb_kn: f64,
    /// Fixed-end moment (kN·m), cantilever only
    pub ma_knm: f64,
}

impl ReactionSet {
    /// Sum of vertical reactions (kN)
    pub fn total_vertical_kn(&self) -> f64 {
        self.va_kn + self.vb_kn
    }
}

/// Solve the support reactions and explain how they were found.
///
/// # Errors
/// `InvalidInput` for a negative or non-finite span, `InvalidLoad` for a
/// load located beyond the span.
pub fn solve(
    config: &SupportConfiguration,
    span_m: f64,
    loads: &[PointLoad],
) -> CalcResult<(ReactionSet, Derivation)> {
    validate_span(span_m)?;
    validate_loads(loads, span_m)?;

    if span_m == 0.0 {
        warn!("zero span, returning zero reactions");
        return Ok((
            ReactionSet::default(),
            Derivation::Diagnostic(ZERO_SPAN_MESSAGE.to_string()),
        ));
    }

    let solved = match config {
        SupportConfiguration::SimplySupported { .. } => solve_simply_supported(span_m, loads),
        SupportConfiguration::Cantilever => solve_cantilever(loads),
    };

    debug!(
        config = config.display_name(),
        span_m,
        loads = loads.len(),
        va_kn = solved.0.va_kn,
        vb_kn = solved.0.vb_kn,
        ma_knm = solved.0.ma_knm,
        "solved reactions"
    );

    Ok(solved)
}

fn solve_simply_supported(span_m: f64, loads: &[PointLoad]) -> (ReactionSet, Derivation) {
    let total = total_load(loads);
    let mut moment_about_left = 0.0;
    let mut moment_about_right = 0.0;

    for load in loads {
        moment_about_left += load.magnitude_kn() * (span_m - load.location_m());
        moment_about_right += load.magnitude_kn() * load.location_m();
    }

    let mut reactions = ReactionSet::default();
    // No load, no reaction: keep the result exactly zero
    if total != 0.0 {
        reactions.vb_kn = moment_about_right / span_m;
        reactions.va_kn = moment_about_left / span_m;
    }

    let lines = vec![
        DerivationLine::heading("Simply Supported Beam:"),
        DerivationLine::Step(
            Step::new(
                Expr::new("Total point loads: ΣP", r"\text{Total point loads}: \sum P"),
                total,
                Unit::KiloNewton,
            ),
        ),
        DerivationLine::text("Moment about left support:"),
        DerivationLine::Step(
            Step::new(Expr::same("V_b"), reactions.vb_kn, Unit::KiloNewton)
                .with_formula(Expr::new("ΣM_a / L", r"\frac{\sum M_a}{L}"))
                .with_substitution(Expr::fraction(moment_about_right, span_m)),
        ),
        DerivationLine::Step(
            Step::new(Expr::same("V_a"), reactions.va_kn, Unit::KiloNewton)
                .with_formula(Expr::new("ΣM_b / L", r"\frac{\sum M_b}{L}"))
                .with_substitution(Expr::fraction(moment_about_left, span_m)),
        ),
    ];

    (reactions, Derivation::Steps(lines))
}

fn solve_cantilever(loads: &[PointLoad]) -> (ReactionSet, Derivation) {
    let total = total_load(loads);
    let moment_about_fixed: f64 = loads.iter().map(|load| load.moment_about(0.0)).sum();

    let mut reactions = ReactionSet::default();
    if total != 0.0 {
        reactions.va_kn = total;
        reactions.ma_knm = moment_about_fixed;
    }

    let lines = vec![
        DerivationLine::heading("Cantilever Beam:"),
        DerivationLine::Step(
            Step::new(Expr::same("V_a"), reactions.va_kn, Unit::KiloNewton)
                .with_formula(Expr::new("ΣP", r"\sum P")),
        ),
        DerivationLine::Step(
            Step::new(Expr::same("M_a"), reactions.ma_knm, Unit::KiloNewtonMeter)
                .with_formula(Expr::new("Σ(P·a)", r"\sum (P \cdot a)")),
        ),
    ];

    (reactions, Derivation::Steps(lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::supports::SupportType;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON * b.abs().max(1.0)
    }

    fn loads(points: &[(f64, f64)]) -> Vec<PointLoad> {
        points
            .iter()
            .map(|&(p, a)| PointLoad::new(p, a).unwrap())
            .collect()
    }

    fn simply_supported() -> SupportConfiguration {
        SupportConfiguration::default()
    }

    #[test]
    fn test_cantilever_single_load() {
        let (r, _) = solve(&SupportConfiguration::Cantilever, 25.0, &loads(&[(12.5, 12.5)])).unwrap();
        assert!(approx_eq(r.va_kn, 12.5));
        assert!(approx_eq(r.ma_knm, 156.25));
        assert_eq!(r.vb_kn, 0.0);
    }

    #[test]
    fn test_simply_supported_asymmetric() {
        // 10 m span, 100 kN at 3 m: Va = 70, Vb = 30
        let (r, _) = solve(&simply_supported(), 10.0, &loads(&[(100.0, 3.0)])).unwrap();
        assert!(approx_eq(r.va_kn, 70.0), "Va = {}", r.va_kn);
        assert!(approx_eq(r.vb_kn, 30.0), "Vb = {}", r.vb_kn);
        assert_eq!(r.ma_knm, 0.0);
    }

    #[test]
    fn test_simply_supported_equilibrium() {
        let set = loads(&[(10.0, 1.0), (25.0, 4.5), (7.5, 4.5), (-3.0, 8.0), (12.0, 9.0)]);
        let span = 9.0;
        let (r, _) = solve(&simply_supported(), span, &set).unwrap();

        let total: f64 = set.iter().map(|l| l.magnitude_kn()).sum();
        assert!(approx_eq(r.total_vertical_kn(), total));

        let moment_about_b: f64 = set.iter().map(|l| l.magnitude_kn() * (span - l.location_m())).sum();
        assert!(approx_eq(r.va_kn * span, moment_about_b));

        let moment_about_a: f64 = set.iter().map(|l| l.magnitude_kn() * l.location_m()).sum();
        assert!(approx_eq(r.vb_kn * span, moment_about_a));
    }

    #[test]
    fn test_cantilever_equilibrium() {
        let set = loads(&[(4.0, 1.0), (6.0, 3.0), (2.0, 3.0)]);
        let (r, _) = solve(&SupportConfiguration::Cantilever, 3.0, &set).unwrap();
        assert!(approx_eq(r.va_kn, 12.0));
        assert!(approx_eq(r.ma_knm, 4.0 + 18.0 + 6.0));
    }

    #[test]
    fn test_support_tags_do_not_change_reactions() {
        let set = loads(&[(50.0, 2.0)]);
        let pin_roller = solve(&simply_supported(), 8.0, &set).unwrap().0;
        let fixed_fixed = solve(
            &SupportConfiguration::simply_supported(SupportType::Fixed, SupportType::Fixed),
            8.0,
            &set,
        )
        .unwrap()
        .0;
        assert_eq!(pin_roller, fixed_fixed);
    }

    #[test]
    fn test_no_loads_gives_exact_zero() {
        for config in [simply_supported(), SupportConfiguration::Cantilever] {
            let (r, _) = solve(&config, 6.0, &[]).unwrap();
            assert_eq!(r, ReactionSet::default());
        }
    }

    #[test]
    fn test_balanced_loads_skip_reactions() {
        // Net zero load: reactions stay zero even though the loads form a couple
        let set = loads(&[(5.0, 1.0), (-5.0, 3.0)]);
        let (r, _) = solve(&simply_supported(), 4.0, &set).unwrap();
        assert_eq!(r, ReactionSet::default());
    }

    #[test]
    fn test_zero_span_returns_diagnostic() {
        let (r, trace) = solve(&simply_supported(), 0.0, &loads(&[(5.0, 0.0)])).unwrap();
        assert_eq!(r, ReactionSet::default());
        assert_eq!(trace, Derivation::Diagnostic(ZERO_SPAN_MESSAGE.to_string()));
    }

    #[test]
    fn test_invalid_inputs_are_reported() {
        assert!(solve(&simply_supported(), -1.0, &[]).is_err());
        assert!(solve(&simply_supported(), f64::INFINITY, &[]).is_err());
        assert!(solve(&simply_supported(), 5.0, &loads(&[(1.0, 6.0)])).is_err());
        assert!(solve(&SupportConfiguration::Cantilever, 0.0, &loads(&[(10.0, 5.0)])).is_err());
    }

    #[test]
    fn test_simply_supported_trace() {
        let (_, trace) = solve(&simply_supported(), 10.0, &loads(&[(100.0, 3.0)])).unwrap();
        let lines: Vec<String> = trace.lines().iter().map(|l| l.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "Simply Supported Beam:",
                "Total point loads: ΣP = 100.00 kN",
                "Moment about left support:",
                "V_b = ΣM_a / L = 300.00 / 10.00 = 30.00 kN",
                "V_a = ΣM_b / L = 700.00 / 10.00 = 70.00 kN",
            ]
        );
    }

    #[test]
    fn test_cantilever_trace() {
        let (_, trace) = solve(&SupportConfiguration::Cantilever, 25.0, &loads(&[(12.5, 12.5)])).unwrap();
        assert_eq!(
            trace.to_string(),
            "Cantilever Beam:\nV_a = ΣP = 12.50 kN\nM_a = Σ(P·a) = 156.25 kN·m"
        );
    }

    #[test]
    fn test_idempotent() {
        let set = loads(&[(3.3, 1.1), (7.7, 2.2)]);
        let first = solve(&simply_supported(), 3.3, &set).unwrap();
        let second = solve(&simply_supported(), 3.3, &set).unwrap();
        assert_eq!(first, second);
    }
}
