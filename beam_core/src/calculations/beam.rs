//! # Beam Analysis
//!
//! Runs the full chain for one beam: reactions, then the shear field, then
//! the moment field, and collects every number and trace into a single
//! JSON-serializable [`BeamAnalysis`].
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::beam::{analyze, AnalysisOptions, BeamInput};
//! use beam_core::loads::PointLoad;
//! use beam_core::supports::SupportConfiguration;
//!
//! let input = BeamInput::new(25.0, SupportConfiguration::Cantilever)
//!     .with_label("C-1")
//!     .with_load(PointLoad::new(12.5, 12.5).unwrap());
//!
//! let result = analyze(&input, &AnalysisOptions::default()).unwrap();
//!
//! assert_eq!(result.reactions.va_kn, 12.5);
//! assert_eq!(result.reactions.ma_knm, 156.25);
//! println!("{}", result.reaction_derivation);
//! ```

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calculations::field::{FieldPoint, FieldSample};
use crate::calculations::moment::{moment_field_with, MomentMode};
use crate::calculations::reactions::{solve, ReactionSet};
use crate::calculations::shear::{sample_with, Coincidence, ShearOptions, DEFAULT_SAMPLE_COUNT};
use crate::derivation::Derivation;
use crate::errors::CalcResult;
use crate::loads::{validate_loads, validate_span, PointLoad};
use crate::supports::SupportConfiguration;

/// Beam definition: span, supports and the point loads on it.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "span_m": 6.0,
///   "supports": { "type": "simply_supported", "left": "pin", "right": "roller" },
///   "loads": [
///     { "magnitude_kn": 20.0, "location_m": 2.0 },
///     { "magnitude_kn": 15.0, "location_m": 4.5 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    /// User label for this beam (e.g., "B-1")
    #[serde(default)]
    pub label: String,

    /// Span length (m)
    pub span_m: f64,

    /// Support configuration
    #[serde(default)]
    pub supports: SupportConfiguration,

    /// Point loads in entry order
    #[serde(default)]
    pub loads: Vec<PointLoad>,
}

impl BeamInput {
    /// Create an unloaded beam
    pub fn new(span_m: f64, supports: SupportConfiguration) -> Self {
        BeamInput {
            label: String::new(),
            span_m,
            supports,
            loads: Vec::new(),
        }
    }

    /// Set label and return self (builder pattern)
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Add a load and return self (builder pattern)
    pub fn with_load(mut self, load: PointLoad) -> Self {
        self.loads.push(load);
        self
    }

    /// Append a load
    pub fn add_load(&mut self, load: PointLoad) {
        self.loads.push(load);
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        validate_span(self.span_m)?;
        validate_loads(&self.loads, self.span_m)
    }

    /// Parse a beam definition from JSON (loads are validated as they are read)
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Knobs for [`analyze`]. Every field has a default, so `{}` is valid JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Shear grid points (at least 2)
    pub sample_count: usize,
    /// Grid-to-load matching for the shear trace
    pub coincidence: Coincidence,
    /// Moment algorithm
    pub moment_mode: MomentMode,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            sample_count: DEFAULT_SAMPLE_COUNT,
            coincidence: Coincidence::Exact,
            moment_mode: MomentMode::Compatible,
        }
    }
}

impl AnalysisOptions {
    fn shear_options(&self) -> ShearOptions {
        ShearOptions {
            sample_count: self.sample_count,
            coincidence: self.coincidence,
        }
    }
}

/// Everything produced for one beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamAnalysis {
    /// Label copied from the input
    pub label: String,
    /// Support reactions
    pub reactions: ReactionSet,
    /// How the reactions were found (or why they are zero)
    pub reaction_derivation: Derivation,
    /// Uniformly sampled shear force (kN)
    pub shear: FieldSample,
    pub shear_derivation: Derivation,
    /// Bending moment at the critical points (kN·m)
    pub moment: FieldSample,
    pub moment_derivation: Derivation,
    /// Largest-magnitude shear sample
    pub max_shear: Option<FieldPoint>,
    /// Largest-magnitude moment point
    pub max_moment: Option<FieldPoint>,
}

/// Analyze a beam.
///
/// A zero span is not an error: the reactions come back zero with a
/// diagnostic, and both fields are still produced.
///
/// # Errors
/// Invalid options, a negative/non-finite span, or loads beyond the span.
/// The solver and field generators check these themselves.
pub fn analyze(input: &BeamInput, options: &AnalysisOptions) -> CalcResult<BeamAnalysis> {
    let (reactions, reaction_derivation) = solve(&input.supports, input.span_m, &input.loads)?;
    let (shear, shear_derivation) =
        sample_with(&input.supports, input.span_m, &input.loads, &options.shear_options())?;
    let (moment, moment_derivation) = moment_field_with(
        &input.supports,
        input.span_m,
        &input.loads,
        &reactions,
        options.moment_mode,
    )?;

    let max_shear = shear.peak();
    let max_moment = moment.peak();

    info!(
        label = %input.label,
        supports = %input.supports,
        span_m = input.span_m,
        loads = input.loads.len(),
        "analyzed beam"
    );

    Ok(BeamAnalysis {
        label: input.label.clone(),
        reactions,
        reaction_derivation,
        shear,
        shear_derivation,
        moment,
        moment_derivation,
        max_shear,
        max_moment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::supports::SupportType;

    fn cantilever_input() -> BeamInput {
        BeamInput::new(25.0, SupportConfiguration::Cantilever)
            .with_label("C-1")
            .with_load(PointLoad::new(12.5, 12.5).unwrap())
    }

    #[test]
    fn test_cantilever_analysis() {
        let result = analyze(&cantilever_input(), &AnalysisOptions::default()).unwrap();

        assert_eq!(result.label, "C-1");
        assert_eq!(result.reactions.va_kn, 12.5);
        assert_eq!(result.reactions.ma_knm, 156.25);
        assert_eq!(result.shear.len(), DEFAULT_SAMPLE_COUNT);
        assert_eq!(result.shear.first().unwrap().value, 12.5);
        assert_eq!(result.shear.value_at_or_after(12.5), Some(0.0));
        assert_eq!(result.moment.first().unwrap().value, -156.25);

        let max_moment = result.max_moment.unwrap();
        assert_eq!(max_moment.position_m, 0.0);
        assert_eq!(max_moment.value, -156.25);
        assert_eq!(result.max_shear.unwrap().value, 12.5);
    }

    #[test]
    fn test_zero_span_is_not_an_error() {
        let input = BeamInput::new(0.0, SupportConfiguration::default());
        let result = analyze(&input, &AnalysisOptions::default()).unwrap();
        assert_eq!(result.reactions, ReactionSet::default());
        assert!(result.reaction_derivation.is_diagnostic());
        assert_eq!(result.moment.len(), 2);
    }

    #[test]
    fn test_invalid_options_rejected() {
        let options = AnalysisOptions {
            sample_count: 1,
            ..AnalysisOptions::default()
        };
        assert!(analyze(&cantilever_input(), &options).is_err());
    }

    #[test]
    fn test_load_beyond_span_rejected() {
        let mut input = BeamInput::new(5.0, SupportConfiguration::Cantilever);
        input.add_load(PointLoad::new(1.0, 5.5).unwrap());
        assert!(input.validate().is_err());
        assert!(analyze(&input, &AnalysisOptions::default()).is_err());
    }

    #[test]
    fn test_superposed_option_is_passed_through() {
        let input = BeamInput::new(10.0, SupportConfiguration::default())
            .with_load(PointLoad::new(10.0, 8.0).unwrap())
            .with_load(PointLoad::new(10.0, 2.0).unwrap());
        let options = AnalysisOptions {
            moment_mode: MomentMode::Superposed,
            ..AnalysisOptions::default()
        };
        let result = analyze(&input, &options).unwrap();
        assert_eq!(result.moment.positions(), vec![0.0, 2.0, 8.0, 10.0]);
    }

    #[test]
    fn test_input_json_roundtrip() {
        let input = BeamInput::new(6.0, SupportConfiguration::simply_supported(SupportType::Pin, SupportType::Pin))
            .with_label("B-1")
            .with_load(PointLoad::new(20.0, 2.0).unwrap());
        let json = input.to_json().unwrap();
        let parsed = BeamInput::from_json(&json).unwrap();
        assert_eq!(input, parsed);
    }

    #[test]
    fn test_input_json_defaults() {
        let parsed = BeamInput::from_json(r#"{ "span_m": 4.0 }"#).unwrap();
        assert_eq!(parsed.supports, SupportConfiguration::default());
        assert!(parsed.loads.is_empty());
        assert!(parsed.label.is_empty());
    }

    #[test]
    fn test_input_json_rejects_bad_load() {
        let json = r#"{ "span_m": 4.0, "loads": [{ "magnitude_kn": 1.0, "location_m": -1.0 }] }"#;
        let err = BeamInput::from_json(json).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_options_json_defaults() {
        let options: AnalysisOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, AnalysisOptions::default());

        let options: AnalysisOptions = serde_json::from_str(
            r#"{ "coincidence": { "rule": "tolerance", "epsilon_m": 0.01 }, "moment_mode": "superposed" }"#,
        )
        .unwrap();
        assert_eq!(options.coincidence, Coincidence::Tolerance(0.01));
        assert_eq!(options.moment_mode, MomentMode::Superposed);
        assert_eq!(options.sample_count, DEFAULT_SAMPLE_COUNT);
    }

    #[test]
    fn test_analysis_serializes() {
        let result = analyze(&cantilever_input(), &AnalysisOptions::default()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let parsed: BeamAnalysis = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.reactions, result.reactions);
        assert_eq!(parsed.moment, result.moment);
    }
}
