//! # Beam Calculations
//!
//! The analysis engine, evaluated in dependency order for one beam:
//!
//! - [`reactions`] - Support reactions from static equilibrium
//! - [`shear`] - Shear force sampled on a uniform grid (solves reactions itself)
//! - [`moment`] - Bending moment at the critical points (takes reactions as input)
//! - [`beam`] - `BeamInput` and the `analyze` pipeline that runs all three
//!
//! Every calculation is a pure function of its arguments and returns a
//! [`Derivation`](crate::derivation::Derivation) next to its numbers.

pub mod beam;
pub mod field;
pub mod moment;
pub mod reactions;
pub mod shear;

// Re-export commonly used types
pub use beam::{analyze, AnalysisOptions, BeamAnalysis, BeamInput};
pub use field::{FieldPoint, FieldSample};
pub use moment::{moment_field, moment_field_with, MomentMode};
pub use reactions::{solve, ReactionSet};
pub use shear::{sample, sample_with, Coincidence, ShearOptions, DEFAULT_SAMPLE_COUNT};
