//! # beam_core - Single-Span Beam Analysis Engine
//!
//! `beam_core` computes support reactions, shear force diagrams and bending
//! moment diagrams for a single-span beam carrying point loads, either
//! simply supported or cantilevered. All inputs and outputs are
//! JSON-serializable, and every result carries a derivation trace that a
//! front end can print or typeset.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that borrow their input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Contract violations come back as structured errors
//! - **Explained**: Each number ships with the formulas behind it
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{analyze, AnalysisOptions, BeamInput, PointLoad, SupportConfiguration};
//!
//! let input = BeamInput::new(6.0, SupportConfiguration::default())
//!     .with_load(PointLoad::new(20.0, 2.0).unwrap());
//!
//! let result = analyze(&input, &AnalysisOptions::default()).unwrap();
//! println!("Va = {:.2} kN", result.reactions.va_kn);
//! println!("{}", result.reaction_derivation.to_latex());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Reaction solver, shear and moment generators, analysis pipeline
//! - [`loads`] - Point loads and their validation
//! - [`supports`] - Support configuration and end tags
//! - [`derivation`] - Derivation traces and their text/LaTeX rendering
//! - [`units`] - Unit tags
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod derivation;
pub mod errors;
pub mod loads;
pub mod supports;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{analyze, AnalysisOptions, BeamAnalysis, BeamInput, MomentMode, ReactionSet};
pub use derivation::Derivation;
pub use errors::{CalcError, CalcResult};
pub use loads::PointLoad;
pub use supports::{SupportConfiguration, SupportType};
