//! # Loads
//!
//! Point loads applied transversely to a single-span beam.
//!
//! The load collection is always owned by the caller and borrowed read-only
//! by the analysis functions; nothing in this crate keeps a reference to it
//! after a call returns.
//!
//! ## Sign Convention
//!
//! - Magnitude: positive downward (gravity direction), kN
//! - Location: measured from the left end (the fixed end of a cantilever), m

pub mod point;

pub use point::{total_load, validate_loads, validate_span, PointLoad};
