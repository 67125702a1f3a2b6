//! # Units
//!
//! Beam analysis works in SI throughout: lengths in metres, forces in
//! kilonewtons and moments in kilonewton-metres. Values are carried as plain
//! `f64` with the unit spelled into the field name (`span_m`, `magnitude_kn`),
//! and [`Unit`] tags the force and moment results that end up in a
//! derivation.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::units::Unit;
//!
//! assert_eq!(Unit::KiloNewtonMeter.symbol(), "kN·m");
//! assert_eq!(Unit::KiloNewton.latex(), r"\text{kN}");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit attached to a derived quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Force (reactions, shear)
    KiloNewton,
    /// Moment (fixed-end reaction, bending moment)
    KiloNewtonMeter,
}

impl Unit {
    /// Plain-text symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::KiloNewton => "kN",
            Unit::KiloNewtonMeter => "kN·m",
        }
    }

    /// LaTeX markup for the symbol
    pub fn latex(&self) -> &'static str {
        match self {
            Unit::KiloNewton => r"\text{kN}",
            Unit::KiloNewtonMeter => r"\text{kN}\cdot\text{m}",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
