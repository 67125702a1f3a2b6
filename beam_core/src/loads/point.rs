//! Point Load
//!
//! A concentrated transverse force at a single location along the span.
//! Magnitudes are signed (positive downward); locations are measured from
//! the left (fixed, for a cantilever) end.

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// A single concentrated load.
///
/// Built through [`PointLoad::new`], which rejects non-finite values and
/// negative locations. Whether the location fits the span is checked later
/// against a concrete beam (see [`validate_loads`]).
///
/// # Example
/// ```
/// use beam_core::loads::PointLoad;
///
/// let load = PointLoad::new(12.5, 4.0).unwrap();
/// assert_eq!(load.magnitude_kn(), 12.5);
/// assert_eq!(load.moment_about(0.0), 50.0);
///
/// assert!(PointLoad::new(f64::NAN, 4.0).is_err());
/// assert!(PointLoad::new(10.0, -1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPointLoad")]
pub struct PointLoad {
    /// Load magnitude (kN), positive downward
    magnitude_kn: f64,
    /// Distance from the left end (m)
    location_m: f64,
}

impl PointLoad {
    /// Create a validated point load
    pub fn new(magnitude_kn: f64, location_m: f64) -> CalcResult<Self> {
        if !magnitude_kn.is_finite() {
            return Err(CalcError::invalid_input(
                "magnitude_kn",
                magnitude_kn.to_string(),
                "Load magnitude must be a finite number",
            ));
        }
        if !location_m.is_finite() || location_m < 0.0 {
            return Err(CalcError::invalid_input(
                "location_m",
                location_m.to_string(),
                "Load location must be a finite, non-negative distance",
            ));
        }
        Ok(PointLoad {
            magnitude_kn,
            location_m,
        })
    }

    /// Load magnitude (kN)
    pub fn magnitude_kn(&self) -> f64 {
        self.magnitude_kn
    }

    /// Distance from the left end (m)
    pub fn location_m(&self) -> f64 {
        self.location_m
    }

    /// Moment of this load about a point at `x_m` (kN·m, lever arm `a - x`)
    pub fn moment_about(&self, x_m: f64) -> f64 {
        self.magnitude_kn * (self.location_m - x_m)
    }
}

/// Unvalidated wire shape, checked on the way in
#[derive(Deserialize)]
struct RawPointLoad {
    magnitude_kn: f64,
    location_m: f64,
}

impl TryFrom<RawPointLoad> for PointLoad {
    type Error = CalcError;

    fn try_from(raw: RawPointLoad) -> Result<Self, Self::Error> {
        PointLoad::new(raw.magnitude_kn, raw.location_m)
    }
}

/// Sum of load magnitudes (kN)
pub fn total_load(loads: &[PointLoad]) -> f64 {
    loads.iter().map(PointLoad::magnitude_kn).sum()
}

/// Check that a span is usable for analysis.
///
/// Zero is accepted (it is the degenerate case handled by the solver);
/// negative and non-finite spans are rejected.
pub fn validate_span(span_m: f64) -> CalcResult<()> {
    if !span_m.is_finite() || span_m < 0.0 {
        return Err(CalcError::invalid_input(
            "span_m",
            span_m.to_string(),
            "Span must be a finite, non-negative length",
        ));
    }
    Ok(())
}

/// Check that every load lies within `[0, span]`.
///
/// Applies at zero span too: only loads at `0.0` reach the degenerate path.
pub fn validate_loads(loads: &[PointLoad], span_m: f64) -> CalcResult<()> {
    for (index, load) in loads.iter().enumerate() {
        if load.location_m > span_m {
            return Err(CalcError::invalid_load(
                index,
                format!(
                    "location {} m lies beyond span {} m",
                    load.location_m, span_m
                ),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_bad_values() {
        assert!(PointLoad::new(f64::INFINITY, 1.0).is_err());
        assert!(PointLoad::new(1.0, f64::NAN).is_err());
        assert!(PointLoad::new(1.0, -0.5).is_err());
        assert!(PointLoad::new(-3.0, 0.0).is_ok()); // upward loads are allowed
    }

    #[test]
    fn test_total_load() {
        let loads = [
            PointLoad::new(10.0, 1.0).unwrap(),
            PointLoad::new(5.0, 1.0).unwrap(),
            PointLoad::new(-2.5, 3.0).unwrap(),
        ];
        assert_eq!(total_load(&loads), 12.5);
        assert_eq!(total_load(&[]), 0.0);
    }

    #[test]
    fn test_validate_span() {
        assert!(validate_span(0.0).is_ok());
        assert!(validate_span(6.0).is_ok());
        assert!(validate_span(-1.0).is_err());
        assert!(validate_span(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_loads_outside_span() {
        let loads = [PointLoad::new(1.0, 2.0).unwrap(), PointLoad::new(1.0, 7.0).unwrap()];
        match validate_loads(&loads, 6.0) {
            Err(CalcError::InvalidLoad { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidLoad, got {:?}", other),
        }
        assert!(validate_loads(&loads, 7.0).is_ok());
    }

    #[test]
    fn test_validate_loads_zero_span() {
        let at_origin = [PointLoad::new(5.0, 0.0).unwrap()];
        assert!(validate_loads(&at_origin, 0.0).is_ok());

        let off_origin = [PointLoad::new(5.0, 0.0).unwrap(), PointLoad::new(10.0, 5.0).unwrap()];
        match validate_loads(&off_origin, 0.0) {
            Err(CalcError::InvalidLoad { index, .. }) => assert_eq!(index, 1),
            other => panic!("expected InvalidLoad, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: PointLoad = serde_json::from_str(r#"{"magnitude_kn": 4.0, "location_m": 2.0}"#).unwrap();
        assert_eq!(ok.location_m(), 2.0);

        let bad = serde_json::from_str::<PointLoad>(r#"{"magnitude_kn": 4.0, "location_m": -2.0}"#);
        assert!(bad.is_err());
    }
}
