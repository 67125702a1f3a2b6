//! Field Samples
//!
//! Ordered `(position, value)` pairs describing shear or moment along the
//! span. Shear fields are uniformly spaced; moment fields hold only the
//! critical points and follow load-processing order.

use serde::{Deserialize, Serialize};

/// One sampled value along the beam
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldPoint {
    /// Distance from the left end (m)
    pub position_m: f64,
    /// Shear (kN) or moment (kN·m) at that position
    pub value: f64,
}

/// Ordered samples of a diagram along the span
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSample {
    points: Vec<FieldPoint>,
}

impl FieldSample {
    /// Create an empty field
    pub fn new() -> Self {
        FieldSample { points: Vec::new() }
    }

    /// Create an empty field with room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        FieldSample {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a point
    pub fn push(&mut self, position_m: f64, value: f64) {
        self.points.push(FieldPoint { position_m, value });
    }

    pub fn points(&self) -> &[FieldPoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Positions in field order (for plotting)
    pub fn positions(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.position_m).collect()
    }

    /// Values in field order (for plotting)
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn first(&self) -> Option<&FieldPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&FieldPoint> {
        self.points.last()
    }

    /// Point with the largest absolute value (earliest wins on ties)
    pub fn peak(&self) -> Option<FieldPoint> {
        let mut best: Option<FieldPoint> = None;
        for point in &self.points {
            match best {
                Some(b) if point.value.abs() <= b.value.abs() => {}
                _ => best = Some(*point),
            }
        }
        best
    }

    /// Value of the first point at or beyond `position_m`
    pub fn value_at_or_after(&self, position_m: f64) -> Option<f64> {
        self.points
            .iter()
            .find(|p| p.position_m >= position_m)
            .map(|p| p.value)
    }
}

impl<'a> IntoIterator for &'a FieldSample {
    type Item = &'a FieldPoint;
    type IntoIter = std::slice::Iter<'a, FieldPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// `count` equally spaced positions from `start` to `end` inclusive.
///
/// Position `i` is `start + i * step`, and the last one is pinned to `end`
/// so the grid always closes exactly on the far support.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut grid: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            grid[count - 1] = end;
            grid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(points: &[(f64, f64)]) -> FieldSample {
        let mut field = FieldSample::new();
        for &(x, v) in points {
            field.push(x, v);
        }
        field
    }

    #[test]
    fn test_linspace_endpoints() {
        let grid = linspace(0.0, 25.0, 100);
        assert_eq!(grid.len(), 100);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[99], 25.0);
        assert!(grid.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_linspace_hits_exact_midpoint_for_odd_counts() {
        let grid = linspace(0.0, 10.0, 11);
        assert_eq!(grid[5], 5.0);
    }

    #[test]
    fn test_linspace_zero_length() {
        let grid = linspace(0.0, 0.0, 4);
        assert_eq!(grid, vec![0.0; 4]);
    }

    #[test]
    fn test_peak_prefers_largest_magnitude() {
        let field = sample(&[(0.0, -156.25), (12.5, 0.0), (25.0, 0.0)]);
        let peak = field.peak().unwrap();
        assert_eq!(peak.position_m, 0.0);
        assert_eq!(peak.value, -156.25);
        assert!(FieldSample::new().peak().is_none());
    }

    #[test]
    fn test_peak_tie_keeps_first() {
        let field = sample(&[(0.0, 5.0), (1.0, -5.0)]);
        assert_eq!(field.peak().unwrap().position_m, 0.0);
    }

    #[test]
    fn test_value_at_or_after() {
        let field = sample(&[(0.0, 10.0), (2.0, 4.0), (4.0, -6.0)]);
        assert_eq!(field.value_at_or_after(1.0), Some(4.0));
        assert_eq!(field.value_at_or_after(2.0), Some(4.0));
        assert_eq!(field.value_at_or_after(5.0), None);
    }

    #[test]
    fn test_serializes_as_list() {
        let field = sample(&[(0.0, 1.0)]);
        let json = serde_json::to_string(&field).unwrap();
        assert_eq!(json, r#"[{"position_m":0.0,"value":1.0}]"#);
    }
}
