use crate::math::distance_2d::project_onto_segment;
use crate::math::{Point2, Vector2};

use super::Curve;

/// A bounded straight segment from `p0` to `p1`.
///
/// The parametric form is: `P(t) = p0 + t * (p1 - p0)`, `t ∈ [0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    pub p0: Point2,
    pub p1: Point2,
}

impl LineSegment {
    /// Creates a new segment between two points.
    ///
    /// Zero-length segments are accepted; they project every query onto `p0`.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2) -> Self {
        Self { p0, p1 }
    }
}

impl Curve for LineSegment {
    fn evaluate(&self, t: f64) -> Point2 {
        self.p0 + (self.p1 - self.p0) * t
    }

    fn derivative(&self, _t: f64) -> Vector2 {
        self.p1 - self.p0
    }

    fn closest_point(&self, query: &Point2) -> (f64, Point2) {
        project_onto_segment(query, &self.p0, &self.p1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closest_point_perpendicular() {
        let line = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        let (t, p) = line.closest_point(&Point2::new(5.0, 3.0));
        assert!((t - 0.5).abs() < 1e-10);
        assert!((p.x - 5.0).abs() < 1e-10);
        assert!(p.y.abs() < 1e-10);
    }

    #[test]
    fn closest_point_clamps_to_start() {
        let line = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        let (t, p) = line.closest_point(&Point2::new(-5.0, 0.0));
        assert!(t.abs() < 1e-10);
        assert!(p.x.abs() < 1e-10);
    }

    #[test]
    fn closest_point_clamps_to_end() {
        let line = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(10.0, 0.0));
        let (t, p) = line.closest_point(&Point2::new(15.0, 2.0));
        assert!((t - 1.0).abs() < 1e-10);
        assert!((p.x - 10.0).abs() < 1e-10);
    }
}
