mod cubic;
mod line;

pub use cubic::CubicBezier;
pub use line::LineSegment;

use crate::math::{Point2, Vector2};

/// Trait for bounded parametric curves in the plane.
///
/// Every implementor is parameterized over `t ∈ [0, 1]`, with `t = 0` at the
/// start point and `t = 1` at the end point.
pub trait Curve {
    /// Evaluates the curve at parameter `t`.
    fn evaluate(&self, t: f64) -> Point2;

    /// First derivative with respect to `t`.
    fn derivative(&self, t: f64) -> Vector2;

    /// Returns `(t, point)` for the point on the curve closest to `query`.
    fn closest_point(&self, query: &Point2) -> (f64, Point2);

    /// Point at `t = 0`.
    fn start(&self) -> Point2 {
        self.evaluate(0.0)
    }

    /// Point at `t = 1`.
    fn end(&self) -> Point2 {
        self.evaluate(1.0)
    }
}

/// One piece of a track centerline.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Line(LineSegment),
    Cubic(CubicBezier),
}

impl Segment {
    /// Evaluates the segment at parameter `t ∈ [0, 1]`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point2 {
        match self {
            Self::Line(line) => line.evaluate(t),
            Self::Cubic(cubic) => cubic.evaluate(t),
        }
    }

    /// First derivative at parameter `t`.
    #[must_use]
    pub fn derivative(&self, t: f64) -> Vector2 {
        match self {
            Self::Line(line) => line.derivative(t),
            Self::Cubic(cubic) => cubic.derivative(t),
        }
    }

    /// Returns `(t, point)` for the point on this segment closest to `query`.
    #[must_use]
    pub fn closest_point(&self, query: &Point2) -> (f64, Point2) {
        match self {
            Self::Line(line) => line.closest_point(query),
            Self::Cubic(cubic) => cubic.closest_point(query),
        }
    }

    #[must_use]
    pub fn start(&self) -> Point2 {
        match self {
            Self::Line(line) => line.p0,
            Self::Cubic(cubic) => cubic.p0,
        }
    }

    #[must_use]
    pub fn end(&self) -> Point2 {
        match self {
            Self::Line(line) => line.p1,
            Self::Cubic(cubic) => cubic.p1,
        }
    }
}

impl From<LineSegment> for Segment {
    fn from(line: LineSegment) -> Self {
        Self::Line(line)
    }
}

impl From<CubicBezier> for Segment {
    fn from(cubic: CubicBezier) -> Self {
        Self::Cubic(cubic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn dispatch_matches_variant() {
        let line = LineSegment::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0));
        let seg = Segment::from(line.clone());
        assert_relative_eq!(seg.evaluate(0.25), line.evaluate(0.25));
        assert_relative_eq!(seg.derivative(0.5), Vector2::new(4.0, 0.0));
    }

    #[test]
    fn endpoints_of_cubic() {
        let seg = Segment::from(CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(3.0, 2.0),
            Point2::new(4.0, 0.0),
        ));
        assert_relative_eq!(seg.start(), Point2::new(0.0, 0.0));
        assert_relative_eq!(seg.end(), Point2::new(4.0, 0.0));
    }
}
