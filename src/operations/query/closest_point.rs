use crate::math::Point2;
use crate::track::Track;

/// Result of a closest point query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPointResult {
    /// The closest point on the centerline.
    pub point: Point2,
    /// Index of the segment the point lies on, in path order.
    pub segment_index: usize,
    /// The segment parameter at the closest point, in `[0, 1]`.
    pub parameter: f64,
    /// The distance from the query point to the closest point.
    pub distance: f64,
}

/// Finds the point on a track centerline closest to a given point.
pub struct ClosestPointOnTrack {
    point: Point2,
}

impl ClosestPointOnTrack {
    /// Creates a new `ClosestPointOnTrack` query.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self { point }
    }

    /// Executes the query against every segment in path order.
    ///
    /// Only a strictly smaller distance replaces the current best, so ties go
    /// to the earliest segment. Returns `None` for a path with no segments.
    #[must_use]
    pub fn execute(&self, track: &Track) -> Option<ClosestPointResult> {
        let mut best: Option<ClosestPointResult> = None;

        for (segment_index, segment) in track.path().segments().iter().enumerate() {
            let (parameter, point) = segment.closest_point(&self.point);
            let distance = (self.point - point).norm();

            if best.is_none_or(|b| distance < b.distance) {
                best = Some(ClosestPointResult {
                    point,
                    segment_index,
                    parameter,
                    distance,
                });
            }
        }

        best
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{CubicBezier, CurvePath, LineSegment, Segment};
    use approx::assert_relative_eq;

    fn track_of(segments: Vec<Segment>) -> Track {
        Track::new(CurvePath::from_segments(segments).unwrap(), 50.0)
    }

    fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        LineSegment::new(Point2::new(x0, y0), Point2::new(x1, y1)).into()
    }

    #[test]
    fn single_line_perpendicular() {
        let track = track_of(vec![line(0.0, 0.0, 100.0, 0.0)]);
        let result = ClosestPointOnTrack::new(Point2::new(50.0, 40.0))
            .execute(&track)
            .unwrap();

        assert_relative_eq!(result.point, Point2::new(50.0, 0.0));
        assert_eq!(result.segment_index, 0);
        assert_relative_eq!(result.parameter, 0.5);
        assert_relative_eq!(result.distance, 40.0);
    }

    #[test]
    fn picks_nearest_segment() {
        // L-shaped path: along x, then up y.
        let track = track_of(vec![
            line(0.0, 0.0, 100.0, 0.0),
            line(100.0, 0.0, 100.0, 100.0),
        ]);
        let result = ClosestPointOnTrack::new(Point2::new(90.0, 60.0))
            .execute(&track)
            .unwrap();

        assert_eq!(result.segment_index, 1);
        assert_relative_eq!(result.point, Point2::new(100.0, 60.0));
        assert_relative_eq!(result.distance, 10.0);
    }

    #[test]
    fn shared_vertex_tie_goes_to_earliest_segment() {
        // Corner point (100, 0) is equally close on both segments.
        let track = track_of(vec![
            line(0.0, 0.0, 100.0, 0.0),
            line(100.0, 0.0, 100.0, 100.0),
        ]);
        let result = ClosestPointOnTrack::new(Point2::new(110.0, -10.0))
            .execute(&track)
            .unwrap();

        assert_eq!(result.segment_index, 0);
        assert_relative_eq!(result.point, Point2::new(100.0, 0.0));
    }

    #[test]
    fn parallel_duplicate_tie_goes_to_earliest_segment() {
        let track = track_of(vec![
            line(0.0, 10.0, 100.0, 10.0),
            line(0.0, -10.0, 100.0, -10.0),
        ]);
        let result = ClosestPointOnTrack::new(Point2::new(50.0, 0.0))
            .execute(&track)
            .unwrap();
        assert_eq!(result.segment_index, 0);
        assert_relative_eq!(result.point, Point2::new(50.0, 10.0));
    }

    #[test]
    fn equals_minimum_over_segments() {
        let segments = vec![
            line(0.0, 0.0, 100.0, 0.0),
            CubicBezier::new(
                Point2::new(100.0, 0.0),
                Point2::new(150.0, 0.0),
                Point2::new(150.0, 100.0),
                Point2::new(100.0, 100.0),
            )
            .into(),
            line(100.0, 100.0, 0.0, 100.0),
        ];
        let track = track_of(segments.clone());

        for query in [
            Point2::new(130.0, 50.0),
            Point2::new(20.0, 45.0),
            Point2::new(60.0, 70.0),
            Point2::new(160.0, -20.0),
        ] {
            let result = ClosestPointOnTrack::new(query).execute(&track).unwrap();
            let expected = segments
                .iter()
                .map(|s| (query - s.closest_point(&query).1).norm())
                .fold(f64::INFINITY, f64::min);
            assert_relative_eq!(result.distance, expected, epsilon = 1e-12);
        }
    }
}
