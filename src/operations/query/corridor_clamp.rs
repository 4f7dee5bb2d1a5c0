use tracing::trace;

use crate::math::Point2;
use crate::track::Track;

use super::ClosestPointOnTrack;

/// Pulls a point that left the corridor back onto its boundary.
///
/// The correction moves the point straight toward its own nearest centerline
/// projection until it sits exactly `width / 2` away from it. It is not a
/// projection onto the nearest corridor edge.
pub struct ClampToCorridor {
    point: Point2,
}

impl ClampToCorridor {
    /// Creates a new `ClampToCorridor` query.
    #[must_use]
    pub fn new(point: Point2) -> Self {
        Self { point }
    }

    /// Executes the query.
    ///
    /// Returns `None` when the path has no segments or when the point is
    /// already inside the corridor. A point exactly `width / 2` away counts as
    /// inside.
    #[must_use]
    pub fn execute(&self, track: &Track) -> Option<Point2> {
        let closest = ClosestPointOnTrack::new(self.point).execute(track)?;
        let half_width = track.width() / 2.0;

        let offset = self.point - closest.point;
        let distance = offset.norm();
        if distance <= half_width {
            return None;
        }

        let corrected = closest.point + offset * (half_width / distance);
        trace!(
            segment = closest.segment_index,
            distance,
            half_width,
            "point outside corridor"
        );
        Some(corrected)
    }
}
