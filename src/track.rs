use tracing::trace;

use crate::error::{ConfigError, Result};
use crate::geometry::{CurvePath, PathCommand};
use crate::math::Point2;
use crate::operations::query::{ClampToCorridor, ClosestPointOnTrack, ClosestPointResult};

/// Configuration for building a [`Track`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackParams {
    /// Full corridor width; the corridor extends `width / 2` on each side of
    /// the centerline.
    pub width: f64,
}

impl Default for TrackParams {
    fn default() -> Self {
        Self { width: 50.0 }
    }
}

impl TrackParams {
    /// Boundary check for values coming from outside the kernel.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositiveWidth`] if `width` is not a positive
    /// finite number.
    pub fn validate(&self) -> Result<()> {
        if self.width.is_finite() && self.width > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::NonPositiveWidth { width: self.width }.into())
        }
    }
}

/// A centerline plus a corridor width.
///
/// The width is read at query time only, so it may be changed between any two
/// ticks.
#[derive(Debug, Clone)]
pub struct Track {
    path: CurvePath,
    width: f64,
}

impl Track {
    /// Creates a track from an already built centerline.
    ///
    /// The width is not validated here; see [`TrackParams::validate`].
    #[must_use]
    pub fn new(path: CurvePath, width: f64) -> Self {
        Self { path, width }
    }

    /// Builds the centerline from path commands and validates `params`.
    ///
    /// # Errors
    ///
    /// Returns an error if the width is not positive or the commands yield no
    /// segment.
    pub fn from_commands(commands: &[PathCommand], params: TrackParams) -> Result<Self> {
        params.validate()?;
        let path = CurvePath::from_commands(commands)?;
        Ok(Self::new(path, params.width))
    }

    #[must_use]
    pub fn path(&self) -> &CurvePath {
        &self.path
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Sets the corridor width. Takes effect on the next query; callers must
    /// keep it positive.
    pub fn set_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Nearest point on the centerline. `None` if the path has no segments.
    #[must_use]
    pub fn closest_point(&self, query: &Point2) -> Option<ClosestPointResult> {
        ClosestPointOnTrack::new(*query).execute(self)
    }

    /// Corrected position for a point outside the corridor, `None` if the
    /// point is already inside.
    #[must_use]
    pub fn clamp_to_corridor(&self, query: &Point2) -> Option<Point2> {
        ClampToCorridor::new(*query).execute(self)
    }

    /// Moves `position` back inside the corridor in place.
    ///
    /// Returns `true` if the position was corrected.
    pub fn constrain(&self, position: &mut Point2) -> bool {
        match self.clamp_to_corridor(position) {
            Some(corrected) => {
                trace!(from = %position, to = %corrected, "constrained position to corridor");
                *position = corrected;
                true
            }
            None => false,
        }
    }
}
