use tracing::{debug, warn};

use crate::error::{PathError, Result};
use crate::math::Point2;

use super::curve::{CubicBezier, LineSegment, Segment};

/// One absolute drawing command of a vector path.
///
/// Only straight and cubic commands contribute geometry. Close-path is a
/// straight segment back to the start of the current subpath.
#[derive(Debug, Clone, PartialEq)]
pub enum PathCommand {
    Move {
        to: Point2,
    },
    Line {
        from: Point2,
        to: Point2,
    },
    Close {
        from: Point2,
        to: Point2,
    },
    Cubic {
        from: Point2,
        ctrl1: Point2,
        ctrl2: Point2,
        to: Point2,
    },
    /// Any command kind the centerline does not understand (arcs, quadratic
    /// curves, ...). `kind` is the command name, kept for diagnostics.
    Unsupported {
        kind: String,
    },
}

impl PathCommand {
    /// Converts the command into a segment, if it produces one.
    fn to_segment(&self) -> Option<Segment> {
        match self {
            Self::Line { from, to } | Self::Close { from, to } => {
                Some(LineSegment::new(*from, *to).into())
            }
            Self::Cubic {
                from,
                ctrl1,
                ctrl2,
                to,
            } => Some(CubicBezier::new(*from, *ctrl1, *ctrl2, *to).into()),
            Self::Move { .. } | Self::Unsupported { .. } => None,
        }
    }
}

/// An ordered sequence of segments forming a track centerline.
///
/// Order is meaningful: it defines the path direction and which segment wins
/// a nearest-point tie. The path is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePath {
    segments: Vec<Segment>,
}

impl CurvePath {
    /// Builds a path from absolute drawing commands.
    ///
    /// Commands that produce no geometry are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::MalformedPathInput`] if no command yields a segment.
    pub fn from_commands(commands: &[PathCommand]) -> Result<Self> {
        let mut segments = Vec::with_capacity(commands.len());

        for (index, command) in commands.iter().enumerate() {
            if let Some(segment) = command.to_segment() {
                segments.push(segment);
            } else {
                debug!(index, ?command, "skipping path command without geometry");
            }
        }

        if segments.is_empty() {
            warn!(commands = commands.len(), "path input has no usable segment");
            return Err(PathError::MalformedPathInput {
                commands: commands.len(),
            }
            .into());
        }

        debug!(segments = segments.len(), "built curve path");
        Ok(Self { segments })
    }

    /// Builds a path directly from segments.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::MalformedPathInput`] if `segments` is empty.
    pub fn from_segments(segments: Vec<Segment>) -> Result<Self> {
        if segments.is_empty() {
            return Err(PathError::MalformedPathInput { commands: 0 }.into());
        }
        Ok(Self { segments })
    }

    /// Returns the segments in path order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns whether the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the start of the first segment, where a vehicle is usually
    /// spawned.
    #[must_use]
    pub fn start_point(&self) -> Option<Point2> {
        self.segments.first().map(Segment::start)
    }
}
