pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod track;
pub mod vehicle;

pub use error::{Result, TrackdriveError};
pub use geometry::{CubicBezier, CurvePath, LineSegment, PathCommand, Segment};
pub use operations::query::{ClampToCorridor, ClosestPointOnTrack, ClosestPointResult};
pub use track::{Track, TrackParams};
pub use vehicle::{
    AxisInput, Integrator, SimpleIntegrator, SimpleParams, SimpleState, Throttle, WheelInput,
    WheelIntegrator, WheelParams, WheelState,
};
