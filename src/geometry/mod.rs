pub mod curve;
pub mod path;

pub use curve::{CubicBezier, Curve, LineSegment, Segment};
pub use path::{CurvePath, PathCommand};
