mod closest_point;
mod corridor_clamp;

pub use closest_point::{ClosestPointOnTrack, ClosestPointResult};
pub use corridor_clamp::ClampToCorridor;
