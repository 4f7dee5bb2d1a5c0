use super::{Point2, TOLERANCE};

/// Projects `p` onto the segment from `a` to `b`.
///
/// Returns `(t, closest)` where `t` is the segment parameter clamped to
/// `[0, 1]` and `closest = a + t * (b - a)`. A zero-length segment yields
/// `(0, a)`.
#[must_use]
pub fn project_onto_segment(p: &Point2, a: &Point2, b: &Point2) -> (f64, Point2) {
    let ab = b - a;
    let len_sq = ab.norm_squared();

    if len_sq < TOLERANCE * TOLERANCE {
        return (0.0, *a);
    }

    // Project onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    (t, a + ab * t)
}
