use crate::math::polynomial;
use crate::math::{Point2, Vector2};

use super::Curve;

/// Sub-intervals used to bracket stationary points of the distance function.
const ROOT_SUBDIVISIONS: u32 = 64;

/// A cubic Bézier segment with endpoints `p0`, `p1` and controls `c0`, `c1`.
#[derive(Debug, Clone, PartialEq)]
pub struct CubicBezier {
    pub p0: Point2,
    pub c0: Point2,
    pub c1: Point2,
    pub p1: Point2,
}

impl CubicBezier {
    /// Creates a new cubic segment.
    #[must_use]
    pub fn new(p0: Point2, c0: Point2, c1: Point2, p1: Point2) -> Self {
        Self { p0, c0, c1, p1 }
    }

    /// Power-basis coefficients `[k0, k1, k2, k3]` with
    /// `B(t) = k0 + k1 t + k2 t² + k3 t³`.
    fn power_basis(&self) -> [Vector2; 4] {
        let p0 = self.p0.coords;
        let c0 = self.c0.coords;
        let c1 = self.c1.coords;
        let p1 = self.p1.coords;
        [
            p0,
            (c0 - p0) * 3.0,
            (p0 - c0 * 2.0 + c1) * 3.0,
            p1 - p0 + (c0 - c1) * 3.0,
        ]
    }

    /// Coefficients of `(B(t) - q) · B'(t)`, a quintic whose roots are the
    /// stationary points of the squared distance from `q` to the curve.
    fn distance_derivative(&self, q: &Point2) -> Vec<f64> {
        let [k0, k1, k2, k3] = self.power_basis();
        let offset = k0 - q.coords;

        let x = [offset.x, k1.x, k2.x, k3.x];
        let dx = [k1.x, 2.0 * k2.x, 3.0 * k3.x];
        let y = [offset.y, k1.y, k2.y, k3.y];
        let dy = [k1.y, 2.0 * k2.y, 3.0 * k3.y];

        polynomial::add(&polynomial::mul(&x, &dx), &polynomial::mul(&y, &dy))
    }
}

impl Curve for CubicBezier {
    fn evaluate(&self, t: f64) -> Point2 {
        let mt = 1.0 - t;
        let b0 = mt * mt * mt;
        let b1 = 3.0 * mt * mt * t;
        let b2 = 3.0 * mt * t * t;
        let b3 = t * t * t;
        Point2::from(
            self.p0.coords * b0 + self.c0.coords * b1 + self.c1.coords * b2 + self.p1.coords * b3,
        )
    }

    fn derivative(&self, t: f64) -> Vector2 {
        let mt = 1.0 - t;
        (self.c0 - self.p0) * (3.0 * mt * mt)
            + (self.c1 - self.c0) * (6.0 * mt * t)
            + (self.p1 - self.c1) * (3.0 * t * t)
    }

    /// Global minimum of the squared distance over `[0, 1]`, taken among the
    /// interior stationary points and both endpoints.
    fn closest_point(&self, query: &Point2) -> (f64, Point2) {
        let stationary =
            polynomial::roots_in_unit_interval(&self.distance_derivative(query), ROOT_SUBDIVISIONS);

        let mut best_t = 0.0;
        let mut best_point = self.p0;
        let mut best_dist_sq = (query - self.p0).norm_squared();

        for t in stationary.into_iter().chain(std::iter::once(1.0)) {
            let point = self.evaluate(t);
            let dist_sq = (query - point).norm_squared();
            if dist_sq < best_dist_sq {
                best_t = t;
                best_point = point;
                best_dist_sq = dist_sq;
            }
        }

        (best_t, best_point)
    }
}
