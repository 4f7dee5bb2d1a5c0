use std::f64::consts::FRAC_PI_2;

use crate::math::{heading, Point2};

use super::{decay_toward_zero, Integrator};

/// Tuning constants for [`SimpleIntegrator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleParams {
    /// Angular velocity gained per tick at full turn input.
    pub angular_acceleration: f64,
    pub max_angular_velocity: f64,
    /// Linear velocity gained per tick at full throttle input.
    pub linear_acceleration: f64,
    pub max_linear_velocity: f64,
    /// Linear velocity lost per tick while coasting.
    pub friction: f64,
}

impl Default for SimpleParams {
    fn default() -> Self {
        Self {
            angular_acceleration: 0.005,
            max_angular_velocity: 0.07,
            linear_acceleration: 0.1,
            max_linear_velocity: 5.0,
            friction: 0.75,
        }
    }
}

/// Motion state of the two-axis model.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleState {
    pub position: Point2,
    /// Heading in radians.
    pub angle: f64,
    pub linear_velocity: f64,
    pub angular_velocity: f64,
}

impl SimpleState {
    /// A vehicle at rest at `position`, facing `angle`.
    #[must_use]
    pub fn at(position: Point2, angle: f64) -> Self {
        Self {
            position,
            angle,
            linear_velocity: 0.0,
            angular_velocity: 0.0,
        }
    }
}

impl Default for SimpleState {
    /// At rest at the origin, facing +y.
    fn default() -> Self {
        Self::at(Point2::origin(), FRAC_PI_2)
    }
}

/// Two-axis input, each component in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisInput {
    /// Turn intent.
    pub x: f64,
    /// Throttle intent; positive drives along the current heading.
    pub y: f64,
}

impl AxisInput {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Turn-and-throttle model: the input drives angular and linear velocity
/// directly, and the vehicle moves along its heading.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleIntegrator {
    pub params: SimpleParams,
}

impl SimpleIntegrator {
    #[must_use]
    pub fn new(params: SimpleParams) -> Self {
        Self { params }
    }
}

impl Integrator for SimpleIntegrator {
    type State = SimpleState;
    type Input = AxisInput;

    #[allow(clippy::float_cmp)]
    fn integrate(&self, state: &mut SimpleState, input: AxisInput) {
        let p = &self.params;

        state.angular_velocity = (state.angular_velocity + input.x * p.angular_acceleration)
            .clamp(-p.max_angular_velocity, p.max_angular_velocity);
        state.angle += state.angular_velocity;

        // No gradual angular decay: releasing the turn stops rotation at once.
        if input.x == 0.0 {
            state.angular_velocity = 0.0;
        }

        state.linear_velocity = (state.linear_velocity + input.y * p.linear_acceleration)
            .clamp(-p.max_linear_velocity, p.max_linear_velocity);
        state.position += heading(state.angle) * state.linear_velocity;

        if input.y == 0.0 {
            state.linear_velocity = decay_toward_zero(state.linear_velocity, p.friction);
        }
    }
}
