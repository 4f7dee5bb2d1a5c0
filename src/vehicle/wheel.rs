use tracing::trace;

use crate::math::{heading, Point2};

use super::{decay_toward_zero, Integrator};

/// Tuning constants for [`WheelIntegrator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelParams {
    /// Velocity gained per tick while accelerating or reversing.
    pub acceleration: f64,
    /// Front wheel angle (radians) at full steering input.
    pub steering: f64,
    /// Velocity lost per tick while coasting.
    pub friction: f64,
    /// Velocity lost per tick while braking.
    pub braking: f64,
    pub max_linear_velocity: f64,
    /// Below this speed coasting friction no longer applies.
    pub min_linear_velocity_for_decay: f64,
}

impl Default for WheelParams {
    fn default() -> Self {
        Self {
            acceleration: 0.25,
            steering: 0.75,
            friction: 0.25,
            braking: 0.5,
            max_linear_velocity: 10.0,
            min_linear_velocity_for_decay: 0.01,
        }
    }
}

/// Motion state of the two-wheel model.
///
/// The wheel positions are derived from `position` and `angle` at the start of
/// every tick; after a tick they hold where each wheel travelled to.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelState {
    pub position: Point2,
    /// Heading in radians.
    pub angle: f64,
    pub linear_velocity: f64,
    pub front_wheel_position: Point2,
    pub back_wheel_position: Point2,
    wheelbase: f64,
}

impl WheelState {
    /// A vehicle at rest at `position`, facing `angle`, with wheels
    /// `wheelbase` apart.
    #[must_use]
    pub fn new(position: Point2, angle: f64, wheelbase: f64) -> Self {
        let half = heading(angle) * (wheelbase / 2.0);
        Self {
            position,
            angle,
            linear_velocity: 0.0,
            front_wheel_position: position + half,
            back_wheel_position: position - half,
            wheelbase,
        }
    }

    /// Distance between the two wheel contact points.
    #[must_use]
    pub fn wheelbase(&self) -> f64 {
        self.wheelbase
    }
}

impl Default for WheelState {
    fn default() -> Self {
        Self::new(Point2::origin(), 0.0, 80.0)
    }
}

/// Discrete throttle command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Throttle {
    /// Axis value `-1`.
    Accelerate,
    /// Axis value `0`.
    #[default]
    Coast,
    /// Axis value `+1`: brakes while moving forward, otherwise reverses.
    BrakeOrReverse,
}

impl Throttle {
    /// Maps a sampled throttle axis. Only exactly `-1` and `+1` count as
    /// pressed; everything else coasts.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_axis(value: f64) -> Self {
        if value == -1.0 {
            Self::Accelerate
        } else if value == 1.0 {
            Self::BrakeOrReverse
        } else {
            Self::Coast
        }
    }
}

/// Steering and throttle for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelInput {
    /// Steering intent in `[-1, 1]`.
    pub steering: f64,
    pub throttle: Throttle,
}

impl WheelInput {
    #[must_use]
    pub fn new(steering: f64, throttle: Throttle) -> Self {
        Self { steering, throttle }
    }
}

/// Front-steered two-wheel model.
///
/// Both wheels roll the same distance each tick; the back wheel along the
/// heading, the front wheel along the heading plus the steering angle. The new
/// heading is the direction from back to front wheel, so turning comes only
/// from the two wheels diverging.
#[derive(Debug, Clone, Copy, Default)]
pub struct WheelIntegrator {
    pub params: WheelParams,
}

impl WheelIntegrator {
    #[must_use]
    pub fn new(params: WheelParams) -> Self {
        Self { params }
    }

    fn next_linear_velocity(&self, velocity: f64, throttle: Throttle) -> f64 {
        let p = &self.params;

        let (velocity, acceleration) = match throttle {
            Throttle::Accelerate => (velocity, p.acceleration),
            // Braking only applies to forward motion. Holding accelerate while
            // reversing is plain acceleration.
            Throttle::BrakeOrReverse if velocity > 0.0 => {
                (decay_toward_zero(velocity, p.braking), 0.0)
            }
            Throttle::BrakeOrReverse => (velocity, -p.acceleration),
            Throttle::Coast if velocity.abs() > p.min_linear_velocity_for_decay => {
                (decay_toward_zero(velocity, p.friction), 0.0)
            }
            Throttle::Coast => (velocity, 0.0),
        };

        (velocity + acceleration).clamp(-p.max_linear_velocity, p.max_linear_velocity)
    }
}

impl Integrator for WheelIntegrator {
    type State = WheelState;
    type Input = WheelInput;

    fn integrate(&self, state: &mut WheelState, input: WheelInput) {
        let steering = input.steering * self.params.steering;

        let half = heading(state.angle) * (state.wheelbase / 2.0);
        state.front_wheel_position = state.position + half;
        state.back_wheel_position = state.position - half;

        state.linear_velocity = self.next_linear_velocity(state.linear_velocity, input.throttle);
        trace!(linear_velocity = state.linear_velocity, "wheel model tick");

        state.back_wheel_position += heading(state.angle) * state.linear_velocity;
        state.front_wheel_position += heading(state.angle + steering) * state.linear_velocity;

        let axle = state.front_wheel_position - state.back_wheel_position;
        state.position = Point2::from(
            (state.front_wheel_position.coords + state.back_wheel_position.coords) / 2.0,
        );
        state.angle = axle.y.atan2(axle.x);
    }
}
