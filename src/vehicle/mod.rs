//! Discrete-time vehicle kinematics.
//!
//! Two interchangeable models advance a vehicle by one tick from one sampled
//! input. Each tick has an implicit duration of one unit and there is no
//! sub-stepping. Neither model keeps a mode machine: forward and reverse are
//! just the sign of the linear velocity.

mod simple;
mod wheel;

pub use simple::{AxisInput, SimpleIntegrator, SimpleParams, SimpleState};
pub use wheel::{Throttle, WheelInput, WheelIntegrator, WheelParams, WheelState};

/// A kinematic model that mutates its state in place once per tick.
pub trait Integrator {
    /// Motion state owned by the host and advanced every tick.
    type State;
    /// One already sampled input value.
    type Input;

    /// Advances `state` by one tick.
    fn integrate(&self, state: &mut Self::State, input: Self::Input);
}

/// Moves `velocity` toward zero by `amount`, landing exactly on zero instead
/// of crossing it.
#[must_use]
#[allow(clippy::float_cmp)]
pub(crate) fn decay_toward_zero(velocity: f64, amount: f64) -> f64 {
    if velocity == 0.0 {
        return 0.0;
    }
    let direction = velocity.signum();
    let decayed = velocity - direction * amount;
    if decayed == 0.0 || decayed.signum() != direction {
        0.0
    } else {
        decayed
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn decay_reduces_magnitude() {
        assert!((decay_toward_zero(2.0, 0.5) - 1.5).abs() < 1e-12);
        assert!((decay_toward_zero(-2.0, 0.5) + 1.5).abs() < 1e-12);
    }

    #[test]
    fn decay_snaps_instead_of_crossing() {
        assert_eq!(decay_toward_zero(0.1, 0.75), 0.0);
        assert_eq!(decay_toward_zero(-0.1, 0.75), 0.0);
        assert_eq!(decay_toward_zero(0.5, 0.5), 0.0);
    }

    #[test]
    fn decay_of_rest_is_rest() {
        assert_eq!(decay_toward_zero(0.0, 1.0), 0.0);
    }
}
