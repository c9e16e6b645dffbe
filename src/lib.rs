//! Playground - 2D platformer movement prototype
//!
//! Core modules:
//! - `sim`: Frame-stepped movement simulation (probe, ramps, jump timing, integrator)
//! - `tuning`: Data-driven movement balance and arena bounds
//! - `input`: Host key state mapping and the seeded demo pilot

pub mod input;
pub mod sim;
pub mod tuning;

pub use input::{DemoPilot, KeyState};
pub use sim::{DrawSink, Mover, Step};
pub use tuning::{Tuning, TuningError};

/// Default movement constants
///
/// All times are milliseconds, distances are arena units.
pub mod consts {
    /// Arena bounds
    pub const MAX_TOP: f32 = 0.0;
    pub const MAX_LEFT: f32 = 0.0;
    pub const MAX_BOTTOM: f32 = 430.0;
    pub const MAX_RIGHT: f32 = 750.0;

    /// Displacement scale for horizontal velocity
    pub const MOVE_SPEED: f32 = 0.5;
    /// Displacement scale for vertical (jump) velocity
    pub const JUMP_SPEED: f32 = 0.7;
    /// Scale applied to the gravital accumulator (not time-scaled)
    pub const GRAVITY: f32 = 0.6;

    pub const MAX_HORIZONTAL_ACCEL: f32 = 1.0;
    pub const MAX_VERTICAL_ACCEL: f32 = 2.4;
    pub const MAX_GRAVITAL_ACCEL: f32 = 18.0;

    pub const HORIZONTAL_ACCEL_INCREMENT: f32 = 0.1;
    pub const HORIZONTAL_ACCEL_DECREMENT: f32 = 0.07;
    pub const VERTICAL_ACCEL_DECREMENT: f32 = 0.05;
    pub const GRAVITAL_ACCEL_INCREMENT: f32 = 0.5;

    /// Gravity divisor while hugging a side wall
    pub const WALL_FRICTION: f32 = 1.5;

    /// Longest a single jump may keep lifting
    pub const MAX_JUMP_TIME: f32 = 350.0;
    /// Coyote window after leaving any edge
    pub const COYOTE_WINDOW: f32 = 150.0;
    /// Lockout between landing and the next jump
    pub const MIN_TIME_BETWEEN_JUMPS: f32 = 75.0;

    /// Longest frame the integrator accepts before clamping
    pub const MAX_FRAME_MS: f32 = 100.0;
    /// Nominal host frame time (~60 Hz)
    pub const FRAME_MS: f32 = 1000.0 / 60.0;
}

/// Sign of a direction component as -1, 0 or 1
#[inline]
pub fn axis_sign(value: f32) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_sign() {
        assert_eq!(axis_sign(0.5), 1);
        assert_eq!(axis_sign(-3.0), -1);
        assert_eq!(axis_sign(0.0), 0);
        assert_eq!(axis_sign(-0.0), 0);
    }
}
