//! Acceleration ramps
//!
//! Three bounded accumulators, each nudged once per frame:
//! - horizontal builds up slowly while a direction is held
//! - vertical peaks at takeoff and bleeds off while the jump is held
//! - gravital always builds, except for a brief wall-stick on fresh side contact

use glam::Vec2;

use super::arena::CollisionResult;
use super::state::KinematicState;
use crate::axis_sign;
use crate::tuning::Tuning;

/// Input points the other way horizontally from the previous facing
pub fn is_opposite_horizontal(direction: Vec2, facing: Vec2) -> bool {
    let a = axis_sign(direction.x);
    let b = axis_sign(facing.x);
    a != 0 && b != 0 && a != b
}

/// Ramp horizontal acceleration against this frame's input
///
/// `facing` is the sticky direction as it stood before this frame's input
/// was applied.
pub fn update_horizontal(state: &mut KinematicState, tuning: &Tuning, direction: Vec2, facing: Vec2) {
    state.horizontal_accel = if direction == Vec2::ZERO {
        (state.horizontal_accel - tuning.horizontal_accel_decrement).max(0.0)
    } else if is_opposite_horizontal(direction, facing) {
        // No carrying momentum through an instant turnaround
        0.0
    } else {
        (state.horizontal_accel + tuning.horizontal_accel_increment).min(tuning.max_horizontal_accel)
    };
}

/// Set, bleed or drop the jump impulse
pub fn update_vertical(state: &mut KinematicState, tuning: &Tuning, direction: Vec2) {
    let wants_up = direction.y > 0.0;

    state.vertical_accel = if wants_up && state.current_jump_time <= 0.0 {
        tuning.max_vertical_accel
    } else if wants_up {
        (state.vertical_accel - tuning.vertical_accel_decrement).max(0.0)
    } else {
        0.0
    };
}

/// Build gravity, restarting it when a side wall is first touched
pub fn update_gravital(state: &mut KinematicState, tuning: &Tuning, collision: &CollisionResult) {
    if collision.new_side_contact(&state.was_pushing) {
        log::debug!("Wall contact at {:?}, gravity reset", state.position);
        state.gravital_accel = 0.0;
    }

    state.gravital_accel =
        (state.gravital_accel + tuning.gravital_accel_increment).min(tuning.max_gravital_accel);
}

/// Run all three ramps for one frame
pub fn update_accelerations(
    state: &mut KinematicState,
    tuning: &Tuning,
    direction: Vec2,
    facing: Vec2,
    collision: &CollisionResult,
) {
    update_horizontal(state, tuning, direction, facing);
    update_vertical(state, tuning, direction);
    update_gravital(state, tuning, collision);
}
