//! Jump gate: cooldown, surface contact and coyote time

use super::arena::CollisionResult;
use super::state::KinematicState;
use crate::tuning::Tuning;

/// Whether a fresh jump may start this frame
///
/// Checked in order: cooldown lockout, contact with any edge, then contact
/// with any edge inside the coyote window. Only consulted while no jump is in
/// progress; a running jump carries on regardless.
pub fn is_allowed_to_jump(state: &KinematicState, tuning: &Tuning, collision: &CollisionResult) -> bool {
    if state.time_since_jump < tuning.min_time_between_jumps {
        return false;
    }

    if collision.any() {
        return true;
    }

    state.time_since_pushed.any_within(tuning.coyote_window)
}
