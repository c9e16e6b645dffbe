//! Kinematic state of a moveable object
//!
//! Everything the integrator carries from one frame to the next lives here.

use std::ops::{Index, IndexMut};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::{CollisionResult, Edge};
use crate::tuning::Tuning;

/// Timers saturate here so a long idle session can't lose float precision
pub const TIMER_CEILING_MS: f32 = 60_000.0;

/// Advance a contact/cooldown timer, or restart it when `reset` is set
#[inline]
pub fn advance_timer(timer: f32, elapsed_ms: f32, reset: bool) -> f32 {
    if reset {
        0.0
    } else {
        (timer + elapsed_ms).min(TIMER_CEILING_MS)
    }
}

/// Milliseconds since each edge was last touched
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeTimers([f32; 4]);

impl EdgeTimers {
    pub fn splat(value: f32) -> Self {
        Self([value; 4])
    }

    /// Restart the timer of every touched edge, advance the others
    pub fn advance(&mut self, elapsed_ms: f32, collision: &CollisionResult) {
        for edge in Edge::ALL {
            self[edge] = advance_timer(self[edge], elapsed_ms, collision[edge]);
        }
    }

    /// Any edge touched within the last `window` ms
    pub fn any_within(&self, window: f32) -> bool {
        self.0.iter().any(|&t| t <= window)
    }
}

impl Index<Edge> for EdgeTimers {
    type Output = f32;

    fn index(&self, edge: Edge) -> &f32 {
        &self.0[edge.index()]
    }
}

impl IndexMut<Edge> for EdgeTimers {
    fn index_mut(&mut self, edge: Edge) -> &mut f32 {
        &mut self.0[edge.index()]
    }
}

/// Per-entity movement state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinematicState {
    pub position: Vec2,
    /// Last nonzero input direction (sticky facing)
    pub last_direction: Vec2,

    pub horizontal_accel: f32,
    pub vertical_accel: f32,
    pub gravital_accel: f32,

    pub horizontal_velocity: f32,
    pub vertical_velocity: f32,
    pub gravital_velocity: f32,

    /// Time since the current jump began; 0 when not jumping
    pub current_jump_time: f32,
    /// Time spent grounded since the last jump ended
    pub time_since_jump: f32,
    pub time_since_pushed: EdgeTimers,
    /// Previous frame's contact flags
    pub was_pushing: CollisionResult,
}

impl KinematicState {
    /// Fresh state at the origin, eligible to jump
    pub fn new(tuning: &Tuning) -> Self {
        Self::at(Vec2::ZERO, tuning)
    }

    /// Fresh state spawned at `position`
    pub fn at(position: Vec2, tuning: &Tuning) -> Self {
        Self {
            position,
            last_direction: Vec2::ZERO,
            horizontal_accel: 0.0,
            vertical_accel: 0.0,
            gravital_accel: 0.0,
            horizontal_velocity: 0.0,
            vertical_velocity: 0.0,
            gravital_velocity: 0.0,
            current_jump_time: 0.0,
            time_since_jump: tuning.min_time_between_jumps,
            time_since_pushed: EdgeTimers::splat(tuning.coyote_window),
            was_pushing: CollisionResult::NONE,
        }
    }

    /// A jump is currently lifting the object
    #[inline]
    pub fn is_jumping(&self) -> bool {
        self.current_jump_time > 0.0
    }
}
