//! Variable timestep movement tick
//!
//! Advances a moveable object by one host frame: probe, ramps, velocities,
//! jump gate, timers, then move and clamp into the arena.

use glam::Vec2;
use serde::Serialize;

use super::accel::update_accelerations;
use super::arena::{CollisionResult, Edge, probe};
use super::jump::is_allowed_to_jump;
use super::state::{KinematicState, advance_timer};
use crate::tuning::Tuning;

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Step {
    /// Frame time actually integrated, after sanitizing
    pub elapsed_ms: f32,
    /// Contacts probed at the start of the tick
    pub collision: CollisionResult,
    /// Jump gate decision for this tick
    pub jump_allowed: bool,
    /// Upward movement from the jump alone, before gravity
    pub jump_displacement: f32,
    /// Movement requested this tick (x right, y up), before clamping
    pub displacement: Vec2,
}

/// Host-side rendering hook
pub trait DrawSink {
    fn draw_at(&mut self, position: Vec2);
}

/// Advance `state` by one frame of `elapsed_ms` with raw input `direction`
///
/// `direction` components are expected in {-1, 0, 1}; positive y means up.
pub fn tick(state: &mut KinematicState, tuning: &Tuning, elapsed_ms: f32, direction: Vec2) -> Step {
    let dt = tuning.sanitize_elapsed(elapsed_ms);

    // Sticky facing
    let facing = state.last_direction;
    if direction != Vec2::ZERO {
        state.last_direction = direction;
    }

    let collision = probe(&tuning.arena, state.position);

    let was_jumping = state.is_jumping();
    update_accelerations(state, tuning, direction, facing, &collision);

    // Gravital velocity compounds through its accumulator, not through dt
    state.horizontal_velocity = state.horizontal_accel * dt;
    state.vertical_velocity = state.vertical_accel * dt;
    state.gravital_velocity = tuning.gravity * state.gravital_accel;

    let dx = state.last_direction.x * tuning.move_speed * state.horizontal_velocity;

    let jump_allowed = is_allowed_to_jump(state, tuning, &collision);
    let mut jump = state.last_direction.y * tuning.jump_speed * state.vertical_velocity;
    if state.current_jump_time > tuning.max_jump_time {
        jump = 0.0;
    }
    if !jump_allowed && state.current_jump_time <= 0.0 {
        jump = 0.0;
    }

    if collision.on_side_wall() {
        state.gravital_velocity /= tuning.wall_friction;
    }
    let dy = jump - state.gravital_velocity;

    state.current_jump_time = if dy > 0.0 {
        state.current_jump_time + dt
    } else {
        0.0
    };
    if !was_jumping && state.is_jumping() {
        log::debug!("Jump started at {:?}", state.position);
    }

    // Cooldown only counts up while standing on the floor
    let grounded_idle = state.current_jump_time <= 0.0 && collision.is_pushing(Edge::Bottom);
    state.time_since_jump = advance_timer(state.time_since_jump, dt, !grounded_idle);
    state.time_since_pushed.advance(dt, &collision);

    // Screen space: y grows downward
    state.position.x += dx;
    state.position.y -= dy;

    state.was_pushing = collision;

    let arena = &tuning.arena;
    state.position = state.position.clamp(
        Vec2::new(arena.left, arena.top),
        Vec2::new(arena.right, arena.bottom),
    );

    log::trace!(
        "tick dt={dt} pos={:?} accel=({}, {}, {})",
        state.position,
        state.horizontal_accel,
        state.vertical_accel,
        state.gravital_accel
    );

    Step {
        elapsed_ms: dt,
        collision,
        jump_allowed,
        jump_displacement: jump,
        displacement: Vec2::new(dx, dy),
    }
}

/// A single moveable object: tuning plus its kinematic state
#[derive(Debug, Clone)]
pub struct Mover {
    tuning: Tuning,
    state: KinematicState,
}

impl Mover {
    /// Spawn at the origin with fresh state
    pub fn new(tuning: Tuning) -> Self {
        let state = KinematicState::new(&tuning);
        Self { tuning, state }
    }

    /// Spawn at `position` with fresh state
    pub fn spawn_at(tuning: Tuning, position: Vec2) -> Self {
        let state = KinematicState::at(position, &tuning);
        Self { tuning, state }
    }

    /// Wrap an existing state (mid-flight setups, replays)
    pub fn from_state(tuning: Tuning, state: KinematicState) -> Self {
        Self { tuning, state }
    }

    /// Reset to spawn defaults at the origin
    pub fn initialize(&mut self) {
        self.state = KinematicState::new(&self.tuning);
    }

    /// Advance one frame
    pub fn update(&mut self, elapsed_ms: f32, direction: Vec2) -> Step {
        tick(&mut self.state, &self.tuning, elapsed_ms, direction)
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.state.position
    }

    pub fn draw(&self, sink: &mut impl DrawSink) {
        sink.draw_at(self.state.position);
    }

    pub fn state(&self) -> &KinematicState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}
