//! Movement tuning
//!
//! Immutable balance values and arena bounds, loaded from JSON or defaulted.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("arena is inverted: {axis} bounds {min} > {max}")]
    InvertedArena {
        axis: &'static str,
        min: f32,
        max: f32,
    },
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidParameter { name: &'static str, value: f32 },
    #[error("wall_friction must be positive, got {0}")]
    InvalidWallFriction(f32),
}

/// Fixed rectangular arena the mover is confined to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Arena {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            top: MAX_TOP,
            left: MAX_LEFT,
            bottom: MAX_BOTTOM,
            right: MAX_RIGHT,
        }
    }
}

/// Movement balance values
///
/// Times are milliseconds. Any field missing from a JSON file falls back
/// to its default, so partial overrides are fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub arena: Arena,

    // === Speeds ===
    pub move_speed: f32,
    pub jump_speed: f32,
    pub gravity: f32,

    // === Ramps ===
    pub max_horizontal_accel: f32,
    pub max_vertical_accel: f32,
    pub max_gravital_accel: f32,
    pub horizontal_accel_increment: f32,
    pub horizontal_accel_decrement: f32,
    pub vertical_accel_decrement: f32,
    pub gravital_accel_increment: f32,
    /// Gravity divisor while touching a side wall
    pub wall_friction: f32,

    // === Jump timing ===
    pub max_jump_time: f32,
    /// Grace period after leaving an edge during which a jump still starts
    pub coyote_window: f32,
    pub min_time_between_jumps: f32,

    /// Frames longer than this are clamped before integration
    pub max_frame_ms: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena: Arena::default(),

            move_speed: MOVE_SPEED,
            jump_speed: JUMP_SPEED,
            gravity: GRAVITY,

            max_horizontal_accel: MAX_HORIZONTAL_ACCEL,
            max_vertical_accel: MAX_VERTICAL_ACCEL,
            max_gravital_accel: MAX_GRAVITAL_ACCEL,
            horizontal_accel_increment: HORIZONTAL_ACCEL_INCREMENT,
            horizontal_accel_decrement: HORIZONTAL_ACCEL_DECREMENT,
            vertical_accel_decrement: VERTICAL_ACCEL_DECREMENT,
            gravital_accel_increment: GRAVITAL_ACCEL_INCREMENT,
            wall_friction: WALL_FRICTION,

            max_jump_time: MAX_JUMP_TIME,
            coyote_window: COYOTE_WINDOW,
            min_time_between_jumps: MIN_TIME_BETWEEN_JUMPS,

            max_frame_ms: MAX_FRAME_MS,
        }
    }
}

impl Tuning {
    /// Same balance, different arena
    pub fn with_arena(arena: Arena) -> Self {
        Self {
            arena,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a JSON tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Check that the arena is ordered and every parameter is usable
    pub fn validate(&self) -> Result<(), TuningError> {
        let Arena {
            top,
            left,
            bottom,
            right,
        } = self.arena;
        for (name, value) in [
            ("arena.top", top),
            ("arena.left", left),
            ("arena.bottom", bottom),
            ("arena.right", right),
        ] {
            if !value.is_finite() {
                return Err(TuningError::InvalidParameter { name, value });
            }
        }
        if left > right {
            return Err(TuningError::InvertedArena {
                axis: "horizontal",
                min: left,
                max: right,
            });
        }
        if top > bottom {
            return Err(TuningError::InvertedArena {
                axis: "vertical",
                min: top,
                max: bottom,
            });
        }

        for (name, value) in [
            ("move_speed", self.move_speed),
            ("jump_speed", self.jump_speed),
            ("gravity", self.gravity),
            ("max_horizontal_accel", self.max_horizontal_accel),
            ("max_vertical_accel", self.max_vertical_accel),
            ("max_gravital_accel", self.max_gravital_accel),
            ("horizontal_accel_increment", self.horizontal_accel_increment),
            ("horizontal_accel_decrement", self.horizontal_accel_decrement),
            ("vertical_accel_decrement", self.vertical_accel_decrement),
            ("gravital_accel_increment", self.gravital_accel_increment),
            ("max_jump_time", self.max_jump_time),
            ("coyote_window", self.coyote_window),
            ("min_time_between_jumps", self.min_time_between_jumps),
            ("max_frame_ms", self.max_frame_ms),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError::InvalidParameter { name, value });
            }
        }

        if !(self.wall_friction.is_finite() && self.wall_friction > 0.0) {
            return Err(TuningError::InvalidWallFriction(self.wall_friction));
        }

        Ok(())
    }

    /// Clamp a host-supplied frame time into `[0, max_frame_ms]`
    ///
    /// NaN and negative values count as an empty frame.
    pub fn sanitize_elapsed(&self, elapsed_ms: f32) -> f32 {
        if elapsed_ms.is_nan() || elapsed_ms <= 0.0 {
            if elapsed_ms != 0.0 {
                log::debug!("Discarding invalid frame time {elapsed_ms}");
            }
            return 0.0;
        }
        if elapsed_ms > self.max_frame_ms {
            log::debug!(
                "Clamping frame time {elapsed_ms}ms to {}ms",
                self.max_frame_ms
            );
            return self.max_frame_ms;
        }
        elapsed_ms
    }
}
