//! Host input mapping
//!
//! Turns polled key state into the raw direction vector the mover consumes,
//! and provides a seeded pilot that plays on its own for headless runs.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::FRAME_MS;

/// Keys the host polls each frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    /// Space
    pub jump: bool,
    pub left: bool,
    pub right: bool,
    /// Escape
    pub exit: bool,
}

impl KeyState {
    /// Direction vector with components in {-1, 0, 1}, y up
    ///
    /// Right wins when both horizontal keys are held.
    pub fn direction(&self) -> Vec2 {
        let x = if self.right {
            1.0
        } else if self.left {
            -1.0
        } else {
            0.0
        };
        let y = if self.jump { 1.0 } else { 0.0 };
        Vec2::new(x, y)
    }
}

/// Seeded input generator (idle/demo mode)
///
/// Holds a random intent for a random number of frames, so runs with the same
/// seed replay identically.
#[derive(Debug, Clone)]
pub struct DemoPilot {
    rng: Pcg32,
    keys: KeyState,
    hold_frames: u32,
}

impl DemoPilot {
    /// Frames an intent is held for
    const MIN_HOLD: u32 = 6;
    const MAX_HOLD: u32 = 40;
    /// Chance a new intent includes a jump
    const JUMP_CHANCE: f64 = 0.35;
    /// Frame time jitter around the nominal 60 Hz
    const FRAME_JITTER_MS: f32 = 1.5;

    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            keys: KeyState::default(),
            hold_frames: 0,
        }
    }

    /// Key state for the next frame
    pub fn next_keys(&mut self) -> KeyState {
        if self.hold_frames == 0 {
            let lateral = self.rng.random_range(0..3u8);
            self.keys = KeyState {
                jump: self.rng.random_bool(Self::JUMP_CHANCE),
                left: lateral == 1,
                right: lateral == 2,
                exit: false,
            };
            self.hold_frames = self.rng.random_range(Self::MIN_HOLD..=Self::MAX_HOLD);
        }
        self.hold_frames -= 1;
        self.keys
    }

    /// Direction for the next frame
    pub fn next_direction(&mut self) -> Vec2 {
        self.next_keys().direction()
    }

    /// A host frame time near 60 Hz
    pub fn next_frame_ms(&mut self) -> f32 {
        FRAME_MS + self.rng.random_range(-Self::FRAME_JITTER_MS..=Self::FRAME_JITTER_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(KeyState::default().direction(), Vec2::ZERO);

        let jump = KeyState {
            jump: true,
            ..Default::default()
        };
        assert_eq!(jump.direction(), Vec2::new(0.0, 1.0));

        let left = KeyState {
            left: true,
            ..Default::default()
        };
        assert_eq!(left.direction(), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_right_wins_over_left() {
        let both = KeyState {
            left: true,
            right: true,
            jump: true,
            exit: false,
        };
        assert_eq!(both.direction(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_pilot_determinism() {
        let mut a = DemoPilot::new(99999);
        let mut b = DemoPilot::new(99999);
        for _ in 0..500 {
            assert_eq!(a.next_keys(), b.next_keys());
            assert_eq!(a.next_frame_ms(), b.next_frame_ms());
        }
    }

    #[test]
    fn test_pilot_output_is_well_formed() {
        let mut pilot = DemoPilot::new(7);
        for _ in 0..500 {
            let keys = pilot.next_keys();
            assert!(!(keys.left && keys.right));
            assert!(!keys.exit);

            let dt = pilot.next_frame_ms();
            assert!(dt >= FRAME_MS - DemoPilot::FRAME_JITTER_MS);
            assert!(dt <= FRAME_MS + DemoPilot::FRAME_JITTER_MS);
        }
    }

    #[test]
    fn test_pilot_holds_intent() {
        let mut pilot = DemoPilot::new(12345);
        let first = pilot.next_keys();
        // Every intent lasts at least MIN_HOLD frames
        for _ in 1..DemoPilot::MIN_HOLD {
            assert_eq!(pilot.next_keys(), first);
        }
    }
}
