//! Arena edge probe
//!
//! Reports which of the four arena edges a position is touching. Pure: the
//! result depends only on the position and the arena bounds.

use std::ops::{Index, IndexMut};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Arena;

/// One side of the rectangular arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Edge::Top => 0,
            Edge::Bottom => 1,
            Edge::Left => 2,
            Edge::Right => 3,
        }
    }

    /// Left and right walls
    #[inline]
    pub const fn is_side(self) -> bool {
        matches!(self, Edge::Left | Edge::Right)
    }
}

/// Per-edge contact flags for a single frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CollisionResult([bool; 4]);

impl CollisionResult {
    pub const NONE: Self = Self([false; 4]);

    pub fn new(top: bool, bottom: bool, left: bool, right: bool) -> Self {
        Self([top, bottom, left, right])
    }

    #[inline]
    pub fn is_pushing(&self, edge: Edge) -> bool {
        self[edge]
    }

    /// Touching any edge at all
    pub fn any(&self) -> bool {
        self.0.iter().any(|&pushing| pushing)
    }

    /// Touching the left or right wall
    pub fn on_side_wall(&self) -> bool {
        self[Edge::Left] || self[Edge::Right]
    }

    /// Side walls touched now that were not touched in `previous`
    pub fn new_side_contact(&self, previous: &CollisionResult) -> bool {
        Edge::ALL
            .into_iter()
            .filter(|edge| edge.is_side())
            .any(|edge| self[edge] && !previous[edge])
    }
}

impl Index<Edge> for CollisionResult {
    type Output = bool;

    fn index(&self, edge: Edge) -> &bool {
        &self.0[edge.index()]
    }
}

impl IndexMut<Edge> for CollisionResult {
    fn index_mut(&mut self, edge: Edge) -> &mut bool {
        &mut self.0[edge.index()]
    }
}

/// Probe which arena edges `position` has reached or passed
///
/// Coordinates are compared by magnitude, so the probe is symmetric around
/// the origin like the arena it was built for (top-left at zero).
pub fn probe(arena: &Arena, position: Vec2) -> CollisionResult {
    let x = position.x.abs();
    let y = position.y.abs();

    CollisionResult::new(
        y <= arena.top,
        y >= arena.bottom,
        x <= arena.left,
        x >= arena.right,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_probe_open_space() {
        let arena = Arena::default();
        let result = probe(&arena, Vec2::new(300.0, 200.0));
        assert!(!result.any());
        assert_eq!(result, CollisionResult::NONE);
    }

    #[test]
    fn test_probe_corners() {
        let arena = Arena::default();

        let origin = probe(&arena, Vec2::ZERO);
        assert!(origin.is_pushing(Edge::Top));
        assert!(origin.is_pushing(Edge::Left));
        assert!(!origin.is_pushing(Edge::Bottom));
        assert!(!origin.is_pushing(Edge::Right));

        let far = probe(&arena, Vec2::new(750.0, 430.0));
        assert!(far.is_pushing(Edge::Bottom));
        assert!(far.is_pushing(Edge::Right));
        assert!(!far.is_pushing(Edge::Top));
        assert!(!far.is_pushing(Edge::Left));
    }

    #[test]
    fn test_probe_uses_magnitude() {
        let arena = Arena::default();
        // Negative coordinates past the far bound still count
        let result = probe(&arena, Vec2::new(-800.0, -500.0));
        assert!(result.is_pushing(Edge::Right));
        assert!(result.is_pushing(Edge::Bottom));
    }

    #[test]
    fn test_probe_alternate_arena() {
        let arena = Arena {
            top: 10.0,
            left: 20.0,
            bottom: 100.0,
            right: 200.0,
        };
        let result = probe(&arena, Vec2::new(15.0, 5.0));
        assert!(result.is_pushing(Edge::Top));
        assert!(result.is_pushing(Edge::Left));
        assert!(!probe(&arena, Vec2::new(50.0, 50.0)).any());
    }

    #[test]
    fn test_new_side_contact() {
        let previous = CollisionResult::new(false, true, false, false);
        let now = CollisionResult::new(false, true, false, true);
        assert!(now.new_side_contact(&previous));
        assert!(!now.new_side_contact(&now));

        // Fresh floor contact is not a wall
        let landed = CollisionResult::new(false, true, false, false);
        assert!(!landed.new_side_contact(&CollisionResult::NONE));
    }

    proptest! {
        #[test]
        fn prop_right_edge_at_threshold(x in 750.0f32..5000.0, y in 1.0f32..429.0) {
            let result = probe(&Arena::default(), Vec2::new(x, y));
            prop_assert!(result.is_pushing(Edge::Right));
            prop_assert!(!result.is_pushing(Edge::Left));
        }

        #[test]
        fn prop_bottom_edge_at_threshold(x in 1.0f32..749.0, y in 430.0f32..5000.0) {
            let result = probe(&Arena::default(), Vec2::new(x, y));
            prop_assert!(result.is_pushing(Edge::Bottom));
            prop_assert!(!result.is_pushing(Edge::Top));
        }

        #[test]
        fn prop_probe_matches_bounds(x in -1000.0f32..1000.0, y in -1000.0f32..1000.0) {
            let arena = Arena::default();
            let result = probe(&arena, Vec2::new(x, y));
            prop_assert_eq!(result.is_pushing(Edge::Top), y.abs() <= arena.top);
            prop_assert_eq!(result.is_pushing(Edge::Bottom), y.abs() >= arena.bottom);
            prop_assert_eq!(result.is_pushing(Edge::Left), x.abs() <= arena.left);
            prop_assert_eq!(result.is_pushing(Edge::Right), x.abs() >= arena.right);
        }
    }
}
