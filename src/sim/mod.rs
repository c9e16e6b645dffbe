//! Movement simulation module
//!
//! All movement logic lives here. This module is pure apart from logging:
//! - Caller-supplied frame time only
//! - One mutation entry point per entity (`Mover::update`)
//! - No rendering or platform dependencies

pub mod accel;
pub mod arena;
pub mod jump;
pub mod state;
pub mod tick;

pub use arena::{CollisionResult, Edge, probe};
pub use jump::is_allowed_to_jump;
pub use state::{EdgeTimers, KinematicState, TIMER_CEILING_MS};
pub use tick::{DrawSink, Mover, Step, tick};
