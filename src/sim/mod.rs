//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Per-frame delta clamped before integration
//! - No rendering or platform dependencies

pub mod bat;
pub mod delivery;
pub mod state;
pub mod tick;

pub use bat::{contact_point, forward, swing_angle};
pub use delivery::{Delivery, DeliverySchedule};
pub use state::{
    Ball, BallPhase, GameEvent, GameState, HudMessage, Score, Snapshot, Swing,
    MSG_BOWLED, MSG_DEAD_BALL, MSG_GET_SET, MSG_GREETING, MSG_INCOMING, MSG_LOST, MSG_SWING_NOW,
};
pub use tick::{runs_for, tick, TickInput};
