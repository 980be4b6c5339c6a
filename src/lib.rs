//! Cover Drive - a backyard cricket batting reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (delivery scheduling, ball flight,
//!   swing timing, contact resolution, scoring)
//! - `wasm`: Browser-facing handle (host clock + swing trigger in,
//!   read-only snapshots out)
//!
//! Scene construction, rendering and HUD text binding live with the host;
//! this crate only owns the per-frame game-state update.

pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use sim::{GameState, Snapshot, TickInput};

/// Game configuration constants
pub mod consts {
    use glam::Vec3;
    use std::f32::consts::PI;

    /// Largest delta accepted per tick; anything bigger is a stalled tab,
    /// not a frame
    pub const MAX_DT: f32 = 0.1;

    /// Downward acceleration on the ball while a delivery is live
    pub const GRAVITY: f32 = 18.0;

    /// Resting pose of the ball between deliveries
    pub const BALL_REST: Vec3 = Vec3::new(0.0, 0.75, 16.0);

    /// Release point down the pitch
    pub const RELEASE_Z: f32 = 16.0;
    pub const RELEASE_LATERAL: f32 = 0.9;
    pub const RELEASE_HEIGHT_MIN: f32 = 0.8;
    pub const RELEASE_HEIGHT_MAX: f32 = 1.05;

    /// Spot the bowler aims at, just past the stumps
    pub const TARGET_Z: f32 = -0.5;
    pub const TARGET_HEIGHT_MIN: f32 = 0.7;
    pub const TARGET_HEIGHT_MAX: f32 = 0.9;

    /// Delivery pace range
    pub const PACE_MIN: f32 = 11.0;
    pub const PACE_MAX: f32 = 15.0;

    /// Gap between deliveries
    pub const DELIVERY_DELAY_MIN: f32 = 1.0;
    pub const DELIVERY_DELAY_MAX: f32 = 1.6;

    /// Swing animation window
    pub const SWING_DURATION: f32 = 0.45;
    pub const MAX_SWING_ANGLE: f32 = PI / 3.4;

    /// Bat mount: pivot position and fixed mount rotation. The swing
    /// rotates the pivot about its x axis on top of this mount pose.
    pub const BAT_PIVOT: Vec3 = Vec3::new(-1.2, 1.0, 1.2);
    pub const BAT_MOUNT_YAW: f32 = PI / 2.4;
    pub const BAT_MOUNT_ROLL: f32 = PI / 9.0;
    /// Sweet spot on the blade, in the pivot's local frame
    pub const BAT_CONTACT_OFFSET: Vec3 = Vec3::new(0.4, -1.0, 0.1);

    /// Hit test radius around the sweet spot
    pub const CONTACT_RADIUS: f32 = 0.7;
    /// Past this z the ball has beaten the bat
    pub const STRIKE_LINE_Z: f32 = 1.4;
    /// Behind the batter entirely
    pub const BOWLED_Z: f32 = -3.0;

    /// Shot off the bat
    pub const SHOT_PACE_MIN: f32 = 12.0;
    pub const SHOT_PACE_MAX: f32 = 17.0;
    pub const SHOT_LATERAL_SPREAD: f32 = 4.5;
    pub const SHOT_LOFT_MIN: f32 = 8.0;
    pub const SHOT_LOFT_MAX: f32 = 11.5;

    /// Scoring thresholds
    pub const POWER_SHOT_SPEED: f32 = 16.0;
    pub const LOFT_BONUS_SPEED: f32 = 8.0;
    pub const MAX_RUNS_PER_BALL: u32 = 6;

    /// Ground interaction for a struck ball
    pub const GROUND_HEIGHT: f32 = 0.22;
    pub const BOUNCE_DAMPING: f32 = 0.6;
    pub const BOUNCE_RESTITUTION: f32 = 0.4;
    pub const DEAD_BALL_SPEED: f32 = 1.5;

    /// Field limits
    pub const BOUNDARY_RADIUS: f32 = 120.0;
    pub const LOST_BALL_FLOOR: f32 = -5.0;
}
