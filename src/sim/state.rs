//! Game state and core simulation types
//!
//! One state bundle owns everything the simulator mutates; the rendering
//! and HUD layers only ever read the derived [`Snapshot`].

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::bat;
use super::delivery::DeliverySchedule;
use crate::consts::*;

/// HUD copy, kept in one place so hosts and tests agree on the strings
pub const MSG_GREETING: &str = "Press spacebar or tap to swing!";
pub const MSG_INCOMING: &str = "Ball incoming!";
pub const MSG_SWING_NOW: &str = "Swing now!";
pub const MSG_GET_SET: &str = "Get set... swing!";
pub const MSG_BOWLED: &str = "Bowled! Watch the line.";
pub const MSG_DEAD_BALL: &str = "Ready for the next delivery.";
pub const MSG_LOST: &str = "That one is lost in the stands!";

/// Where the ball is in its delivery lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallPhase {
    /// Between deliveries, parked at the bowler's end
    Waiting,
    /// Delivered and live, not yet struck
    InFlight,
    /// Struck by the bat, still live
    Struck,
}

/// The one ball in play, reused across deliveries
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec3,
    pub vel: Vec3,
    pub phase: BallPhase,
}

impl Ball {
    pub fn at_rest() -> Self {
        Self {
            pos: BALL_REST,
            vel: Vec3::ZERO,
            phase: BallPhase::Waiting,
        }
    }

    /// True while a delivery is live, struck or not
    pub fn in_flight(&self) -> bool {
        self.phase != BallPhase::Waiting
    }
}

/// Swing animation state; the easing curve lives in [`bat::swing_angle`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Swing {
    pub active: bool,
    pub elapsed: f32,
}

impl Swing {
    /// Trigger a swing; re-triggering mid-swing is a no-op
    pub fn start(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        self.elapsed = 0.0;
    }

    /// Advance the animation clock, clearing once the window is done
    pub fn advance(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.elapsed += dt;
        if self.elapsed >= SWING_DURATION {
            self.active = false;
            self.elapsed = 0.0;
        }
    }

    /// Current bat swing angle in radians; zero when idle
    pub fn angle(&self) -> f32 {
        if self.active {
            bat::swing_angle(self.elapsed)
        } else {
            0.0
        }
    }
}

/// Scoreboard counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub runs: u32,
    pub streak: u32,
    pub balls_faced: u32,
}

/// HUD message with a hold timer. Held messages (outcomes) suppress the
/// transient prompts (countdown, swing cues) until the hold runs out.
#[derive(Debug, Clone, Default)]
pub struct HudMessage {
    text: String,
    hold: f32,
}

impl HudMessage {
    /// Overwrite the message and hold it for `hold` seconds
    pub fn set(&mut self, text: impl Into<String>, hold: f32) {
        self.text = text.into();
        self.hold = hold;
    }

    /// Show a transient prompt unless a held message is still up
    pub fn prompt(&mut self, text: impl Into<String>) {
        if self.hold <= 0.0 {
            self.text = text.into();
        }
    }

    pub fn tick(&mut self, dt: f32) {
        if self.hold > 0.0 {
            self.hold = (self.hold - dt).max(0.0);
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_held(&self) -> bool {
        self.hold > 0.0
    }
}

/// Something the last tick did that a host may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new ball was launched
    Delivered,
    /// Bat met ball
    Struck { runs: u32 },
    /// The ball got through unhit
    Bowled,
    /// A struck ball rolled dead
    DeadBall,
    /// The ball left the field, or the world
    LostBall { struck: bool },
}

/// Complete game state, owned by the simulator
#[derive(Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub ball: Ball,
    pub swing: Swing,
    pub score: Score,
    pub schedule: DeliverySchedule,
    pub message: HudMessage,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh game with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let schedule = DeliverySchedule::sample(&mut rng);
        let mut message = HudMessage::default();
        message.set(MSG_GREETING, 2.8);
        Self {
            seed,
            ball: Ball::at_rest(),
            swing: Swing::default(),
            score: Score::default(),
            schedule,
            message,
            events: Vec::new(),
            rng,
        }
    }

    /// Park the ball and schedule the next delivery. Safe to call at any
    /// time; each call resamples the delay.
    pub fn ready_ball(&mut self) {
        self.ball = Ball::at_rest();
        self.schedule = DeliverySchedule::sample(&mut self.rng);
    }

    /// Read-only view for the rendering/HUD layer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            ball_pos: self.ball.pos,
            bat_angle: self.swing.angle(),
            ball_in_flight: self.ball.in_flight(),
            runs: self.score.runs,
            streak: self.score.streak,
            balls_faced: self.score.balls_faced,
            message: self.message.text().to_owned(),
        }
    }
}

/// Per-frame view handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub ball_pos: Vec3,
    pub bat_angle: f32,
    pub ball_in_flight: bool,
    pub runs: u32,
    pub streak: u32,
    pub balls_faced: u32,
    pub message: String,
}
