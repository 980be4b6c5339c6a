//! Browser-facing game handle
//!
//! The presentation layer owns the scene, the HUD and the event listeners;
//! this handle owns the clock and the simulator. Per frame the host calls
//! [`WebGame::frame`] with its monotonic clock and reads whatever it needs
//! for drawing. Swing gestures land in a single pending slot that the next
//! frame consumes, so input timing stays decoupled from simulation timing.

use wasm_bindgen::prelude::*;

use crate::sim::{tick, GameState, TickInput};

#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
    pending_swing: bool,
    last_time_ms: Option<f64>,
}

#[wasm_bindgen]
impl WebGame {
    /// New game with a seed drawn from browser entropy
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebGame {
        Self::with_seed(rand::random())
    }

    /// New game with a fixed seed, for reproducible sessions
    pub fn with_seed(seed: u64) -> WebGame {
        init_logging();
        log::info!("new game, seed {seed}");
        WebGame {
            state: GameState::new(seed),
            pending_swing: false,
            last_time_ms: None,
        }
    }

    /// Queue a swing for the next frame. Requests while a swing is already
    /// in progress are dropped by the sim.
    pub fn swing(&mut self) {
        self.pending_swing = true;
    }

    /// Advance the game by one frame. `now_ms` is the host clock
    /// (performance.now()); the first frame sees a zero delta.
    pub fn frame(&mut self, now_ms: f64) {
        let delta = match self.last_time_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_time_ms = Some(now_ms);

        let input = TickInput {
            swing: self.pending_swing,
        };
        self.pending_swing = false;
        tick(&mut self.state, &input, delta);
    }

    /// Full frame snapshot as JSON, for hosts that prefer one read
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.state.snapshot()).unwrap_or_default()
    }

    // Scalar accessors so the HUD can skip the JSON round trip

    pub fn ball_x(&self) -> f32 {
        self.state.ball.pos.x
    }

    pub fn ball_y(&self) -> f32 {
        self.state.ball.pos.y
    }

    pub fn ball_z(&self) -> f32 {
        self.state.ball.pos.z
    }

    pub fn bat_angle(&self) -> f32 {
        self.state.swing.angle()
    }

    pub fn runs(&self) -> u32 {
        self.state.score.runs
    }

    pub fn streak(&self) -> u32 {
        self.state.score.streak
    }

    pub fn balls_faced(&self) -> u32 {
        self.state.score.balls_faced
    }

    pub fn message(&self) -> String {
        self.state.message.text().to_owned()
    }
}

impl Default for WebGame {
    fn default() -> Self {
        Self::new()
    }
}

fn init_logging() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
    });
}
