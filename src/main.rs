//! Cover Drive entry point
//!
//! Browser hosts drive the game through `wasm::WebGame`; the native binary
//! is a headless smoke run of the simulator.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use cover_drive::sim::{tick, GameEvent, GameState, TickInput};

    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2026);
    log::info!("Cover Drive headless run, seed {seed}");

    let mut state = GameState::new(seed);
    let dt = 1.0 / 60.0;

    // Thirty simulated seconds of auto-play: swing whenever the ball
    // gets close enough to be worth a go
    for _ in 0..(30 * 60) {
        let input = TickInput {
            swing: state.ball.in_flight() && state.ball.pos.z < 4.0,
        };
        tick(&mut state, &input, dt);

        for event in &state.events {
            match event {
                GameEvent::Delivered => log::debug!("delivery {}", state.score.balls_faced),
                GameEvent::Struck { runs } => log::info!("struck for {runs}"),
                GameEvent::Bowled => log::info!("bowled"),
                GameEvent::DeadBall => log::debug!("dead ball"),
                GameEvent::LostBall { struck } => log::info!("ball lost (struck: {struck})"),
            }
        }
    }

    let snapshot = state.snapshot();
    println!(
        "{} runs off {} balls, streak {}",
        snapshot.runs, snapshot.balls_faced, snapshot.streak
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM hosts construct wasm::WebGame directly; nothing to run here
}
