//! Per-frame simulation update
//!
//! One call per rendered frame. The update owns delivery scheduling, ball
//! kinematics, swing timing, contact resolution, scoring and the state
//! transitions between them. Everything here is total over valid numeric
//! state; hostile deltas are clamped at the door.

use rand::Rng;

use super::bat;
use super::delivery::Delivery;
use super::state::*;
use crate::consts::*;

/// Input edge signals for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Swing requested since the last tick; ignored mid-swing
    pub swing: bool,
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let dt = clamp_dt(dt);

    state.events.clear();
    state.message.tick(dt);

    if input.swing {
        state.swing.start();
    }
    state.swing.advance(dt);

    match state.ball.phase {
        BallPhase::Waiting => update_waiting(state, dt),
        BallPhase::InFlight | BallPhase::Struck => update_flight(state, dt),
    }
}

/// Runs awarded for a shot: 4 for a powerful one else 2, +2 when lofted,
/// capped at `MAX_RUNS_PER_BALL`
pub fn runs_for(speed: f32, loft: f32) -> u32 {
    let base = if speed > POWER_SHOT_SPEED { 4 } else { 2 };
    let bonus = if loft > LOFT_BONUS_SPEED { 2 } else { 0 };
    (base + bonus).min(MAX_RUNS_PER_BALL)
}

/// Reject junk deltas before they can corrupt the integration
fn clamp_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt > 0.0 {
        dt.min(MAX_DT)
    } else {
        0.0
    }
}

fn update_waiting(state: &mut GameState, dt: f32) {
    state.schedule.since_last += dt;

    let countdown = state.schedule.countdown();
    if countdown > 0.4 {
        state.message.prompt(format!("Next ball in {countdown:.1}s"));
    } else {
        state.message.prompt(MSG_GET_SET);
    }

    if state.schedule.due() {
        launch(state);
    }
}

fn launch(state: &mut GameState) {
    let delivery = Delivery::sample(&mut state.rng);
    state.ball.pos = delivery.start;
    state.ball.vel = delivery.velocity;
    state.ball.phase = BallPhase::InFlight;
    state.score.balls_faced += 1;
    state.schedule.since_last = 0.0;
    state.message.set(MSG_INCOMING, 0.5);
    state.events.push(GameEvent::Delivered);
}

fn update_flight(state: &mut GameState, dt: f32) {
    // Semi-implicit Euler: accelerate, then move
    state.ball.vel.y -= GRAVITY * dt;
    state.ball.pos += state.ball.vel * dt;

    if state.ball.phase == BallPhase::InFlight {
        let z = state.ball.pos.z;
        if z > STRIKE_LINE_Z - 0.5 && z < STRIKE_LINE_Z + 2.0 {
            state.message.prompt(MSG_SWING_NOW);
        }

        if state.swing.active {
            try_contact(state);
        }
    }

    if state.ball.phase == BallPhase::InFlight && state.ball.pos.z < BOWLED_Z {
        miss(state, MSG_BOWLED);
        state.events.push(GameEvent::Bowled);
    }

    if state.ball.phase == BallPhase::Struck && state.ball.pos.y <= GROUND_HEIGHT {
        ground_bounce(state);
    }

    if state.ball.in_flight()
        && (state.ball.pos.length() > BOUNDARY_RADIUS || state.ball.pos.y < LOST_BALL_FLOOR)
    {
        let struck = state.ball.phase == BallPhase::Struck;
        if struck {
            prepare_next(state, MSG_LOST, 2.0);
        } else {
            miss(state, MSG_LOST);
        }
        state.events.push(GameEvent::LostBall { struck });
    }
}

/// Distance test between the sweet spot and the ball, valid only until
/// the ball crosses the strike line
fn try_contact(state: &mut GameState) {
    let angle = state.swing.angle();
    let contact = bat::contact_point(angle);
    if contact.distance(state.ball.pos) < CONTACT_RADIUS && state.ball.pos.z < STRIKE_LINE_Z {
        strike(state, angle);
    }
}

fn strike(state: &mut GameState, swing: f32) {
    // Shot direction is the bat face flattened onto the ground plane,
    // with a little lateral scatter and a fresh lofted vertical
    let face = bat::forward(swing);
    let flat = glam::Vec3::new(face.x, 0.0, face.z).normalize();
    let pace = state.rng.random_range(SHOT_PACE_MIN..SHOT_PACE_MAX);
    let mut vel = flat * pace;
    vel.x += state
        .rng
        .random_range(-SHOT_LATERAL_SPREAD / 2.0..SHOT_LATERAL_SPREAD / 2.0);
    vel.y = state.rng.random_range(SHOT_LOFT_MIN..SHOT_LOFT_MAX);

    state.ball.vel = vel;
    state.ball.phase = BallPhase::Struck;

    let runs = runs_for(vel.length(), vel.y);
    state.score.streak += 1;
    state.score.runs += runs;
    state
        .message
        .set(format!("Timed it! You scored {runs} runs."), 2.4);
    state.events.push(GameEvent::Struck { runs });
}

fn ground_bounce(state: &mut GameState) {
    state.ball.pos.y = GROUND_HEIGHT;
    state.ball.vel *= BOUNCE_DAMPING;
    state.ball.vel.y = state.ball.vel.y.abs() * BOUNCE_RESTITUTION;
    if state.ball.vel.length() < DEAD_BALL_SPEED {
        prepare_next(state, MSG_DEAD_BALL, 1.2);
        state.events.push(GameEvent::DeadBall);
    }
}

/// An unhit ball got away: the streak is gone
fn miss(state: &mut GameState, message: &str) {
    state.score.streak = 0;
    prepare_next(state, message, 2.2);
}

/// Park the ball, post the outcome and schedule the next delivery
fn prepare_next(state: &mut GameState, message: &str, hold: f32) {
    state.message.set(message, hold);
    state.ready_ball();
}
