//! Fixed-rate simulation tick
//!
//! One call advances the world by a single frame, in a fixed step order:
//! quit poll, spawn, advance, cull, move, collide, score.

use rand::Rng;

use super::collision::ship_star_collision;
use super::state::{Direction, GamePhase, GameState, Star};
use crate::consts::*;

/// Input snapshot for a single tick
///
/// The four direction keys are independent booleans; several may be held in
/// the same tick. `quit` is the close signal from the windowing layer,
/// polled once per tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub quit: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Running {
        return;
    }

    // Quit goes straight to Stopped, skipping the rest of the tick
    if input.quit {
        state.phase = GamePhase::Stopped;
        return;
    }

    // Exactly one new star per tick at the top of the playfield
    let x = state.rng.random_range(0.0..state.bounds.x);
    let radius = state.rng.random_range(STAR_MIN_RADIUS..STAR_MAX_RADIUS);
    state.stars.push(Star::spawn(x, radius));

    for star in &mut state.stars {
        star.advance();
    }

    // Cull stars whose center has left the bottom of the playfield
    let height = state.bounds.y;
    state.stars.retain(|star| star.y <= height);

    // Held keys apply in a fixed order, one axis step each
    let bounds = state.bounds;
    if input.up {
        state.ship.apply_move(Direction::Up, bounds);
    }
    if input.down {
        state.ship.apply_move(Direction::Down, bounds);
    }
    if input.left {
        state.ship.apply_move(Direction::Left, bounds);
    }
    if input.right {
        state.ship.apply_move(Direction::Right, bounds);
    }

    // First overlap ends the run; the colliding tick does not score
    if state
        .stars
        .iter()
        .any(|star| ship_star_collision(&state.ship, star))
    {
        state.phase = GamePhase::Stopped;
        return;
    }

    state.score += 1;
}
