//! Entities and game state
//!
//! Everything the loop mutates lives here. The loop exclusively owns the
//! star set, the ship and the score; they are only touched from its own tick.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Directional movement command, one axis per call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Allocated but not yet ticking
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended by collision or quit, terminal
    Stopped,
}

/// A falling star
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// Center x, fixed once spawned
    pub x: f32,
    /// Center y, recomputed on every advance
    pub y: f32,
    pub radius: f32,
    /// Ticks since spawn
    ticks: u32,
}

impl Star {
    /// Spawn at the top of the playfield
    pub fn spawn(x: f32, radius: f32) -> Self {
        Self {
            x,
            y: 0.0,
            radius,
            ticks: 0,
        }
    }

    /// Advance one tick. Center y after t ticks is exactly
    /// `v*t + a*t^2/2`, so the fall accelerates and never reverses.
    pub fn advance(&mut self) {
        self.ticks += 1;
        let t = self.ticks as f32;
        self.y = STAR_VELOCITY * t + 0.5 * STAR_ACCELERATION * t * t;
    }

    /// Center position
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceShip {
    /// Center position, always within the playfield after clamping
    pub pos: Vec2,
    /// Displacement per direction key per tick
    pub velocity: f32,
}

impl SpaceShip {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            velocity: SHIP_VELOCITY,
        }
    }

    /// Step one axis in the given direction and clamp to `[0, bounds]`.
    /// Diagonal movement comes from several calls in the same tick, one per
    /// held key.
    pub fn apply_move(&mut self, direction: Direction, bounds: Vec2) {
        match direction {
            Direction::Up => self.pos.y = (self.pos.y - self.velocity).max(0.0),
            Direction::Down => self.pos.y = (self.pos.y + self.velocity).min(bounds.y),
            Direction::Left => self.pos.x = (self.pos.x - self.velocity).max(0.0),
            Direction::Right => self.pos.x = (self.pos.x + self.velocity).min(bounds.x),
        }
    }

    /// Half-extents of the collision rectangle centered on `pos`
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(SHIP_WIDTH / 2.0, SHIP_HEIGHT / 2.0)
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed, logged at startup
    pub seed: u64,
    /// Spawn RNG
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Playfield bounds (width, height)
    pub bounds: Vec2,
    /// The player's ship
    pub ship: SpaceShip,
    /// Active stars, in spawn order
    pub stars: Vec<Star>,
    /// Incremented once per completed tick
    pub score: u64,
}

impl GameState {
    /// Create a fresh run with the given seed. The ship starts centered
    /// horizontally, a third of the playfield above the bottom edge.
    pub fn new(seed: u64) -> Self {
        let bounds = Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT);
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::NotStarted,
            bounds,
            ship: SpaceShip::new(Vec2::new(bounds.x / 2.0, bounds.y * 2.0 / 3.0)),
            stars: Vec::new(),
            score: 0,
        }
    }

    /// NotStarted -> Running. The display surface is opened by the platform
    /// layer; the sim only flips the phase.
    pub fn start(&mut self) {
        if self.phase == GamePhase::NotStarted {
            self.phase = GamePhase::Running;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_star_matches_closed_form() {
        let mut star = Star::spawn(100.0, 3.0);
        for t in 1..=1000u32 {
            star.advance();
            let t = t as f32;
            assert_eq!(star.y, 0.5 * t + 0.0005 * t * t);
        }
    }

    #[test]
    fn test_ship_clamps_at_left_edge() {
        let bounds = Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT);
        let mut ship = SpaceShip::new(Vec2::new(0.0, 400.0));
        ship.apply_move(Direction::Left, bounds);
        assert_eq!(ship.pos, Vec2::new(0.0, 400.0));
    }

    #[test]
    fn test_ship_clamps_at_far_edges() {
        let bounds = Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT);
        let mut ship = SpaceShip::new(Vec2::new(bounds.x - 1.0, bounds.y - 1.0));
        ship.apply_move(Direction::Right, bounds);
        ship.apply_move(Direction::Down, bounds);
        assert_eq!(ship.pos, bounds);
    }

    #[test]
    fn test_start_transition() {
        let mut state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::NotStarted);
        state.start();
        assert_eq!(state.phase, GamePhase::Running);

        // Terminal states stay put
        state.phase = GamePhase::Stopped;
        state.start();
        assert_eq!(state.phase, GamePhase::Stopped);
    }

    proptest! {
        #[test]
        fn prop_ship_stays_in_bounds(moves in proptest::collection::vec(0..4usize, 0..300)) {
            let bounds = Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT);
            let dirs = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
            let mut ship = SpaceShip::new(Vec2::new(bounds.x / 2.0, bounds.y * 2.0 / 3.0));
            for m in moves {
                ship.apply_move(dirs[m], bounds);
                prop_assert!(ship.pos.x >= 0.0 && ship.pos.x <= bounds.x);
                prop_assert!(ship.pos.y >= 0.0 && ship.pos.y <= bounds.y);
            }
        }

        #[test]
        fn prop_star_advance_monotonic(ticks in 0u32..2000) {
            let mut star = Star::spawn(225.0, 4.0);
            let mut prev = star.y;
            for _ in 0..ticks {
                star.advance();
                prop_assert!(star.y >= prev);
                prev = star.y;
            }
        }
    }
}
