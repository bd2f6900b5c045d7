//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed tick only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{circle_rect_overlap, ship_star_collision};
pub use state::{Direction, GamePhase, GameState, SpaceShip, Star};
pub use tick::{TickInput, tick};
