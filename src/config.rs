//! Immutable runtime configuration
//!
//! The module-level constants collapse into one structure built once at
//! startup and passed by reference into the loop and renderer. Nothing here
//! is user-configurable at runtime.

use sfml::graphics::Color;

use crate::consts::*;

/// Fixed game configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Window title
    pub title: &'static str,
    /// Playfield width in pixels
    pub width: f32,
    /// Playfield height in pixels
    pub height: f32,
    /// Ticks per second
    pub tick_rate: u32,
    /// Playfield clear color
    pub background: Color,
    /// Star fill color
    pub star_color: Color,
    /// Ship fill color
    pub ship_color: Color,
    /// Score overlay text color
    pub score_color: Color,
    /// Score overlay character size in pixels
    pub score_size: u32,
    /// Score overlay offset from the top-left corner
    pub score_offset: (f32, f32),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Space Travel",
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            tick_rate: TICK_RATE,
            background: Color::rgb(10, 25, 50),
            star_color: Color::WHITE,
            ship_color: Color::rgb(200, 200, 210),
            score_color: Color::rgb(10, 200, 130),
            score_size: 24,
            score_offset: (8.0, 8.0),
        }
    }
}
