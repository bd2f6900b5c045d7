//! SFML drawing layer
//!
//! Thin collaborator over the sim: clears the playfield, draws every active
//! star as a filled circle, the ship shape and the score overlay. The sim
//! only supplies positions, radii and the score.

use sfml::cpp::FBox;
use sfml::graphics::{
    CircleShape, Color, Font, RenderTarget, RenderWindow, Shape, Text, Transformable,
};

use crate::config::Config;
use crate::consts::SHIP_WIDTH;
use crate::sim::GameState;

/// Candidate score font paths, tried in order at startup
const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

fn load_font() -> Option<FBox<Font>> {
    for path in FONT_PATHS {
        if let Ok(font) = Font::from_file(path) {
            log::debug!("score font: {path}");
            return Some(font);
        }
    }
    None
}

/// Reusable shapes and the score text for one window
pub struct Renderer<'s> {
    background: Color,
    star_shape: CircleShape<'s>,
    ship_shape: CircleShape<'s>,
    score_text: Text<'s>,
}

impl Renderer<'static> {
    /// Build the drawing state. Returns `None` when no score font can be
    /// found; the caller treats that as a fatal startup error.
    pub fn new(config: &Config) -> Option<Self> {
        let mut font = Box::new(load_font()?);
        font.set_smooth(true);

        let mut score_text = Text::default();
        score_text.set_font(Box::leak(font));
        score_text.set_character_size(config.score_size);
        score_text.set_position(config.score_offset);
        score_text.set_fill_color(config.score_color);

        let mut star_shape = CircleShape::new(0.0, 30);
        star_shape.set_fill_color(config.star_color);

        // Upward triangle sized to the ship's collision rectangle
        let ship_radius = SHIP_WIDTH / 2.0;
        let mut ship_shape = CircleShape::new(ship_radius, 3);
        ship_shape.set_origin((ship_radius, ship_radius));
        ship_shape.set_fill_color(config.ship_color);

        Some(Self {
            background: config.background,
            star_shape,
            ship_shape,
            score_text,
        })
    }

    /// Draw one frame from the current game state
    pub fn draw(&mut self, window: &mut RenderWindow, state: &GameState) {
        window.clear(self.background);

        for star in &state.stars {
            self.star_shape.set_radius(star.radius);
            self.star_shape.set_origin((star.radius, star.radius));
            self.star_shape.set_position((star.x, star.y));
            window.draw(&self.star_shape);
        }

        self.ship_shape
            .set_position((state.ship.pos.x, state.ship.pos.y));
        window.draw(&self.ship_shape);

        self.score_text.set_string(&format!("Score: {}", state.score));
        window.draw(&self.score_text);

        window.display();
    }
}
