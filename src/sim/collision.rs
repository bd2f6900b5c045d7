//! Bounding-shape intersection tests
//!
//! The ship collides as an axis-aligned rectangle, stars as circles. Any
//! overlap counts as a hit, not just center containment.

use glam::Vec2;

use super::state::{SpaceShip, Star};

/// Check whether a circle overlaps an axis-aligned rectangle given by its
/// center and half-extents.
///
/// Closest-point test: clamp the circle center into the rectangle and
/// compare the remaining distance against the radius.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect_center: Vec2, half: Vec2) -> bool {
    let closest = center.clamp(rect_center - half, rect_center + half);
    (center - closest).length_squared() <= radius * radius
}

/// Check whether a star's bounding circle overlaps the ship's bounding
/// rectangle
pub fn ship_star_collision(ship: &SpaceShip, star: &Star) -> bool {
    circle_rect_overlap(star.center(), star.radius, ship.pos, ship.half_extents())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF: Vec2 = Vec2::new(24.0, 24.0);

    #[test]
    fn test_circle_inside_rect() {
        let rect = Vec2::new(225.0, 533.0);
        assert!(circle_rect_overlap(rect, 3.0, rect, HALF));
    }

    #[test]
    fn test_circle_overlaps_edge() {
        let rect = Vec2::new(225.0, 533.0);
        // Center 2 units beyond the right edge, radius 3
        assert!(circle_rect_overlap(Vec2::new(251.0, 533.0), 3.0, rect, HALF));
    }

    #[test]
    fn test_circle_misses_edge() {
        let rect = Vec2::new(225.0, 533.0);
        // Center 4 units beyond the right edge, radius 3
        assert!(!circle_rect_overlap(Vec2::new(253.0, 533.0), 3.0, rect, HALF));
    }

    #[test]
    fn test_circle_at_corner() {
        let rect = Vec2::new(100.0, 100.0);
        // Corner at (124, 124); diagonal distance decides, not the per-axis gap
        assert!(circle_rect_overlap(Vec2::new(126.0, 126.0), 3.0, rect, HALF));
        assert!(!circle_rect_overlap(Vec2::new(127.0, 127.0), 3.0, rect, HALF));
    }

    #[test]
    fn test_ship_star_collision() {
        let ship = SpaceShip::new(Vec2::new(225.0, 533.0));

        let mut near = Star::spawn(225.0, 4.0);
        near.y = 520.0;
        assert!(ship_star_collision(&ship, &near));

        let mut far = Star::spawn(50.0, 4.0);
        far.y = 100.0;
        assert!(!ship_star_collision(&ship, &far));
    }
}
