//! Collision test between the ball and a paddle
//!
//! The ball is a circle, paddles are axis-aligned boxes. The test is the
//! closest-point formulation: clamp the circle center into the box and
//! compare the remaining distance against the radius.

use glam::Vec2;

/// Whether a circle overlaps an axis-aligned rect given by center and
/// half extents. Touching exactly counts as a miss.
pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect_center: Vec2, half: Vec2) -> bool {
    let offset = (center - rect_center).clamp(-half, half);
    let closest = rect_center + offset;
    center.distance_squared(closest) < radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_center_inside() {
        let half = Vec2::new(10.0, 50.0);
        assert!(circle_overlaps_rect(
            Vec2::new(100.0, 300.0),
            10.0,
            Vec2::new(100.0, 300.0),
            half
        ));
    }

    #[test]
    fn test_overlap_on_face() {
        let half = Vec2::new(10.0, 50.0);
        // Ball center 15 units right of the rect's right face (at x=110),
        // radius 10 - overlap of 5
        assert!(circle_overlaps_rect(
            Vec2::new(125.0, 300.0),
            10.0,
            Vec2::new(100.0, 300.0),
            half
        ));
        // Same spot with a smaller ball - miss
        assert!(!circle_overlaps_rect(
            Vec2::new(125.0, 300.0),
            8.0,
            Vec2::new(100.0, 300.0),
            half
        ));
    }

    #[test]
    fn test_touching_is_a_miss() {
        let half = Vec2::new(10.0, 50.0);
        // Leading edge exactly on the face
        assert!(!circle_overlaps_rect(
            Vec2::new(120.0, 300.0),
            10.0,
            Vec2::new(100.0, 300.0),
            half
        ));
    }

    #[test]
    fn test_corner_distance_matters() {
        let half = Vec2::new(10.0, 50.0);
        // Diagonal from the top-right corner (110, 250): offset (7, -7) is
        // ~9.9 away, inside a radius of 10
        assert!(circle_overlaps_rect(
            Vec2::new(117.0, 243.0),
            10.0,
            Vec2::new(100.0, 300.0),
            half
        ));
        // (8, -8) is ~11.3 away - a per-axis test would claim a hit here
        assert!(!circle_overlaps_rect(
            Vec2::new(118.0, 242.0),
            10.0,
            Vec2::new(100.0, 300.0),
            half
        ));
    }
}
