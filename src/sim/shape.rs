//! Collision shapes and overlap tests
//!
//! Every entity carries exactly one shape. Positions are shape centres, so a
//! box spans `pos ± size / 2`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Collision shape of an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle { radius: f32 },
    Box { width: f32, height: f32 },
}

impl Shape {
    /// Axis-aligned square
    pub fn square(size: f32) -> Self {
        Shape::Box {
            width: size,
            height: size,
        }
    }

    /// Half extents of the shape's bounding box
    pub fn half_extents(&self) -> Vec2 {
        match *self {
            Shape::Circle { radius } => Vec2::splat(radius),
            Shape::Box { width, height } => Vec2::new(width, height) / 2.0,
        }
    }
}

/// Circle/circle: centre distance strictly less than the radius sum
#[inline]
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    a.distance_squared(b) < (ra + rb) * (ra + rb)
}

/// Box/box: strict axis-aligned overlap on both axes
#[inline]
pub fn boxes_overlap(a: Vec2, half_a: Vec2, b: Vec2, half_b: Vec2) -> bool {
    let d = (a - b).abs();
    d.x < half_a.x + half_b.x && d.y < half_a.y + half_b.y
}

/// Circle/box: distance from the circle centre to the closest point on the box
#[inline]
pub fn circle_box_overlap(center: Vec2, radius: f32, box_pos: Vec2, half: Vec2) -> bool {
    let closest = center.clamp(box_pos - half, box_pos + half);
    center.distance_squared(closest) < radius * radius
}

/// Overlap test dispatching on both shapes
pub fn overlaps(a_pos: Vec2, a: Shape, b_pos: Vec2, b: Shape) -> bool {
    match (a, b) {
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            circles_overlap(a_pos, ra, b_pos, rb)
        }
        (Shape::Box { .. }, Shape::Box { .. }) => {
            boxes_overlap(a_pos, a.half_extents(), b_pos, b.half_extents())
        }
        (Shape::Circle { radius }, Shape::Box { .. }) => {
            circle_box_overlap(a_pos, radius, b_pos, b.half_extents())
        }
        (Shape::Box { .. }, Shape::Circle { radius }) => {
            circle_box_overlap(b_pos, radius, a_pos, a.half_extents())
        }
    }
}

/// Anything with a position and a collision shape
pub trait Collider {
    fn pos(&self) -> Vec2;
    fn shape(&self) -> Shape;

    fn collides_with<C: Collider + ?Sized>(&self, other: &C) -> bool {
        overlaps(self.pos(), self.shape(), other.pos(), other.shape())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_circle() {
        let a = Shape::Circle { radius: 5.0 };
        let b = Shape::Circle { radius: 10.0 };
        assert!(overlaps(Vec2::ZERO, a, Vec2::new(14.0, 0.0), b));
        // Touching is not overlapping
        assert!(!overlaps(Vec2::ZERO, a, Vec2::new(15.0, 0.0), b));
    }

    #[test]
    fn test_box_box() {
        let a = Shape::square(30.0);
        let b = Shape::square(20.0);
        assert!(overlaps(Vec2::ZERO, a, Vec2::new(24.0, 24.0), b));
        assert!(!overlaps(Vec2::ZERO, a, Vec2::new(25.0, 0.0), b));
        assert!(!overlaps(Vec2::ZERO, a, Vec2::new(0.0, -26.0), b));
    }

    #[test]
    fn test_circle_box_corner() {
        let circle = Shape::Circle { radius: 5.0 };
        let square = Shape::square(20.0);
        // Diagonal from the corner at (10, 10): distance ~4.24
        assert!(overlaps(Vec2::new(13.0, 13.0), circle, Vec2::ZERO, square));
        // Distance ~5.66 from the corner
        assert!(!overlaps(Vec2::new(14.0, 14.0), circle, Vec2::ZERO, square));
        // Order of arguments does not matter
        assert!(overlaps(Vec2::ZERO, square, Vec2::new(13.0, 13.0), circle));
    }

    #[test]
    fn test_circle_inside_box() {
        let circle = Shape::Circle { radius: 5.0 };
        let boss = Shape::square(60.0);
        assert!(overlaps(Vec2::new(1.0, -2.0), circle, Vec2::ZERO, boss));
    }

    #[test]
    fn test_half_extents() {
        assert_eq!(Shape::Circle { radius: 3.0 }.half_extents(), Vec2::splat(3.0));
        assert_eq!(
            Shape::Box {
                width: 10.0,
                height: 4.0
            }
            .half_extents(),
            Vec2::new(5.0, 2.0)
        );
    }
}
