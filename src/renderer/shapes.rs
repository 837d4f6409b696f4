//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Shape;

/// Generate vertices for an axis-aligned rectangle given its top-left corner
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let max = min + size;
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a collision shape centred on `pos`
pub fn body(pos: Vec2, shape: Shape, color: [f32; 4]) -> Vec<Vertex> {
    match shape {
        Shape::Circle { radius } => circle(pos, radius, color, segments_for(radius)),
        Shape::Box { width, height } => {
            let size = Vec2::new(width, height);
            rect(pos - size / 2.0, size, color)
        }
    }
}

/// Horizontal bar filled left to right by `fraction`
pub fn bar(
    min: Vec2,
    size: Vec2,
    fraction: f32,
    back: [f32; 4],
    fill: [f32; 4],
) -> Vec<Vertex> {
    let mut vertices = rect(min, size, back);
    let filled = size.x * fraction.clamp(0.0, 1.0);
    if filled > 0.0 {
        vertices.extend(rect(min, Vec2::new(filled, size.y), fill));
    }
    vertices
}

/// More segments for bigger circles
fn segments_for(radius: f32) -> u32 {
    ((radius * 0.8) as u32).clamp(8, 48)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_corners() {
        let v = rect(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), [1.0; 4]);
        assert_eq!(v.len(), 6);
        assert_eq!(v[0].position, [1.0, 2.0]);
        assert_eq!(v[5].position, [4.0, 6.0]);
    }

    #[test]
    fn test_circle_vertex_count() {
        assert_eq!(circle(Vec2::ZERO, 5.0, [1.0; 4], 12).len(), 36);
    }

    #[test]
    fn test_body_box_is_centred() {
        let v = body(Vec2::new(10.0, 10.0), Shape::square(4.0), [1.0; 4]);
        assert_eq!(v[0].position, [8.0, 8.0]);
        assert_eq!(v[5].position, [12.0, 12.0]);
    }

    #[test]
    fn test_empty_bar_has_no_fill() {
        let v = bar(Vec2::ZERO, Vec2::new(140.0, 10.0), 0.0, [0.0; 4], [1.0; 4]);
        assert_eq!(v.len(), 6);
        let v = bar(Vec2::ZERO, Vec2::new(140.0, 10.0), 0.5, [0.0; 4], [1.0; 4]);
        assert_eq!(v.len(), 12);
        assert_eq!(v[11].position, [70.0, 10.0]);
    }
}
