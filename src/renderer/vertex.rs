//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride of one vertex in an upload buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for game elements
pub mod colors {
    pub const PLAYER: [f32; 4] = [0.0, 1.0, 0.0, 1.0]; // Lime
    pub const BULLET: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const ENEMY: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BOSS: [f32; 4] = [0.5, 0.0, 0.5, 1.0];
    pub const BOMB: [f32; 4] = [1.0, 0.65, 0.0, 1.0];
    pub const ITEM_HEAL: [f32; 4] = [0.0, 0.5, 0.0, 1.0];
    pub const ITEM_BOMB: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const HEALTH_BAR_BACK: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const HEALTH_BAR_FILL: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
}
