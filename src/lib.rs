//! Star Barrage - a single-screen arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, game state)
//! - `renderer`: Snapshot to triangle-list conversion for any GPU/canvas backend
//! - `tuning`: Data-driven game balance
//! - `settings`: Runner configuration
//! - `autopilot`: Scripted input for demo and headless runs

pub mod autopilot;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{BombTrigger, Settings, SettingsError};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (logical units, y grows downward)
    pub const ARENA_WIDTH: f32 = 480.0;
    pub const ARENA_HEIGHT: f32 = 640.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Spawn offset from the bottom edge
    pub const PLAYER_START_OFFSET: f32 = 50.0;
    /// Ticks between shots while fire is held
    pub const FIRE_INTERVAL: u32 = 10;

    pub const BULLET_RADIUS: f32 = 5.0;
    pub const BULLET_SPEED: f32 = 10.0;

    pub const ENEMY_SIZE: f32 = 20.0;
    pub const ENEMY_SPEED: f32 = 2.0;
    /// Spawn line above the top edge
    pub const ENEMY_SPAWN_Y: f32 = -20.0;
    pub const ZIGZAG_AMPLITUDE: f32 = 30.0;
    pub const ZIGZAG_FREQUENCY: f32 = 0.05;
    pub const DIAGONAL_DAMPING: f32 = 0.7;

    pub const BOSS_SIZE: f32 = 60.0;
    pub const BOSS_SPEED: f32 = 1.0;
    pub const BOSS_MAX_HEALTH: u32 = 50;
    pub const BOSS_SPAWN_Y: f32 = -100.0;
    /// Boss stops descending once it reaches this line
    pub const BOSS_HOLD_Y: f32 = 100.0;

    pub const BOMB_RADIUS: f32 = 30.0;
    /// Bomb lifetime in ticks
    pub const BOMB_DURATION: u32 = 60;

    pub const ITEM_RADIUS: f32 = 10.0;
    pub const ITEM_SPAWN_Y: f32 = -10.0;

    /// Spawn/transition probabilities per tick
    pub const ENEMY_SPAWN_RATE_PER_LEVEL: f64 = 0.02;
    pub const ITEM_SPAWN_RATE: f64 = 0.01;
    pub const LEVEL_UP_CHANCE: f64 = 0.01;

    pub const ENEMY_SCORE: u64 = 10;
    pub const BOSS_SCORE: u64 = 100;

    pub const MAX_LIVES: u8 = 3;
}

/// Clamp a point so a body of the given half extents stays inside the arena
#[inline]
pub fn clamp_to_arena(pos: Vec2, half_extents: Vec2) -> Vec2 {
    let max = Vec2::new(consts::ARENA_WIDTH, consts::ARENA_HEIGHT) - half_extents;
    pos.clamp(half_extents, max)
}
