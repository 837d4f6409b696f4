//! Idle/demo mode - scripted pilot
//!
//! Reads the state and produces the input a simple player would: keep
//! shooting, line up under the nearest target, side-step anything about to
//! ram the ship, grab items when it is safe and bomb crowds.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{Collider, GameState, TickInput};

/// Enemies closer than this (in both axes) count as an immediate threat
const DANGER_ZONE: Vec2 = Vec2::new(45.0, 90.0);
/// Bomb when this many enemies are inside the danger zone
const CROWD_SIZE: usize = 3;
/// Preferred cruising line above the bottom edge
const CRUISE_OFFSET: f32 = 60.0;

/// Pick this tick's input for the given state
pub fn autopilot_input(state: &GameState) -> TickInput {
    let mut input = TickInput {
        fire: true,
        ..Default::default()
    };

    let player = state.player.pos();
    let threats: Vec<Vec2> = state
        .enemies
        .iter()
        .map(|e| e.pos)
        .filter(|pos| {
            let d = *pos - player;
            d.x.abs() < DANGER_ZONE.x && d.y < 0.0 && -d.y < DANGER_ZONE.y
        })
        .collect();

    if threats.len() >= CROWD_SIZE && state.player.has_bomb && state.bomb.is_none() {
        input.bomb = true;
    }

    let target_x = if let Some(closest) = threats
        .iter()
        .min_by(|a, b| a.distance_squared(player).total_cmp(&b.distance_squared(player)))
    {
        // Side-step away from the closest threat, toward the roomier side
        let away = if closest.x > player.x || player.x >= ARENA_WIDTH - DANGER_ZONE.x {
            -1.0
        } else {
            1.0
        };
        player.x + away * DANGER_ZONE.x
    } else if let Some(boss) = &state.boss {
        boss.pos.x
    } else if let Some(item) = state.items.iter().min_by(|a, b| {
        a.pos
            .distance_squared(player)
            .total_cmp(&b.pos.distance_squared(player))
    }) {
        item.pos.x
    } else if let Some(enemy) = state.enemies.iter().max_by(|a, b| a.pos.y.total_cmp(&b.pos.y)) {
        // Lowest enemy is the next one to deal with
        enemy.pos.x
    } else {
        ARENA_WIDTH / 2.0
    };

    let step = state.tuning.player_speed;
    if target_x < player.x - step {
        input.left = true;
    } else if target_x > player.x + step {
        input.right = true;
    }

    let cruise_y = ARENA_HEIGHT - CRUISE_OFFSET;
    if player.y < cruise_y - step {
        input.down = true;
    } else if player.y > cruise_y + step {
        input.up = true;
    }

    input
}
