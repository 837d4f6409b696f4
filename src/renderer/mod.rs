//! Presentation adapter
//!
//! Turns a `Snapshot` into one triangle list in arena coordinates
//! (480×640, y down). Any backend can upload it as-is via `bytemuck`.

pub mod shapes;
pub mod vertex;

use glam::Vec2;

pub use vertex::{Vertex, colors};

use crate::consts::ARENA_WIDTH;
use crate::sim::{ItemKind, Snapshot};

/// Boss health bar placement (top-right corner)
const HEALTH_BAR_SIZE: Vec2 = Vec2::new(140.0, 10.0);
const HEALTH_BAR_MARGIN: f32 = 10.0;

/// Build the draw list for one frame, back to front
pub fn draw_list(snapshot: &Snapshot) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    // The terminal screen only shows the summary text
    if snapshot.game_over {
        return vertices;
    }

    if let Some(bomb) = &snapshot.bomb {
        vertices.extend(shapes::body(bomb.pos, bomb.shape, colors::BOMB));
    }
    for item in &snapshot.items {
        let color = match item.kind {
            ItemKind::Heal => colors::ITEM_HEAL,
            ItemKind::ExtraBomb => colors::ITEM_BOMB,
        };
        vertices.extend(shapes::body(item.body.pos, item.body.shape, color));
    }
    for enemy in &snapshot.enemies {
        vertices.extend(shapes::body(enemy.body.pos, enemy.body.shape, colors::ENEMY));
    }
    if let Some(boss) = &snapshot.boss {
        vertices.extend(shapes::body(boss.body.pos, boss.body.shape, colors::BOSS));
    }
    for bullet in &snapshot.bullets {
        vertices.extend(shapes::body(bullet.pos, bullet.shape, colors::BULLET));
    }
    vertices.extend(shapes::body(
        snapshot.player.pos,
        snapshot.player.shape,
        colors::PLAYER,
    ));

    if let Some(fraction) = snapshot.boss_health_fraction {
        let min = Vec2::new(
            ARENA_WIDTH - HEALTH_BAR_SIZE.x - HEALTH_BAR_MARGIN,
            HEALTH_BAR_MARGIN,
        );
        vertices.extend(shapes::bar(
            min,
            HEALTH_BAR_SIZE,
            fraction,
            colors::HEALTH_BAR_BACK,
            colors::HEALTH_BAR_FILL,
        ));
    }

    vertices
}

/// Raw bytes of a draw list, ready for a vertex buffer upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;

    #[test]
    fn test_player_drawn_last() {
        let state = GameState::new(5);
        let list = draw_list(&Snapshot::capture(&state));
        assert_eq!(list.len(), 6);
        assert_eq!(list[0].color, colors::PLAYER);
        assert_eq!(as_bytes(&list).len(), 6 * Vertex::STRIDE);
    }

    #[test]
    fn test_boss_adds_health_bar() {
        let mut state = GameState::new(5);
        state.level_up();
        let list = draw_list(&Snapshot::capture(&state));
        // boss + player + full bar (back and fill)
        assert_eq!(list.len(), 6 * 4);
        assert_eq!(list.last().unwrap().color, colors::HEALTH_BAR_FILL);
    }

    #[test]
    fn test_game_over_draws_nothing() {
        let mut state = GameState::new(5);
        state.game_over();
        assert!(draw_list(&Snapshot::capture(&state)).is_empty());
    }
}
