//! Render-facing view of the game state
//!
//! A `Snapshot` is everything a presentation layer needs to draw one frame
//! and fill the HUD. It owns its data so it can cross threads or be dumped
//! as JSON.

use glam::Vec2;
use serde::Serialize;

use super::entity::{EnemyKind, ItemKind};
use super::shape::{Collider, Shape};
use super::state::{GamePhase, GameState};

/// A drawable body
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Body {
    pub pos: Vec2,
    pub shape: Shape,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnemyView {
    pub body: Body,
    pub kind: EnemyKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BossView {
    pub body: Body,
    pub health: u32,
    pub max_health: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemView {
    pub body: Body,
    pub kind: ItemKind,
}

/// One frame of state for drawing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub level: u32,
    pub score: u64,
    pub lives: u8,
    pub game_over: bool,
    /// Player holds a bomb charge ("Bomb: Available")
    pub bomb_ready: bool,
    pub player: Body,
    pub bullets: Vec<Body>,
    pub enemies: Vec<EnemyView>,
    pub boss: Option<BossView>,
    pub bomb: Option<Body>,
    pub items: Vec<ItemView>,
    /// Health bar fill in [0, 1] while a boss is up
    pub boss_health_fraction: Option<f32>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        fn body<C: Collider>(c: &C) -> Body {
            Body {
                pos: c.pos(),
                shape: c.shape(),
            }
        }

        let boss = state.boss.as_ref().map(|boss| BossView {
            body: body(boss),
            health: boss.health,
            max_health: boss.max_health,
        });

        Self {
            tick: state.time_ticks,
            phase: state.phase,
            level: state.level,
            score: state.score,
            lives: state.lives,
            game_over: state.is_game_over(),
            bomb_ready: state.player.has_bomb,
            player: body(&state.player),
            bullets: state.bullets.iter().map(body).collect(),
            enemies: state
                .enemies
                .iter()
                .map(|e| EnemyView {
                    body: body(e),
                    kind: e.kind(),
                })
                .collect(),
            boss_health_fraction: state.boss.as_ref().map(|b| b.health_fraction()),
            boss,
            bomb: state.bomb.as_ref().map(body),
            items: state
                .items
                .iter()
                .map(|i| ItemView {
                    body: body(i),
                    kind: i.kind,
                })
                .collect(),
        }
    }

    /// One-line HUD summary, also used as the terminal screen text
    pub fn hud_line(&self) -> String {
        if self.game_over {
            return format!("GAME OVER - score {} (level {})", self.score, self.level);
        }
        let mut line = format!(
            "score {} | lives {} | level {}",
            self.score, self.lives, self.level
        );
        if self.bomb_ready {
            line.push_str(" | bomb ready");
        }
        if let Some(boss) = &self.boss {
            line.push_str(&format!(" | boss {}/{}", boss.health, boss.max_health));
        }
        line
    }
}
