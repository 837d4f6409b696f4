//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Phases run in a
//! fixed order: player, bullets, enemies, bomb, items, boss. Removals are
//! marked during a pass and applied afterwards, never mid-iteration.

use glam::Vec2;
use rand::Rng;

use super::entity::ItemKind;
use super::shape::Collider;
use super::spawn::{spawn_enemy, spawn_item};
use super::state::{GameEvent, GamePhase, GameState, KillCause};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Fire held
    pub fire: bool,
    /// Bomb requested (level-triggered; the runner can edge-filter it)
    pub bomb: bool,
}

impl TickInput {
    /// Unit-step direction from held keys (y grows downward)
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        dir
    }
}

/// Advance the game state by one tick
///
/// All randomness comes through `rng` so callers control determinism.
/// A finished game is left untouched.
pub fn tick<R: Rng + ?Sized>(state: &mut GameState, input: &TickInput, rng: &mut R) {
    state.events.clear();

    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    update_player(state, input);
    update_bullets(state);

    if !state.boss_active()
        && let Some(enemy) = spawn_enemy(state.level, &state.tuning, rng)
    {
        state.enemies.push(enemy);
    }
    update_enemies(state);
    if state.is_game_over() {
        return;
    }

    update_bomb(state);

    if let Some(item) = spawn_item(&state.tuning, rng) {
        state.items.push(item);
    }
    update_items(state);

    update_boss(state, rng);
}

fn update_player(state: &mut GameState, input: &TickInput) {
    let actions = state
        .player
        .advance(input, &state.tuning, state.bomb.is_some());
    if let Some(bullet) = actions.bullet {
        state.bullets.push(bullet);
    }
    if let Some(bomb) = actions.bomb {
        log::debug!("Bomb placed at ({:.0}, {:.0})", bomb.pos.x, bomb.pos.y);
        state.events.push(GameEvent::BombPlaced { pos: bomb.pos });
        state.bomb = Some(bomb);
    }
}

fn update_bullets(state: &mut GameState) {
    for bullet in &mut state.bullets {
        bullet.advance();
    }
    state.bullets.retain(|b| !b.is_off_screen());
}

/// Move enemies, then resolve bullet and ram collisions
fn update_enemies(state: &mut GameState) {
    for enemy in &mut state.enemies {
        enemy.advance();
    }

    let mut spent_bullets = vec![false; state.bullets.len()];
    let mut destroyed = vec![false; state.enemies.len()];
    let mut rams = 0;

    for (ei, enemy) in state.enemies.iter().enumerate() {
        let hit = state
            .bullets
            .iter()
            .enumerate()
            .position(|(bi, b)| !spent_bullets[bi] && b.collides_with(enemy));

        let cause = if let Some(bi) = hit {
            spent_bullets[bi] = true;
            state.score += state.tuning.enemy_score;
            KillCause::Bullet
        } else if enemy.collides_with(&state.player) {
            rams += 1;
            KillCause::Ram
        } else {
            continue;
        };

        destroyed[ei] = true;
        state.events.push(GameEvent::EnemyDestroyed {
            kind: enemy.kind(),
            pos: enemy.pos,
            cause,
        });
    }

    remove_marked(&mut state.bullets, &spent_bullets);
    remove_marked(&mut state.enemies, &destroyed);
    state.enemies.retain(|e| !e.is_off_screen());

    for _ in 0..rams {
        if state.is_game_over() {
            break;
        }
        state.lose_life();
    }
}

/// Count down the bomb; while live it clears every enemy it touches
fn update_bomb(state: &mut GameState) {
    let Some(bomb) = state.bomb.as_mut() else {
        return;
    };

    bomb.advance();
    if bomb.is_expired() {
        state.bomb = None;
        state.events.push(GameEvent::BombExpired);
        return;
    }

    let score = state.tuning.enemy_score;
    state.enemies.retain(|enemy| {
        if !bomb.collides_with(enemy) {
            return true;
        }
        state.score += score;
        state.events.push(GameEvent::EnemyDestroyed {
            kind: enemy.kind(),
            pos: enemy.pos,
            cause: KillCause::Bomb,
        });
        false
    });
}

/// Move items and apply pickups
fn update_items(state: &mut GameState) {
    for item in &mut state.items {
        item.advance();
    }

    let mut collected = Vec::new();
    state.items.retain(|item| {
        if item.collides_with(&state.player) {
            collected.push(item.kind);
            false
        } else {
            !item.is_off_screen()
        }
    });

    for kind in collected {
        match kind {
            ItemKind::Heal => state.heal(),
            ItemKind::ExtraBomb => state.player.has_bomb = true,
        }
        state.events.push(GameEvent::ItemCollected { kind });
    }
}

/// Boss movement and hits, or the roll that summons the next boss
fn update_boss<R: Rng + ?Sized>(state: &mut GameState, rng: &mut R) {
    if !state.boss_active() {
        if state.enemies.is_empty() && rng.random::<f64>() < state.tuning.level_up_chance {
            state.level_up();
        }
        return;
    }
    let Some(boss) = state.boss.as_mut() else {
        return;
    };

    boss.advance();

    let mut defeated = false;
    state.bullets.retain(|bullet| {
        if defeated || !bullet.collides_with(&*boss) {
            return true;
        }
        defeated = boss.take_hit();
        state.events.push(GameEvent::BossDamaged {
            health: boss.health,
        });
        false
    });

    if defeated {
        let pos = boss.pos;
        state.boss = None;
        state.score += state.tuning.boss_score;
        log::info!("Boss defeated on level {}", state.level);
        state.events.push(GameEvent::BossDefeated { pos });
        state.level_up();
        return;
    }

    if boss.collides_with(&state.player) {
        log::info!("Player collided with the boss");
        state.boss = None;
        state.game_over();
    }
}

/// Drop every element whose mark is set
fn remove_marked<T>(items: &mut Vec<T>, marks: &[bool]) {
    let mut marks = marks.iter();
    items.retain(|_| !marks.next().copied().unwrap_or(false));
}
