//! Game state and the wave/boss controller
//!
//! Everything a session needs lives in `GameState`; rebuilding it from the
//! same seed and input sequence reproduces the run exactly.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Bomb, Boss, Bullet, Enemy, EnemyKind, Item, ItemKind, Player};
use super::error::InvariantViolation;
use super::shape::Collider;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Regular wave: enemies spawn, no boss
    Normal,
    /// A boss is on the field; enemy spawning is suspended
    BossFight,
    /// Run ended (terminal)
    GameOver,
}

/// What destroyed an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KillCause {
    Bullet,
    Bomb,
    Ram,
}

/// Things that happened during the last tick, for sound/HUD/logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemyDestroyed { kind: EnemyKind, pos: Vec2, cause: KillCause },
    PlayerHit { lives: u8 },
    BombPlaced { pos: Vec2 },
    BombExpired,
    ItemCollected { kind: ItemKind },
    BossSpawned { level: u32 },
    BossDamaged { health: u32 },
    BossDefeated { pos: Vec2 },
    LevelUp { level: u32 },
    GameOver { score: u64 },
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Balance values for this run
    pub tuning: Tuning,
    /// Current level (starts at 1, only increases)
    pub level: u32,
    pub score: u64,
    pub lives: u8,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    /// At most one bomb exists at a time
    pub bomb: Option<Bomb>,
    pub items: Vec<Item>,
    pub boss: Option<Boss>,
    /// Events from the last tick (not gameplay-affecting)
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed and default balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            level: 1,
            score: 0,
            lives: tuning.max_lives,
            time_ticks: 0,
            phase: GamePhase::Normal,
            player: Player::default(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            bomb: None,
            items: Vec::new(),
            boss: None,
            events: Vec::new(),
            tuning,
        }
    }

    /// Start a fresh session with the same seed and balance
    pub fn reset(&mut self) {
        *self = Self::with_tuning(self.seed, self.tuning.clone());
    }

    pub fn rng_state(&self) -> RngState {
        RngState::new(self.seed)
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn boss_active(&self) -> bool {
        self.boss.is_some()
    }

    /// Advance to the next level: spawn a full-health boss and clear the field
    pub fn level_up(&mut self) {
        self.level += 1;
        self.boss = Some(Boss::new(&self.tuning));
        self.enemies.clear();
        self.phase = GamePhase::BossFight;
        log::info!("Level {}: boss incoming (score {})", self.level, self.score);
        self.events.push(GameEvent::LevelUp { level: self.level });
        self.events.push(GameEvent::BossSpawned { level: self.level });
    }

    /// Take one hit; the run ends when lives run out
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.events.push(GameEvent::PlayerHit { lives: self.lives });
        if self.lives == 0 {
            self.game_over();
        }
    }

    /// Restore one life, capped at the maximum
    pub fn heal(&mut self) {
        self.lives = self.lives.saturating_add(1).min(self.tuning.max_lives);
    }

    /// Enter the terminal phase (idempotent)
    pub fn game_over(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.lives = 0;
        self.phase = GamePhase::GameOver;
        log::info!(
            "Game over at level {} with score {} after {} ticks",
            self.level,
            self.score,
            self.time_ticks
        );
        self.events.push(GameEvent::GameOver { score: self.score });
    }

    /// Check the state invariants
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let max = self.tuning.max_lives;
        if self.lives > max {
            return Err(InvariantViolation::LivesOutOfRange {
                lives: self.lives,
                max,
            });
        }

        if self.lives == 0 && !self.is_game_over() {
            return Err(InvariantViolation::LivesExhaustedWhilePlaying);
        }

        if self.level == 0 {
            return Err(InvariantViolation::LevelZero);
        }

        let boss_fight = self.phase == GamePhase::BossFight;
        if self.boss_active() != boss_fight {
            return Err(InvariantViolation::BossPhaseMismatch {
                boss_present: self.boss_active(),
                boss_fight,
            });
        }

        if let Some(boss) = &self.boss
            && (boss.health == 0 || boss.health > boss.max_health)
        {
            return Err(InvariantViolation::BossHealthOutOfRange {
                health: boss.health,
                max: boss.max_health,
            });
        }

        // An expired bomb is dropped on the tick it runs out
        if let Some(bomb) = &self.bomb
            && (bomb.remaining == 0 || bomb.remaining > self.tuning.bomb_duration)
        {
            return Err(InvariantViolation::BombTimerOutOfRange {
                remaining: bomb.remaining,
                duration: self.tuning.bomb_duration,
            });
        }

        let half = self.player.shape().half_extents();
        let min = half;
        let max = Vec2::new(ARENA_WIDTH, ARENA_HEIGHT) - half;
        let pos = self.player.pos;
        if pos.x < min.x || pos.y < min.y || pos.x > max.x || pos.y > max.y {
            return Err(InvariantViolation::PlayerOutOfBounds);
        }

        Ok(())
    }
}
