//! Entity models and their per-tick update rules
//!
//! Each `advance` only touches the entity itself. Cross-entity effects
//! (collisions, scoring, spawning) belong to the tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shape::{Collider, Shape};
use super::tick::TickInput;
use crate::clamp_to_arena;
use crate::consts::*;
use crate::tuning::Tuning;

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub size: f32,
    /// Ticks until the next shot is allowed (0 = ready)
    pub fire_cooldown: u32,
    /// Holds a bomb charge
    pub has_bomb: bool,
}

/// What the player produced this tick
#[derive(Debug, Default)]
pub struct PlayerActions {
    pub bullet: Option<Bullet>,
    pub bomb: Option<Bomb>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT - PLAYER_START_OFFSET),
            size: PLAYER_SIZE,
            fire_cooldown: 0,
            has_bomb: true,
        }
    }
}

impl Player {
    /// Apply one tick of input: move, fire, place bomb
    pub fn advance(&mut self, input: &TickInput, tuning: &Tuning, bomb_active: bool) -> PlayerActions {
        let mut actions = PlayerActions::default();

        let dir = input.direction();
        if dir != Vec2::ZERO {
            let half = self.shape().half_extents();
            self.pos = clamp_to_arena(self.pos + dir * tuning.player_speed, half);
        }

        if input.fire && self.fire_cooldown == 0 {
            let muzzle = self.pos - Vec2::new(0.0, self.size / 2.0);
            actions.bullet = Some(Bullet::new(muzzle, tuning.bullet_speed));
            self.fire_cooldown = tuning.fire_interval;
        }
        self.fire_cooldown = self.fire_cooldown.saturating_sub(1);

        if input.bomb && self.has_bomb && !bomb_active {
            actions.bomb = Some(Bomb::new(self.pos, tuning.bomb_radius, tuning.bomb_duration));
            self.has_bomb = false;
        }

        actions
    }
}

impl Collider for Player {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn shape(&self) -> Shape {
        Shape::square(self.size)
    }
}

/// A player projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub radius: f32,
    /// Upward speed per tick
    pub speed: f32,
}

impl Bullet {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            radius: BULLET_RADIUS,
            speed,
        }
    }

    pub fn advance(&mut self) {
        self.pos.y -= self.speed;
    }

    /// Left through the top edge
    pub fn is_off_screen(&self) -> bool {
        self.pos.y < 0.0
    }
}

impl Collider for Bullet {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn shape(&self) -> Shape {
        Shape::Circle {
            radius: self.radius,
        }
    }
}

/// Enemy movement pattern, chosen uniformly at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Straight,
    Zigzag,
    Diagonal,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Straight, EnemyKind::Zigzag, EnemyKind::Diagonal];
}

/// Motion parameters fixed at spawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EnemyMotion {
    /// Constant downward speed
    Straight,
    /// Sine sway around the spawn column, keyed on depth
    Zigzag {
        origin_x: f32,
        amplitude: f32,
        frequency: f32,
    },
    /// Fixed velocity from the spawn angle
    Diagonal { velocity: Vec2 },
}

/// A regular enemy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub motion: EnemyMotion,
    pub health: u8,
}

impl Enemy {
    /// `angle` only matters for diagonal movers
    pub fn new(pos: Vec2, kind: EnemyKind, angle: f32, tuning: &Tuning) -> Self {
        let speed = tuning.enemy_speed;
        let motion = match kind {
            EnemyKind::Straight => EnemyMotion::Straight,
            EnemyKind::Zigzag => EnemyMotion::Zigzag {
                origin_x: pos.x,
                amplitude: tuning.zigzag_amplitude,
                frequency: tuning.zigzag_frequency,
            },
            EnemyKind::Diagonal => EnemyMotion::Diagonal {
                velocity: Vec2::from_angle(angle) * speed * tuning.diagonal_damping,
            },
        };
        Self {
            pos,
            size: ENEMY_SIZE,
            speed,
            motion,
            health: 1,
        }
    }

    pub fn kind(&self) -> EnemyKind {
        match self.motion {
            EnemyMotion::Straight => EnemyKind::Straight,
            EnemyMotion::Zigzag { .. } => EnemyKind::Zigzag,
            EnemyMotion::Diagonal { .. } => EnemyKind::Diagonal,
        }
    }

    pub fn advance(&mut self) {
        match self.motion {
            EnemyMotion::Straight => {
                self.pos.y += self.speed;
            }
            EnemyMotion::Zigzag {
                origin_x,
                amplitude,
                frequency,
            } => {
                self.pos.x = origin_x + (self.pos.y * frequency).sin() * amplitude;
                self.pos.y += self.speed;
            }
            EnemyMotion::Diagonal { velocity } => {
                self.pos += velocity;
            }
        }
    }

    /// Past the bottom edge; diagonal movers also leave through the sides or top
    pub fn is_off_screen(&self) -> bool {
        if self.pos.y > ARENA_HEIGHT {
            return true;
        }
        match self.motion {
            EnemyMotion::Diagonal { .. } => {
                self.pos.x < -self.size
                    || self.pos.x > ARENA_WIDTH + self.size
                    || self.pos.y < ENEMY_SPAWN_Y - self.size
            }
            _ => false,
        }
    }
}

impl Collider for Enemy {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn shape(&self) -> Shape {
        Shape::square(self.size)
    }
}

/// The level boss
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub pos: Vec2,
    pub size: f32,
    pub speed: f32,
    pub hold_y: f32,
    pub health: u32,
    pub max_health: u32,
}

impl Boss {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(ARENA_WIDTH / 2.0, BOSS_SPAWN_Y),
            size: BOSS_SIZE,
            speed: tuning.boss_speed,
            hold_y: tuning.boss_hold_y,
            health: tuning.boss_max_health,
            max_health: tuning.boss_max_health,
        }
    }

    /// Descend to the hold line, then stay there
    pub fn advance(&mut self) {
        if self.pos.y < self.hold_y {
            self.pos.y = (self.pos.y + self.speed).min(self.hold_y);
        }
    }

    /// Take one bullet; returns true when this hit finished the boss
    pub fn take_hit(&mut self) -> bool {
        self.health = self.health.saturating_sub(1);
        self.health == 0
    }

    /// Remaining health in [0, 1] for the health bar
    pub fn health_fraction(&self) -> f32 {
        if self.max_health == 0 {
            return 0.0;
        }
        self.health as f32 / self.max_health as f32
    }
}

impl Collider for Boss {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn shape(&self) -> Shape {
        Shape::square(self.size)
    }
}

/// A stationary blast that clears overlapping enemies while it lasts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bomb {
    pub pos: Vec2,
    pub radius: f32,
    /// Ticks left before the blast disappears
    pub remaining: u32,
}

impl Bomb {
    pub fn new(pos: Vec2, radius: f32, duration: u32) -> Self {
        Self {
            pos,
            radius,
            remaining: duration,
        }
    }

    pub fn advance(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }
}

impl Collider for Bomb {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn shape(&self) -> Shape {
        Shape::Circle {
            radius: self.radius,
        }
    }
}

/// Pickup types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    /// +1 life, capped
    Heal,
    /// Restores the bomb charge
    ExtraBomb,
}

/// A falling pickup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub pos: Vec2,
    pub radius: f32,
    pub kind: ItemKind,
    pub speed: f32,
}

impl Item {
    pub fn new(pos: Vec2, kind: ItemKind, speed: f32) -> Self {
        Self {
            pos,
            radius: ITEM_RADIUS,
            kind,
            speed,
        }
    }

    pub fn advance(&mut self) {
        self.pos.y += self.speed;
    }

    pub fn is_off_screen(&self) -> bool {
        self.pos.y > ARENA_HEIGHT
    }
}

impl Collider for Item {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn shape(&self) -> Shape {
        Shape::Circle {
            radius: self.radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(f: impl FnOnce(&mut TickInput)) -> TickInput {
        let mut input = TickInput::default();
        f(&mut input);
        input
    }

    #[test]
    fn test_player_moves_and_clamps() {
        let tuning = Tuning::default();
        let mut player = Player::default();
        player.advance(&held(|i| i.left = true), &tuning, false);
        assert_eq!(player.pos.x, ARENA_WIDTH / 2.0 - PLAYER_SPEED);

        player.pos = Vec2::new(17.0, 17.0);
        player.advance(&held(|i| { i.left = true; i.up = true; }), &tuning, false);
        assert_eq!(player.pos, Vec2::splat(PLAYER_SIZE / 2.0));
    }

    #[test]
    fn test_fire_cooldown_cycle() {
        let tuning = Tuning::default();
        let mut player = Player::default();
        let fire = held(|i| i.fire = true);

        let mut shots = Vec::new();
        for t in 0..25 {
            if player.advance(&fire, &tuning, false).bullet.is_some() {
                shots.push(t);
            }
        }
        assert_eq!(shots, vec![0, 10, 20]);
    }

    #[test]
    fn test_bullet_spawns_at_nose() {
        let tuning = Tuning::default();
        let mut player = Player::default();
        let bullet = player
            .advance(&held(|i| i.fire = true), &tuning, false)
            .bullet
            .unwrap();
        assert_eq!(bullet.pos, player.pos - Vec2::new(0.0, PLAYER_SIZE / 2.0));
    }

    #[test]
    fn test_bomb_requires_charge_and_no_active_bomb() {
        let tuning = Tuning::default();
        let mut player = Player::default();
        let bomb = held(|i| i.bomb = true);

        assert!(player.advance(&bomb, &tuning, true).bomb.is_none());
        assert!(player.has_bomb);

        assert!(player.advance(&bomb, &tuning, false).bomb.is_some());
        assert!(!player.has_bomb);

        assert!(player.advance(&bomb, &tuning, false).bomb.is_none());
    }

    #[test]
    fn test_enemy_motion() {
        let tuning = Tuning::default();

        let mut straight = Enemy::new(Vec2::new(100.0, 0.0), EnemyKind::Straight, 0.0, &tuning);
        straight.advance();
        assert_eq!(straight.pos, Vec2::new(100.0, ENEMY_SPEED));

        let mut zigzag = Enemy::new(Vec2::new(100.0, 10.0), EnemyKind::Zigzag, 0.0, &tuning);
        zigzag.advance();
        let expected_x = 100.0 + (10.0 * ZIGZAG_FREQUENCY).sin() * ZIGZAG_AMPLITUDE;
        assert!((zigzag.pos.x - expected_x).abs() < 1e-4);
        assert_eq!(zigzag.pos.y, 10.0 + ENEMY_SPEED);

        let mut diagonal = Enemy::new(Vec2::new(100.0, 0.0), EnemyKind::Diagonal, 0.0, &tuning);
        diagonal.advance();
        assert!((diagonal.pos.x - (100.0 + ENEMY_SPEED * DIAGONAL_DAMPING)).abs() < 1e-4);
        assert!(diagonal.pos.y.abs() < 1e-4);
        assert_eq!(diagonal.kind(), EnemyKind::Diagonal);
    }

    #[test]
    fn test_enemy_off_screen() {
        let tuning = Tuning::default();
        let mut zigzag = Enemy::new(Vec2::new(0.0, 100.0), EnemyKind::Zigzag, 0.0, &tuning);
        zigzag.pos.x = -30.0;
        assert!(!zigzag.is_off_screen());
        zigzag.pos.y = ARENA_HEIGHT + 1.0;
        assert!(zigzag.is_off_screen());

        let mut rising = Enemy::new(Vec2::new(200.0, ENEMY_SPAWN_Y), EnemyKind::Diagonal, -1.5, &tuning);
        for _ in 0..20 {
            rising.advance();
        }
        assert!(rising.is_off_screen());
    }

    #[test]
    fn test_boss_descends_then_holds() {
        let tuning = Tuning::default();
        let mut boss = Boss::new(&tuning);
        for _ in 0..500 {
            boss.advance();
        }
        assert_eq!(boss.pos.y, BOSS_HOLD_Y);
    }

    #[test]
    fn test_boss_hits() {
        let tuning = Tuning::default();
        let mut boss = Boss::new(&tuning);
        for _ in 0..BOSS_MAX_HEALTH - 1 {
            assert!(!boss.take_hit());
        }
        assert!((boss.health_fraction() - 1.0 / BOSS_MAX_HEALTH as f32).abs() < 1e-6);
        assert!(boss.take_hit());
        assert_eq!(boss.health, 0);
    }

    #[test]
    fn test_item_falls_at_half_enemy_speed() {
        let tuning = Tuning::default();
        let mut item = Item::new(Vec2::new(50.0, ITEM_SPAWN_Y), ItemKind::Heal, tuning.item_speed());
        item.advance();
        assert_eq!(item.pos.y, ITEM_SPAWN_Y + ENEMY_SPEED / 2.0);
    }
}
