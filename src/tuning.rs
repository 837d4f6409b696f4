//! Data-driven game balance
//!
//! Every gameplay number the simulation reads lives here so a run can be
//! re-balanced from a settings file without touching the step logic.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::settings::SettingsError;

/// Balance values consumed by the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Player ===
    pub player_speed: f32,
    /// Ticks between shots while fire is held
    pub fire_interval: u32,
    pub bullet_speed: f32,

    // === Enemies ===
    pub enemy_speed: f32,
    pub zigzag_amplitude: f32,
    pub zigzag_frequency: f32,
    pub diagonal_damping: f32,
    /// Spawn chance per tick, multiplied by the level
    pub enemy_spawn_rate: f64,

    // === Boss ===
    pub boss_max_health: u32,
    pub boss_speed: f32,
    pub boss_hold_y: f32,

    // === Bomb ===
    pub bomb_radius: f32,
    pub bomb_duration: u32,

    // === Items ===
    pub item_spawn_rate: f64,

    // === Progression ===
    /// Chance per tick to call the boss once the field is clear
    pub level_up_chance: f64,
    pub enemy_score: u64,
    pub boss_score: u64,
    pub max_lives: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_speed: PLAYER_SPEED,
            fire_interval: FIRE_INTERVAL,
            bullet_speed: BULLET_SPEED,

            enemy_speed: ENEMY_SPEED,
            zigzag_amplitude: ZIGZAG_AMPLITUDE,
            zigzag_frequency: ZIGZAG_FREQUENCY,
            diagonal_damping: DIAGONAL_DAMPING,
            enemy_spawn_rate: ENEMY_SPAWN_RATE_PER_LEVEL,

            boss_max_health: BOSS_MAX_HEALTH,
            boss_speed: BOSS_SPEED,
            boss_hold_y: BOSS_HOLD_Y,

            bomb_radius: BOMB_RADIUS,
            bomb_duration: BOMB_DURATION,

            item_spawn_rate: ITEM_SPAWN_RATE,

            level_up_chance: LEVEL_UP_CHANCE,
            enemy_score: ENEMY_SCORE,
            boss_score: BOSS_SCORE,
            max_lives: MAX_LIVES,
        }
    }
}

impl Tuning {
    /// Items fall at half the standard enemy speed
    pub fn item_speed(&self) -> f32 {
        self.enemy_speed / 2.0
    }

    /// Enemy spawn chance for a level (may exceed 1.0 at high levels)
    pub fn enemy_spawn_chance(&self, level: u32) -> f64 {
        self.enemy_spawn_rate * level as f64
    }

    /// Reject values the simulation cannot start from
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(1..=MAX_LIVES).contains(&self.max_lives) {
            return Err(SettingsError::Invalid {
                field: "max_lives",
                reason: "must be between 1 and 3",
            });
        }
        if self.boss_max_health == 0 {
            return Err(SettingsError::Invalid {
                field: "boss_max_health",
                reason: "must be at least 1",
            });
        }
        if self.bomb_duration == 0 {
            return Err(SettingsError::Invalid {
                field: "bomb_duration",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "boss_max_health": 5 }"#).unwrap();
        assert_eq!(tuning.boss_max_health, 5);
        assert_eq!(tuning.bomb_duration, BOMB_DURATION);
        assert_eq!(tuning.item_speed(), 1.0);
    }

    #[test]
    fn spawn_chance_scales_with_level() {
        let tuning = Tuning::default();
        assert!((tuning.enemy_spawn_chance(1) - 0.02).abs() < 1e-12);
        assert!((tuning.enemy_spawn_chance(3) - 0.06).abs() < 1e-12);
    }

    fn rejected_field(tuning: Tuning) -> &'static str {
        match tuning.validate() {
            Err(SettingsError::Invalid { field, .. }) => field,
            other => panic!("expected an invalid field, got {other:?}"),
        }
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_lives() {
        let zero = Tuning {
            max_lives: 0,
            ..Default::default()
        };
        assert_eq!(rejected_field(zero), "max_lives");
        let huge = Tuning {
            max_lives: 255,
            ..Default::default()
        };
        assert_eq!(rejected_field(huge), "max_lives");
    }

    #[test]
    fn validate_rejects_zero_boss_health() {
        let tuning = Tuning {
            boss_max_health: 0,
            ..Default::default()
        };
        assert_eq!(rejected_field(tuning), "boss_max_health");
    }

    #[test]
    fn validate_rejects_zero_bomb_duration() {
        let tuning = Tuning {
            bomb_duration: 0,
            ..Default::default()
        };
        assert_eq!(rejected_field(tuning), "bomb_duration");
    }
}
