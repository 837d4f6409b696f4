use std::fmt;

/// A broken state invariant, reported by `GameState::validate`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    LivesOutOfRange { lives: u8, max: u8 },
    LivesExhaustedWhilePlaying,
    LevelZero,
    BossPhaseMismatch { boss_present: bool, boss_fight: bool },
    BossHealthOutOfRange { health: u32, max: u32 },
    BombTimerOutOfRange { remaining: u32, duration: u32 },
    PlayerOutOfBounds,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LivesOutOfRange { lives, max } => {
                write!(f, "lives out of range: {lives} (allowed 0..={max})")
            }
            Self::LivesExhaustedWhilePlaying => write!(f, "lives reached 0 without game over"),
            Self::LevelZero => write!(f, "level must start at 1"),
            Self::BossPhaseMismatch {
                boss_present,
                boss_fight,
            } => write!(
                f,
                "boss/phase mismatch: boss_present={boss_present}, boss_fight={boss_fight}"
            ),
            Self::BossHealthOutOfRange { health, max } => {
                write!(f, "boss health out of range: {health} (allowed 1..={max})")
            }
            Self::BombTimerOutOfRange {
                remaining,
                duration,
            } => write!(
                f,
                "live bomb timer out of range: {remaining} (allowed 1..={duration})"
            ),
            Self::PlayerOutOfBounds => write!(f, "player left the arena"),
        }
    }
}

impl std::error::Error for InvariantViolation {}
