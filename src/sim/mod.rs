//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, driven by an external scheduler
//! - Injected RNG only
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod entity;
pub mod error;
pub mod shape;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use entity::{Bomb, Boss, Bullet, Enemy, EnemyKind, EnemyMotion, Item, ItemKind, Player};
pub use error::InvariantViolation;
pub use shape::{Collider, Shape, overlaps};
pub use snapshot::Snapshot;
pub use spawn::{spawn_enemy, spawn_item};
pub use state::{GameEvent, GamePhase, GameState, KillCause, RngState};
pub use tick::{TickInput, tick};
