//! Probabilistic spawners
//!
//! Every draw goes through the injected RNG so a seeded run replays exactly.

use glam::Vec2;
use rand::Rng;

use super::entity::{Enemy, EnemyKind, Item, ItemKind};
use crate::consts::*;
use crate::tuning::Tuning;

/// Roll for a new enemy this tick (`chance = rate × level`)
///
/// Draw order: trigger roll, then x, kind and heading only on success.
pub fn spawn_enemy<R: Rng + ?Sized>(level: u32, tuning: &Tuning, rng: &mut R) -> Option<Enemy> {
    if rng.random::<f64>() >= tuning.enemy_spawn_chance(level) {
        return None;
    }
    let x = rng.random_range(0.0..ARENA_WIDTH);
    let kind = EnemyKind::ALL[rng.random_range(0..EnemyKind::ALL.len())];
    let angle = rng.random_range(0.0..std::f32::consts::TAU);
    log::debug!("Spawned {:?} enemy at x={:.1}", kind, x);
    Some(Enemy::new(Vec2::new(x, ENEMY_SPAWN_Y), kind, angle, tuning))
}

/// Roll for a new item this tick; heal and extra-bomb are equally likely
pub fn spawn_item<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> Option<Item> {
    if rng.random::<f64>() >= tuning.item_spawn_rate {
        return None;
    }
    let x = rng.random_range(0.0..ARENA_WIDTH);
    let kind = if rng.random::<f64>() < 0.5 {
        ItemKind::Heal
    } else {
        ItemKind::ExtraBomb
    };
    log::debug!("Spawned {:?} item at x={:.1}", kind, x);
    Some(Item::new(Vec2::new(x, ITEM_SPAWN_Y), kind, tuning.item_speed()))
}

/// Scripted RNG for forcing spawn outcomes in tests
#[cfg(test)]
pub(crate) mod testing {
    use rand::RngCore;

    /// Returns the same word forever. `ConstRng(0)` makes every roll succeed,
    /// `ConstRng(u64::MAX)` makes every roll fail.
    pub struct ConstRng(pub u64);

    impl RngCore for ConstRng {
        fn next_u32(&mut self) -> u32 {
            (self.0 >> 32) as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            for (i, byte) in dst.iter_mut().enumerate() {
                *byte = self.0.to_le_bytes()[i % 8];
            }
        }
    }
}
