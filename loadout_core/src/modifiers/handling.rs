//! Handling - Applying aggregated modifiers to a player's base stats

use crate::loadout::Loadout;
use crate::modifiers::AggregatedModifiers;
use serde::{Deserialize, Serialize};

/// Consumer-side constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandlingTuning {
    /// Move speed factor while holding a shield block
    #[serde(default = "default_block_move_multiplier")]
    pub block_move_multiplier: f64,
    /// Floor for damage taken from any landed hit
    #[serde(default = "default_min_incoming_damage")]
    pub min_incoming_damage: f64,
}

impl Default for HandlingTuning {
    fn default() -> Self {
        HandlingTuning {
            block_move_multiplier: default_block_move_multiplier(),
            min_incoming_damage: default_min_incoming_damage(),
        }
    }
}

fn default_block_move_multiplier() -> f64 {
    0.68
}
fn default_min_incoming_damage() -> f64 {
    1.0
}

/// Aggregated modifiers bound to the loadout they came from
///
/// This is what movement, damage resolution and the ranged-attack code
/// read each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handling {
    pub modifiers: AggregatedModifiers,
    has_shield: bool,
    tuning: HandlingTuning,
}

impl Handling {
    pub fn new(loadout: &Loadout, modifiers: AggregatedModifiers, tuning: HandlingTuning) -> Self {
        Handling {
            modifiers,
            has_shield: loadout.normalized().shield,
            tuning,
        }
    }

    /// A block only takes effect with a shield equipped
    pub fn is_blocking(&self, block_requested: bool) -> bool {
        block_requested && self.has_shield
    }

    /// Target horizontal speed for a base move speed
    pub fn movement_speed(&self, base: f64, block_requested: bool) -> f64 {
        let block = if self.is_blocking(block_requested) {
            self.tuning.block_move_multiplier
        } else {
            1.0
        };
        base * self.modifiers.move_speed_multiplier * block
    }

    /// Damage taken from a hit; never below the configured floor
    pub fn incoming_damage(&self, amount: f64) -> f64 {
        (amount * self.modifiers.incoming_damage_multiplier).max(self.tuning.min_incoming_damage)
    }

    pub fn outgoing_damage(&self, amount: f64) -> f64 {
        amount * self.modifiers.outgoing_damage_multiplier
    }

    /// Effective draw power for a raw aim power; zero without a bow
    pub fn draw_power(&self, raw: f64) -> f64 {
        if self.modifiers.can_shoot_arrows {
            raw * self.modifiers.draw_power_multiplier
        } else {
            0.0
        }
    }

    pub fn arrow_launch_speed(&self, base: f64) -> f64 {
        base * self.modifiers.arrow_speed_multiplier
    }
}
