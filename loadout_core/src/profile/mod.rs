//! ProfileProvider - Trait and implementations for per-weapon combat profiles

mod axe;
mod bow;
mod dagger;
mod shield;

pub use axe::AxeProfile;
pub use bow::BowProfile;
pub use dagger::DaggerProfile;
pub use shield::ShieldProfile;

use crate::config::ProfileFactors;
use crate::loadout::Loadout;
use crate::types::WeaponKind;
use serde::{Deserialize, Serialize};

/// One weapon's isolated contribution to a player's multipliers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombatProfile {
    /// Weapon is equipped
    pub active: bool,
    /// Weapon lets the player shoot arrows (bow only)
    pub can_shoot: bool,
    pub move_speed_multiplier: f64,
    pub outgoing_damage_multiplier: f64,
    pub incoming_damage_multiplier: f64,
    pub draw_power_multiplier: f64,
    pub arrow_speed_multiplier: f64,
}

impl Default for CombatProfile {
    fn default() -> Self {
        Self::neutral()
    }
}

impl CombatProfile {
    /// All factors 1.0, no capabilities
    pub const fn neutral() -> Self {
        CombatProfile {
            active: false,
            can_shoot: false,
            move_speed_multiplier: 1.0,
            outgoing_damage_multiplier: 1.0,
            incoming_damage_multiplier: 1.0,
            draw_power_multiplier: 1.0,
            arrow_speed_multiplier: 1.0,
        }
    }

    /// Profile of a weapon with the given factors; neutral when not equipped
    pub fn from_factors(active: bool, factors: &ProfileFactors) -> Self {
        if !active {
            return Self::neutral();
        }
        CombatProfile {
            active: true,
            can_shoot: false,
            move_speed_multiplier: factors.move_speed,
            outgoing_damage_multiplier: factors.outgoing_damage,
            incoming_damage_multiplier: factors.incoming_damage,
            draw_power_multiplier: factors.draw_power,
            arrow_speed_multiplier: factors.arrow_speed,
        }
    }

    /// Check every factor is exactly 1.0
    pub fn is_neutral(&self) -> bool {
        self.factors().iter().all(|(_, value)| *value == 1.0)
    }

    /// Factors paired with their display names, in accumulator field order
    pub fn factors(&self) -> [(&'static str, f64); 5] {
        [
            ("move_speed", self.move_speed_multiplier),
            ("incoming_damage", self.incoming_damage_multiplier),
            ("outgoing_damage", self.outgoing_damage_multiplier),
            ("draw_power", self.draw_power_multiplier),
            ("arrow_speed", self.arrow_speed_multiplier),
        ]
    }
}

/// Anything that can compute a weapon's combat profile
///
/// Providers must be pure: the same loadout always yields the same profile.
pub trait ProfileProvider: Send + Sync {
    /// Weapon slot this provider fills
    fn weapon(&self) -> WeaponKind;

    /// Compute the profile for a normalized loadout
    fn profile(&self, loadout: &Loadout) -> CombatProfile;
}

/// Stand-in for a weapon with no registered provider
#[derive(Debug, Clone, Copy)]
pub struct NeutralProfile {
    weapon: WeaponKind,
}

impl NeutralProfile {
    pub fn new(weapon: WeaponKind) -> Self {
        NeutralProfile { weapon }
    }
}

impl ProfileProvider for NeutralProfile {
    fn weapon(&self) -> WeaponKind {
        self.weapon
    }

    fn profile(&self, _loadout: &Loadout) -> CombatProfile {
        CombatProfile::neutral()
    }
}

/// Build the canonical provider for a weapon from its factors
pub fn provider_for(weapon: WeaponKind, factors: ProfileFactors) -> Box<dyn ProfileProvider> {
    match weapon {
        WeaponKind::Bow => Box::new(BowProfile::new(factors)),
        WeaponKind::Axe => Box::new(AxeProfile::new(factors)),
        WeaponKind::Shield => Box::new(ShieldProfile::new(factors)),
        WeaponKind::Dagger => Box::new(DaggerProfile::new(factors)),
    }
}
