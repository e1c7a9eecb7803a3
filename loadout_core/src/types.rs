//! Core types shared across the loadout system

use crate::loadout::Loadout;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Weapon kinds that contribute a combat profile
///
/// The declaration order is the multiplication order used by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponKind {
    /// Bow and arrows (primary arm)
    Bow,
    /// Axe, sent over the wire as `longsword` (primary arm)
    Axe,
    /// Shield (off-hand, requires the axe)
    Shield,
    /// Dagger, sent over the wire as `miniSword` (sidearm)
    Dagger,
}

impl WeaponKind {
    /// Get all weapon kinds in aggregation order
    pub fn all() -> &'static [WeaponKind] {
        &[
            WeaponKind::Bow,
            WeaponKind::Axe,
            WeaponKind::Shield,
            WeaponKind::Dagger,
        ]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            WeaponKind::Bow => "Bow",
            WeaponKind::Axe => "Axe",
            WeaponKind::Shield => "Shield",
            WeaponKind::Dagger => "Dagger",
        }
    }

    /// Whether this weapon is equipped in the given loadout
    pub fn is_equipped(&self, loadout: &Loadout) -> bool {
        match self {
            WeaponKind::Bow => loadout.arrows,
            WeaponKind::Axe => loadout.longsword,
            WeaponKind::Shield => loadout.shield,
            WeaponKind::Dagger => loadout.mini_sword,
        }
    }
}

impl fmt::Display for WeaponKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Preset builds a player can pick in the lobby
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleCategory {
    #[serde(rename = "archer")]
    Archer,
    #[serde(rename = "longswordsman")]
    Longswordsman,
    #[serde(rename = "shield+sword", alias = "shield_sword", alias = "sword_shield")]
    ShieldSword,
}

/// Error returned when a role category string is not recognised
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown role category: {0:?}")]
pub struct ParseRoleError(pub String);

impl RoleCategory {
    pub fn all() -> &'static [RoleCategory] {
        &[
            RoleCategory::Archer,
            RoleCategory::Longswordsman,
            RoleCategory::ShieldSword,
        ]
    }

    /// Wire name used by the game server
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleCategory::Archer => "archer",
            RoleCategory::Longswordsman => "longswordsman",
            RoleCategory::ShieldSword => "shield+sword",
        }
    }

    /// The loadout this role equips. Presets never carry a dagger.
    pub fn loadout(&self) -> Loadout {
        match self {
            RoleCategory::Archer => Loadout {
                arrows: true,
                ..Loadout::default()
            },
            RoleCategory::Longswordsman => Loadout {
                longsword: true,
                ..Loadout::default()
            },
            RoleCategory::ShieldSword => Loadout {
                longsword: true,
                shield: true,
                ..Loadout::default()
            },
        }
    }
}

impl fmt::Display for RoleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleCategory {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "archer" => Ok(RoleCategory::Archer),
            "longswordsman" => Ok(RoleCategory::Longswordsman),
            "shield+sword" | "shield_sword" | "sword_shield" => Ok(RoleCategory::ShieldSword),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}
