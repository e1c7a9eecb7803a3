//! Loadout - The set of weapons a player has equipped

mod normalize;
mod request;

pub use normalize::normalize;
pub use request::LoadoutRequest;

use crate::types::{RoleCategory, WeaponKind};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Weapon capability flags for one player
///
/// Field names follow the game's wire format: the axe travels as
/// `longsword` and the dagger as `miniSword`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Loadout {
    /// Bow and arrows equipped
    #[serde(deserialize_with = "lenient_flag")]
    pub arrows: bool,
    /// Axe equipped
    #[serde(deserialize_with = "lenient_flag")]
    pub longsword: bool,
    /// Shield equipped (off-hand)
    #[serde(deserialize_with = "lenient_flag")]
    pub shield: bool,
    /// Dagger equipped (sidearm)
    #[serde(
        rename = "miniSword",
        alias = "mini_sword",
        deserialize_with = "lenient_flag"
    )]
    pub mini_sword: bool,
}

/// Read a weapon flag; anything but a literal `true` is `false`
pub(crate) fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(matches!(value, Value::Bool(true)))
}

impl Loadout {
    /// Bow build
    pub fn archer() -> Self {
        RoleCategory::Archer.loadout()
    }

    /// Axe build
    pub fn axe() -> Self {
        RoleCategory::Longswordsman.loadout()
    }

    /// Axe and shield build
    pub fn axe_and_shield() -> Self {
        RoleCategory::ShieldSword.loadout()
    }

    /// Add or remove the dagger sidearm
    pub fn with_dagger(mut self, equipped: bool) -> Self {
        self.mini_sword = equipped;
        self
    }

    /// Apply the arm-slot rules, see [`normalize`]
    pub fn normalized(&self) -> Loadout {
        normalize(self)
    }

    /// Check the arm-slot rules hold: one primary weapon, shield only with the axe
    pub fn is_normalized(&self) -> bool {
        self.arrows != self.longsword && (!self.shield || self.longsword)
    }

    /// Weapons equipped, in aggregation order
    pub fn equipped(&self) -> impl Iterator<Item = WeaponKind> + '_ {
        WeaponKind::all()
            .iter()
            .copied()
            .filter(move |kind| kind.is_equipped(self))
    }

    /// Resolve the lobby role of this loadout after normalization
    pub fn role_category(&self) -> RoleCategory {
        let normalized = self.normalized();
        if normalized.longsword && normalized.shield {
            RoleCategory::ShieldSword
        } else if normalized.longsword {
            RoleCategory::Longswordsman
        } else {
            RoleCategory::Archer
        }
    }
}

impl From<RoleCategory> for Loadout {
    fn from(role: RoleCategory) -> Self {
        role.loadout()
    }
}
