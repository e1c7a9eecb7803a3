//! ShieldProfile - Off-hand shield

use crate::config::ProfileFactors;
use crate::loadout::Loadout;
use crate::profile::{CombatProfile, ProfileProvider};
use crate::types::WeaponKind;

#[derive(Debug, Clone, Copy)]
pub struct ShieldProfile {
    factors: ProfileFactors,
}

impl ShieldProfile {
    pub fn new(factors: ProfileFactors) -> Self {
        ShieldProfile { factors }
    }
}

impl Default for ShieldProfile {
    fn default() -> Self {
        ShieldProfile::new(ProfileFactors::canonical(WeaponKind::Shield))
    }
}

impl ProfileProvider for ShieldProfile {
    fn weapon(&self) -> WeaponKind {
        WeaponKind::Shield
    }

    fn profile(&self, loadout: &Loadout) -> CombatProfile {
        CombatProfile::from_factors(loadout.shield, &self.factors)
    }
}
