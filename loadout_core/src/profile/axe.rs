//! AxeProfile - Two-handed axe, sent over the wire as `longsword`

use crate::config::ProfileFactors;
use crate::loadout::Loadout;
use crate::profile::{CombatProfile, ProfileProvider};
use crate::types::WeaponKind;

#[derive(Debug, Clone, Copy)]
pub struct AxeProfile {
    factors: ProfileFactors,
}

impl AxeProfile {
    pub fn new(factors: ProfileFactors) -> Self {
        AxeProfile { factors }
    }
}

impl Default for AxeProfile {
    fn default() -> Self {
        AxeProfile::new(ProfileFactors::canonical(WeaponKind::Axe))
    }
}

impl ProfileProvider for AxeProfile {
    fn weapon(&self) -> WeaponKind {
        WeaponKind::Axe
    }

    fn profile(&self, loadout: &Loadout) -> CombatProfile {
        CombatProfile::from_factors(loadout.longsword, &self.factors)
    }
}
