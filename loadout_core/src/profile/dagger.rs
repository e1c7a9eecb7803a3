//! DaggerProfile - Sidearm dagger, sent over the wire as `miniSword`

use crate::config::ProfileFactors;
use crate::loadout::Loadout;
use crate::profile::{CombatProfile, ProfileProvider};
use crate::types::WeaponKind;

#[derive(Debug, Clone, Copy)]
pub struct DaggerProfile {
    factors: ProfileFactors,
}

impl DaggerProfile {
    pub fn new(factors: ProfileFactors) -> Self {
        DaggerProfile { factors }
    }
}

impl Default for DaggerProfile {
    fn default() -> Self {
        DaggerProfile::new(ProfileFactors::canonical(WeaponKind::Dagger))
    }
}

impl ProfileProvider for DaggerProfile {
    fn weapon(&self) -> WeaponKind {
        WeaponKind::Dagger
    }

    fn profile(&self, loadout: &Loadout) -> CombatProfile {
        CombatProfile::from_factors(loadout.mini_sword, &self.factors)
    }
}
