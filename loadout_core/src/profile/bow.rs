//! BowProfile - Bow and arrows

use crate::config::ProfileFactors;
use crate::loadout::Loadout;
use crate::profile::{CombatProfile, ProfileProvider};
use crate::types::WeaponKind;

/// Profile for the bow. The only provider that grants shooting.
#[derive(Debug, Clone, Copy)]
pub struct BowProfile {
    factors: ProfileFactors,
}

impl BowProfile {
    pub fn new(factors: ProfileFactors) -> Self {
        BowProfile { factors }
    }
}

impl Default for BowProfile {
    fn default() -> Self {
        BowProfile::new(ProfileFactors::canonical(WeaponKind::Bow))
    }
}

impl ProfileProvider for BowProfile {
    fn weapon(&self) -> WeaponKind {
        WeaponKind::Bow
    }

    fn profile(&self, loadout: &Loadout) -> CombatProfile {
        let mut profile = CombatProfile::from_factors(loadout.arrows, &self.factors);
        profile.can_shoot = loadout.arrows;
        profile
    }
}
