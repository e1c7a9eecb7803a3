//! Arm-slot rules applied to a requested loadout

use super::Loadout;

/// Derive the equippable loadout from a requested one
///
/// The axe and the bow share the primary arm. Requesting the axe wins and
/// keeps the shield request; anything else becomes the bow build, which
/// cannot carry a shield. The dagger is a sidearm and passes through
/// unchanged in both cases.
///
/// This is the only place arm-slot exclusivity is decided.
pub fn normalize(requested: &Loadout) -> Loadout {
    if requested.longsword {
        Loadout {
            arrows: false,
            longsword: true,
            shield: requested.shield,
            mini_sword: requested.mini_sword,
        }
    } else {
        Loadout {
            arrows: true,
            longsword: false,
            shield: false,
            mini_sword: requested.mini_sword,
        }
    }
}
