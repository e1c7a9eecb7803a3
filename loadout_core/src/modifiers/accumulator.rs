//! ModifierAccumulator - Collects profile factors before clamping

use crate::modifiers::{AggregatedModifiers, ModifierBands};
use crate::profile::CombatProfile;
use crate::types::WeaponKind;

/// Running product of every profile applied so far
///
/// Starts neutral; each profile multiplies into the same-named field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModifierAccumulator {
    pub move_speed: f64,
    pub incoming_damage: f64,
    pub outgoing_damage: f64,
    pub draw_power: f64,
    pub arrow_speed: f64,
    pub can_shoot_arrows: bool,
}

impl ModifierAccumulator {
    /// Create a neutral accumulator
    pub fn new(can_shoot_arrows: bool) -> Self {
        ModifierAccumulator {
            move_speed: 1.0,
            incoming_damage: 1.0,
            outgoing_damage: 1.0,
            draw_power: 1.0,
            arrow_speed: 1.0,
            can_shoot_arrows,
        }
    }

    /// Multiply a weapon's profile into the running product
    ///
    /// Only the bow decides whether arrows can be shot.
    pub fn apply(&mut self, weapon: WeaponKind, profile: &CombatProfile) {
        self.move_speed *= sanitize(weapon, "move_speed", profile.move_speed_multiplier);
        self.outgoing_damage *= sanitize(
            weapon,
            "outgoing_damage",
            profile.outgoing_damage_multiplier,
        );
        self.incoming_damage *= sanitize(
            weapon,
            "incoming_damage",
            profile.incoming_damage_multiplier,
        );
        self.draw_power *= sanitize(weapon, "draw_power", profile.draw_power_multiplier);
        self.arrow_speed *= sanitize(weapon, "arrow_speed", profile.arrow_speed_multiplier);

        if weapon == WeaponKind::Bow {
            self.can_shoot_arrows = profile.can_shoot;
        }
    }

    /// The product as-is, before clamping
    pub fn raw(&self) -> AggregatedModifiers {
        AggregatedModifiers {
            move_speed_multiplier: self.move_speed,
            incoming_damage_multiplier: self.incoming_damage,
            outgoing_damage_multiplier: self.outgoing_damage,
            draw_power_multiplier: self.draw_power,
            arrow_speed_multiplier: self.arrow_speed,
            can_shoot_arrows: self.can_shoot_arrows,
        }
    }

    /// Clamp every multiplier into its band
    pub fn finish(&self, bands: &ModifierBands) -> AggregatedModifiers {
        AggregatedModifiers {
            move_speed_multiplier: bands.move_speed.clamp(self.move_speed),
            incoming_damage_multiplier: bands.incoming_damage.clamp(self.incoming_damage),
            outgoing_damage_multiplier: bands.outgoing_damage.clamp(self.outgoing_damage),
            draw_power_multiplier: bands.draw_power.clamp(self.draw_power),
            arrow_speed_multiplier: bands.arrow_speed.clamp(self.arrow_speed),
            can_shoot_arrows: self.can_shoot_arrows,
        }
    }
}

/// Replace unusable factors with 1.0
///
/// Zero counts as unusable: the game client has always read a zero factor
/// as "not set".
fn sanitize(weapon: WeaponKind, field: &str, value: f64) -> f64 {
    if value.is_finite() && value != 0.0 {
        value
    } else {
        log::warn!(
            "{} profile produced {} for {}, treating as neutral",
            weapon,
            value,
            field
        );
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile_with_move(value: f64) -> CombatProfile {
        CombatProfile {
            active: true,
            move_speed_multiplier: value,
            ..CombatProfile::neutral()
        }
    }

    #[test]
    fn test_products_stack_multiplicatively() {
        let mut acc = ModifierAccumulator::new(false);
        acc.apply(WeaponKind::Shield, &profile_with_move(0.93));
        acc.apply(WeaponKind::Dagger, &profile_with_move(1.12));
        assert!((acc.move_speed - 0.93 * 1.12).abs() < 1e-12);
    }

    #[test]
    fn test_non_finite_and_zero_are_neutral() {
        let mut acc = ModifierAccumulator::new(false);
        acc.apply(WeaponKind::Axe, &profile_with_move(f64::NAN));
        acc.apply(WeaponKind::Axe, &profile_with_move(f64::INFINITY));
        acc.apply(WeaponKind::Axe, &profile_with_move(0.0));
        assert_eq!(acc.move_speed, 1.0);
    }

    #[test]
    fn test_can_shoot_comes_from_bow_only() {
        let mut acc = ModifierAccumulator::new(true);
        let shooter = CombatProfile {
            can_shoot: true,
            ..CombatProfile::neutral()
        };
        // A non-bow profile claiming to shoot is ignored
        acc.apply(WeaponKind::Dagger, &shooter);
        assert!(acc.can_shoot_arrows);

        acc.apply(WeaponKind::Bow, &CombatProfile::neutral());
        assert!(!acc.can_shoot_arrows);
        acc.apply(WeaponKind::Dagger, &shooter);
        assert!(!acc.can_shoot_arrows);
    }

    #[test]
    fn test_finish_clamps_raw_does_not() {
        let mut acc = ModifierAccumulator::new(false);
        acc.apply(WeaponKind::Dagger, &profile_with_move(3.0));
        assert_eq!(acc.raw().move_speed_multiplier, 3.0);
        assert_eq!(acc.finish(&ModifierBands::default()).move_speed_multiplier, 1.25);
    }
}
