//! ModifierAggregator - Combines weapon profiles into one modifier bundle

mod accumulator;
mod band;
mod handling;

pub use accumulator::ModifierAccumulator;
pub use band::{ClampBand, ModifierBands};
pub use handling::{Handling, HandlingTuning};

use crate::config::{default_tuning, WeaponTuning};
use crate::loadout::{normalize, Loadout, LoadoutRequest};
use crate::profile::{provider_for, CombatProfile, NeutralProfile, ProfileProvider};
use crate::types::WeaponKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Final multipliers applied to a player's base stats
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedModifiers {
    pub move_speed_multiplier: f64,
    pub incoming_damage_multiplier: f64,
    pub outgoing_damage_multiplier: f64,
    pub draw_power_multiplier: f64,
    pub arrow_speed_multiplier: f64,
    pub can_shoot_arrows: bool,
}

impl Default for AggregatedModifiers {
    fn default() -> Self {
        ModifierAccumulator::new(false).raw()
    }
}

impl AggregatedModifiers {
    /// Multipliers paired with their config names
    pub fn multipliers(&self) -> [(&'static str, f64); 5] {
        [
            ("move_speed", self.move_speed_multiplier),
            ("incoming_damage", self.incoming_damage_multiplier),
            ("outgoing_damage", self.outgoing_damage_multiplier),
            ("draw_power", self.draw_power_multiplier),
            ("arrow_speed", self.arrow_speed_multiplier),
        ]
    }
}

/// One provider's contribution during aggregation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileStep {
    pub weapon: WeaponKind,
    /// False when the slot had no provider and the neutral profile stood in
    pub provided: bool,
    pub profile: CombatProfile,
    /// Unclamped product after this step
    pub running: AggregatedModifiers,
}

/// Every intermediate value of one aggregation
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationBreakdown {
    pub requested: Loadout,
    pub normalized: Loadout,
    pub steps: Vec<ProfileStep>,
    pub raw: AggregatedModifiers,
    pub clamped: AggregatedModifiers,
}

/// Registry of one provider slot per weapon plus the clamp bands
///
/// Built once at startup and read-only afterwards. A slot left empty
/// contributes the neutral profile.
pub struct ModifierAggregator {
    bow: Option<Box<dyn ProfileProvider>>,
    axe: Option<Box<dyn ProfileProvider>>,
    shield: Option<Box<dyn ProfileProvider>>,
    dagger: Option<Box<dyn ProfileProvider>>,
    bands: ModifierBands,
    handling: HandlingTuning,
}

impl fmt::Debug for ModifierAggregator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifierAggregator")
            .field("bow", &self.bow.is_some())
            .field("axe", &self.axe.is_some())
            .field("shield", &self.shield.is_some())
            .field("dagger", &self.dagger.is_some())
            .field("bands", &self.bands)
            .field("handling", &self.handling)
            .finish()
    }
}

impl Default for ModifierAggregator {
    fn default() -> Self {
        Self::from_tuning(&WeaponTuning::default())
    }
}

impl ModifierAggregator {
    /// Start an empty registry
    pub fn builder() -> AggregatorBuilder {
        AggregatorBuilder::new()
    }

    /// Registry with every canonical provider built from the given tuning
    pub fn from_tuning(tuning: &WeaponTuning) -> Self {
        AggregatorBuilder::from_tuning(tuning).build()
    }

    /// Registry with no providers; every weapon is neutral
    pub fn neutral() -> Self {
        AggregatorBuilder::new().build()
    }

    pub fn bands(&self) -> &ModifierBands {
        &self.bands
    }

    pub fn handling_tuning(&self) -> &HandlingTuning {
        &self.handling
    }

    /// Whether a provider is registered for the weapon
    pub fn has_provider(&self, weapon: WeaponKind) -> bool {
        self.slot(weapon).is_some()
    }

    fn slot(&self, weapon: WeaponKind) -> Option<&dyn ProfileProvider> {
        let slot = match weapon {
            WeaponKind::Bow => &self.bow,
            WeaponKind::Axe => &self.axe,
            WeaponKind::Shield => &self.shield,
            WeaponKind::Dagger => &self.dagger,
        };
        slot.as_deref()
    }

    /// Run every slot in aggregation order on a normalized loadout
    fn evaluate<F>(&self, normalized: &Loadout, mut on_step: F) -> ModifierAccumulator
    where
        F: FnMut(WeaponKind, bool, &CombatProfile, &ModifierAccumulator),
    {
        let mut acc = ModifierAccumulator::new(false);
        for weapon in WeaponKind::all() {
            let (provided, profile) = match self.slot(*weapon) {
                Some(provider) => (true, provider.profile(normalized)),
                None => (false, NeutralProfile::new(*weapon).profile(normalized)),
            };
            acc.apply(*weapon, &profile);
            on_step(*weapon, provided, &profile, &acc);
        }
        acc
    }

    /// Compute the clamped modifier bundle for a requested loadout
    pub fn aggregate(&self, loadout: &Loadout) -> AggregatedModifiers {
        let normalized = normalize(loadout);
        let result = self
            .evaluate(&normalized, |_, _, _, _| {})
            .finish(&self.bands);
        log::debug!("aggregated {:?} -> {:?}", normalized, result);
        result
    }

    /// Resolve a wire request and aggregate it
    pub fn aggregate_request(&self, request: &LoadoutRequest) -> AggregatedModifiers {
        self.aggregate(&request.resolve())
    }

    /// Aggregate and bind the result to the loadout for gameplay consumers
    pub fn handling(&self, loadout: &Loadout) -> Handling {
        Handling::new(loadout, self.aggregate(loadout), self.handling)
    }

    /// Aggregate while recording each provider's contribution
    pub fn breakdown(&self, loadout: &Loadout) -> AggregationBreakdown {
        let normalized = normalize(loadout);
        let mut steps = Vec::with_capacity(WeaponKind::all().len());
        let acc = self.evaluate(&normalized, |weapon, provided, profile, running| {
            steps.push(ProfileStep {
                weapon,
                provided,
                profile: *profile,
                running: running.raw(),
            });
        });

        AggregationBreakdown {
            requested: *loadout,
            normalized,
            steps,
            raw: acc.raw(),
            clamped: acc.finish(&self.bands),
        }
    }
}

/// Builder for [`ModifierAggregator`]
pub struct AggregatorBuilder {
    bow: Option<Box<dyn ProfileProvider>>,
    axe: Option<Box<dyn ProfileProvider>>,
    shield: Option<Box<dyn ProfileProvider>>,
    dagger: Option<Box<dyn ProfileProvider>>,
    bands: ModifierBands,
    handling: HandlingTuning,
}

impl Default for AggregatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregatorBuilder {
    pub fn new() -> Self {
        AggregatorBuilder {
            bow: None,
            axe: None,
            shield: None,
            dagger: None,
            bands: ModifierBands::default(),
            handling: HandlingTuning::default(),
        }
    }

    /// Builder pre-filled with the canonical provider for every weapon
    pub fn from_tuning(tuning: &WeaponTuning) -> Self {
        let mut builder = AggregatorBuilder::new()
            .bands(tuning.bands)
            .handling(tuning.handling);
        for weapon in WeaponKind::all() {
            builder = builder.register_boxed(provider_for(*weapon, tuning.factors(*weapon)));
        }
        builder
    }

    fn slot_mut(&mut self, weapon: WeaponKind) -> &mut Option<Box<dyn ProfileProvider>> {
        match weapon {
            WeaponKind::Bow => &mut self.bow,
            WeaponKind::Axe => &mut self.axe,
            WeaponKind::Shield => &mut self.shield,
            WeaponKind::Dagger => &mut self.dagger,
        }
    }

    /// Put a provider in the slot of the weapon it reports
    pub fn register<P: ProfileProvider + 'static>(self, provider: P) -> Self {
        self.register_boxed(Box::new(provider))
    }

    pub fn register_boxed(mut self, provider: Box<dyn ProfileProvider>) -> Self {
        let weapon = provider.weapon();
        if self.slot_mut(weapon).replace(provider).is_some() {
            log::warn!("replacing registered {} profile provider", weapon);
        }
        self
    }

    /// Empty a slot so the weapon falls back to the neutral profile
    pub fn unregister(mut self, weapon: WeaponKind) -> Self {
        *self.slot_mut(weapon) = None;
        self
    }

    pub fn bands(mut self, bands: ModifierBands) -> Self {
        self.bands = bands;
        self
    }

    pub fn handling(mut self, handling: HandlingTuning) -> Self {
        self.handling = handling;
        self
    }

    pub fn build(self) -> ModifierAggregator {
        for weapon in WeaponKind::all() {
            let registered = match weapon {
                WeaponKind::Bow => self.bow.is_some(),
                WeaponKind::Axe => self.axe.is_some(),
                WeaponKind::Shield => self.shield.is_some(),
                WeaponKind::Dagger => self.dagger.is_some(),
            };
            if !registered {
                log::warn!("no {} profile provider registered, using neutral profile", weapon);
            }
        }
        ModifierAggregator {
            bow: self.bow,
            axe: self.axe,
            shield: self.shield,
            dagger: self.dagger,
            bands: self.bands,
            handling: self.handling,
        }
    }
}

/// Process-wide aggregator built from the bundled tuning
pub fn canonical_aggregator() -> &'static ModifierAggregator {
    static CANONICAL: OnceLock<ModifierAggregator> = OnceLock::new();
    CANONICAL.get_or_init(|| ModifierAggregator::from_tuning(&default_tuning()))
}

/// Aggregate a loadout with the bundled tuning
pub fn aggregate(loadout: &Loadout) -> AggregatedModifiers {
    canonical_aggregator().aggregate(loadout)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Provider that applies the same factor to every field
    struct FixedProfile {
        weapon: WeaponKind,
        factor: f64,
    }

    impl ProfileProvider for FixedProfile {
        fn weapon(&self) -> WeaponKind {
            self.weapon
        }

        fn profile(&self, _loadout: &Loadout) -> CombatProfile {
            CombatProfile {
                active: true,
                can_shoot: false,
                move_speed_multiplier: self.factor,
                outgoing_damage_multiplier: self.factor,
                incoming_damage_multiplier: self.factor,
                draw_power_multiplier: self.factor,
                arrow_speed_multiplier: self.factor,
            }
        }
    }

    fn fixed_everywhere(factor: f64) -> ModifierAggregator {
        let mut builder = ModifierAggregator::builder();
        for weapon in WeaponKind::all() {
            builder = builder.register(FixedProfile {
                weapon: *weapon,
                factor,
            });
        }
        builder.build()
    }

    fn assert_all_neutral(mods: &AggregatedModifiers) {
        for (name, value) in mods.multipliers() {
            assert_eq!(value, 1.0, "{} should be neutral", name);
        }
    }

    #[test]
    fn test_neutral_baseline() {
        let mods = ModifierAggregator::neutral().aggregate(&Loadout::default());
        assert_all_neutral(&mods);
        assert!(!mods.can_shoot_arrows);
    }

    #[test]
    fn test_empty_request_is_plain_archer() {
        let mods = ModifierAggregator::default().aggregate(&Loadout::default());
        assert_all_neutral(&mods);
        // The normalizer turns an empty request into the bow build
        assert!(mods.can_shoot_arrows);
    }

    #[test]
    fn test_bow_build() {
        let mods = ModifierAggregator::default().aggregate(&Loadout::archer());
        assert!(mods.can_shoot_arrows);
        assert_eq!(mods.move_speed_multiplier, 1.0);
        assert_eq!(mods.arrow_speed_multiplier, 1.0);
    }

    #[test]
    fn test_axe_build() {
        let mods = ModifierAggregator::default().aggregate(&Loadout::axe());
        assert_eq!(mods.outgoing_damage_multiplier, 1.08);
        assert!(!mods.can_shoot_arrows);
        assert_eq!(mods.move_speed_multiplier, 1.0);
    }

    #[test]
    fn test_axe_and_shield_build() {
        let aggregator = ModifierAggregator::default();
        let breakdown = aggregator.breakdown(&Loadout::axe_and_shield());
        // 1.0 (axe move) * 0.93 (shield move), inside [0.65, 1.25]
        assert_eq!(breakdown.raw.move_speed_multiplier, 0.93);
        assert_eq!(breakdown.clamped.move_speed_multiplier, 0.93);
        assert_eq!(breakdown.raw.incoming_damage_multiplier, 1.0);
        assert_eq!(breakdown.clamped.incoming_damage_multiplier, 1.0);
        assert_eq!(breakdown.clamped.outgoing_damage_multiplier, 1.08);
        assert_eq!(aggregator.aggregate(&Loadout::axe_and_shield()), breakdown.clamped);
    }

    #[test]
    fn test_dagger_stacks_with_each_primary() {
        let aggregator = ModifierAggregator::default();

        let archer = aggregator.aggregate(&Loadout::archer().with_dagger(true));
        assert!(archer.can_shoot_arrows);
        assert!((archer.move_speed_multiplier - 1.12).abs() < 1e-12);
        assert!((archer.draw_power_multiplier - 1.15).abs() < 1e-12);
        assert!((archer.outgoing_damage_multiplier - 1.04).abs() < 1e-12);

        let axe = aggregator.aggregate(&Loadout::axe().with_dagger(true));
        assert!((axe.outgoing_damage_multiplier - 1.08 * 1.04).abs() < 1e-12);

        let full = aggregator.aggregate(&Loadout::axe_and_shield().with_dagger(true));
        assert!((full.move_speed_multiplier - 0.93 * 1.12).abs() < 1e-12);
    }

    #[test]
    fn test_clamps_to_upper_bounds() {
        let aggregator = fixed_everywhere(10.0);
        let breakdown = aggregator.breakdown(&Loadout::axe_and_shield());
        assert!((breakdown.raw.move_speed_multiplier - 10_000.0).abs() < 1e-6);

        let mods = breakdown.clamped;
        assert_eq!(mods.move_speed_multiplier, 1.25);
        assert_eq!(mods.incoming_damage_multiplier, 1.0);
        assert_eq!(mods.outgoing_damage_multiplier, 1.35);
        assert_eq!(mods.draw_power_multiplier, 1.35);
        assert_eq!(mods.arrow_speed_multiplier, 1.25);
    }

    #[test]
    fn test_clamps_to_lower_bounds() {
        let mods = fixed_everywhere(0.1).aggregate(&Loadout::archer());
        assert_eq!(mods.move_speed_multiplier, 0.65);
        assert_eq!(mods.incoming_damage_multiplier, 0.45);
        assert_eq!(mods.outgoing_damage_multiplier, 0.85);
        assert_eq!(mods.draw_power_multiplier, 0.85);
        assert_eq!(mods.arrow_speed_multiplier, 0.85);
    }

    #[test]
    fn test_misbehaving_provider_is_neutralised() {
        let aggregator = ModifierAggregator::builder()
            .register(FixedProfile {
                weapon: WeaponKind::Axe,
                factor: f64::NAN,
            })
            .build();
        let mods = aggregator.aggregate(&Loadout::axe());
        assert_all_neutral(&mods);
    }

    #[test]
    fn test_deterministic() {
        let aggregator = ModifierAggregator::default();
        let loadout = Loadout::axe_and_shield().with_dagger(true);
        let first = aggregator.aggregate(&loadout);
        let second = aggregator.aggregate(&loadout);
        for ((_, a), (_, b)) in first.multipliers().iter().zip(second.multipliers().iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
        assert_eq!(first.can_shoot_arrows, second.can_shoot_arrows);
    }

    #[test]
    fn test_missing_dagger_provider() {
        let aggregator = AggregatorBuilder::from_tuning(&WeaponTuning::default())
            .unregister(WeaponKind::Dagger)
            .build();
        assert!(!aggregator.has_provider(WeaponKind::Dagger));

        let mods = aggregator.aggregate(&Loadout::archer().with_dagger(true));
        assert_all_neutral(&mods);
        assert!(mods.can_shoot_arrows);
    }

    #[test]
    fn test_missing_bow_provider_cannot_shoot() {
        let aggregator = AggregatorBuilder::from_tuning(&WeaponTuning::default())
            .unregister(WeaponKind::Bow)
            .build();
        let mods = aggregator.aggregate(&Loadout::archer());
        assert!(!mods.can_shoot_arrows);
        assert_all_neutral(&mods);
    }

    #[test]
    fn test_breakdown_follows_multiplication_order() {
        let aggregator = AggregatorBuilder::from_tuning(&WeaponTuning::default())
            .unregister(WeaponKind::Shield)
            .build();
        let breakdown = aggregator.breakdown(&Loadout::axe_and_shield().with_dagger(true));

        let order: Vec<_> = breakdown.steps.iter().map(|s| s.weapon).collect();
        assert_eq!(order, WeaponKind::all().to_vec());
        assert!(!breakdown.steps[2].provided);
        assert!(breakdown.steps[2].profile.is_neutral());

        // Running product after the axe step carries only the axe bonus
        assert_eq!(breakdown.steps[1].running.outgoing_damage_multiplier, 1.08);
        assert_eq!(breakdown.steps[3].running, breakdown.raw);
    }

    #[test]
    fn test_register_replaces_slot() {
        let aggregator = ModifierAggregator::builder()
            .register(FixedProfile {
                weapon: WeaponKind::Axe,
                factor: 1.2,
            })
            .register(FixedProfile {
                weapon: WeaponKind::Axe,
                factor: 1.1,
            })
            .build();
        let mods = aggregator.aggregate(&Loadout::axe());
        assert!((mods.outgoing_damage_multiplier - 1.1).abs() < 1e-12);
    }

    #[test]
    fn test_aggregate_request() {
        let request = LoadoutRequest::from_json(r#"{"role_category": "longswordsman"}"#).unwrap();
        let mods = ModifierAggregator::default().aggregate_request(&request);
        assert_eq!(mods.outgoing_damage_multiplier, 1.08);
        assert!(!mods.can_shoot_arrows);
    }

    #[test]
    fn test_free_function_uses_bundled_tuning() {
        assert_eq!(
            aggregate(&Loadout::axe_and_shield()),
            ModifierAggregator::default().aggregate(&Loadout::axe_and_shield())
        );
    }

    #[test]
    fn test_custom_bands() {
        let bands = ModifierBands {
            move_speed: ClampBand::new(0.95, 1.05),
            ..ModifierBands::default()
        };
        let aggregator = AggregatorBuilder::from_tuning(&WeaponTuning::default())
            .bands(bands)
            .build();
        let mods = aggregator.aggregate(&Loadout::archer().with_dagger(true));
        assert_eq!(mods.move_speed_multiplier, 1.05);
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_value(aggregate(&Loadout::archer())).unwrap();
        assert_eq!(json["canShootArrows"], serde_json::Value::Bool(true));
        assert!(json.get("incomingDamageMultiplier").is_some());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn any_loadout() -> impl Strategy<Value = Loadout> {
            (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
                |(arrows, longsword, shield, mini_sword)| Loadout {
                    arrows,
                    longsword,
                    shield,
                    mini_sword,
                },
            )
        }

        proptest! {
            /// Property: every multiplier lands inside its band
            #[test]
            fn prop_output_within_bands(
                loadout in any_loadout(),
                factor in prop_oneof![0.001f64..1000.0, Just(f64::NAN), Just(f64::INFINITY), Just(0.0)]
            ) {
                let aggregator = fixed_everywhere(factor);
                let mods = aggregator.aggregate(&loadout);
                let bands = aggregator.bands();
                prop_assert!(bands.move_speed.contains(mods.move_speed_multiplier));
                prop_assert!(bands.incoming_damage.contains(mods.incoming_damage_multiplier));
                prop_assert!(bands.outgoing_damage.contains(mods.outgoing_damage_multiplier));
                prop_assert!(bands.draw_power.contains(mods.draw_power_multiplier));
                prop_assert!(bands.arrow_speed.contains(mods.arrow_speed_multiplier));
            }

            /// Property: only the bow build can shoot with the canonical registry
            #[test]
            fn prop_shooting_matches_normalized_bow(loadout in any_loadout()) {
                let mods = ModifierAggregator::default().aggregate(&loadout);
                prop_assert_eq!(mods.can_shoot_arrows, !loadout.longsword);
            }
        }
    }
}
