//! loadout_core - Weapon loadout rules and combat modifier aggregation
//!
//! This library provides:
//! - Loadout: The weapons a player has equipped, and the arm-slot rules
//! - ProfileProvider: Per-weapon combat profiles (bow, axe, shield, dagger)
//! - ModifierAggregator: Ordered composition of profiles into clamped multipliers
//! - Handling: Applying those multipliers to movement, damage and archery

pub mod config;
pub mod loadout;
pub mod modifiers;
pub mod prelude;
pub mod profile;
pub mod types;

// Re-export core types for convenience
pub use config::{default_tuning, ConfigError, ProfileFactors, WeaponTuning};
pub use loadout::{normalize, Loadout, LoadoutRequest};
pub use modifiers::{
    aggregate, canonical_aggregator, AggregatedModifiers, AggregationBreakdown,
    AggregatorBuilder, ClampBand, Handling, HandlingTuning, ModifierAggregator, ModifierBands,
    ProfileStep,
};
pub use profile::{
    AxeProfile, BowProfile, CombatProfile, DaggerProfile, NeutralProfile, ProfileProvider,
    ShieldProfile,
};
pub use types::{ParseRoleError, RoleCategory, WeaponKind};
