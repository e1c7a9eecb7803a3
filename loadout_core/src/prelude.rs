//! Prelude module for convenient imports
//!
//! ```rust
//! use loadout_core::prelude::*;
//! ```

// Core types
pub use crate::loadout::{Loadout, LoadoutRequest};
pub use crate::types::{RoleCategory, WeaponKind};

// Aggregation
pub use crate::modifiers::{aggregate, AggregatedModifiers, Handling, ModifierAggregator};

// Providers
pub use crate::profile::{CombatProfile, ProfileProvider};

// Config
pub use crate::config::{default_tuning, WeaponTuning};
