//! Weapon tuning configuration

use super::ConfigError;
use crate::modifiers::{HandlingTuning, ModifierBands};
use crate::types::WeaponKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Multipliers a weapon applies while equipped
///
/// Any factor left out of a config section is neutral (1.0).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileFactors {
    #[serde(default = "neutral")]
    pub move_speed: f64,
    #[serde(default = "neutral")]
    pub outgoing_damage: f64,
    #[serde(default = "neutral")]
    pub incoming_damage: f64,
    #[serde(default = "neutral")]
    pub draw_power: f64,
    #[serde(default = "neutral")]
    pub arrow_speed: f64,
}

impl Default for ProfileFactors {
    fn default() -> Self {
        ProfileFactors {
            move_speed: 1.0,
            outgoing_damage: 1.0,
            incoming_damage: 1.0,
            draw_power: 1.0,
            arrow_speed: 1.0,
        }
    }
}

impl ProfileFactors {
    /// Live tuning for each weapon
    pub fn canonical(weapon: WeaponKind) -> Self {
        match weapon {
            WeaponKind::Bow => ProfileFactors::default(),
            WeaponKind::Axe => ProfileFactors {
                outgoing_damage: 1.08,
                ..ProfileFactors::default()
            },
            WeaponKind::Shield => ProfileFactors {
                move_speed: 0.93,
                ..ProfileFactors::default()
            },
            WeaponKind::Dagger => ProfileFactors {
                move_speed: 1.12,
                outgoing_damage: 1.04,
                draw_power: 1.15,
                ..ProfileFactors::default()
            },
        }
    }

    fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("move_speed", self.move_speed),
            ("outgoing_damage", self.outgoing_damage),
            ("incoming_damage", self.incoming_damage),
            ("draw_power", self.draw_power),
            ("arrow_speed", self.arrow_speed),
        ]
    }
}

fn neutral() -> f64 {
    1.0
}

/// Complete tuning for the loadout system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponTuning {
    #[serde(default = "default_bow")]
    pub bow: ProfileFactors,
    #[serde(default = "default_axe")]
    pub axe: ProfileFactors,
    #[serde(default = "default_shield")]
    pub shield: ProfileFactors,
    #[serde(default = "default_dagger")]
    pub dagger: ProfileFactors,
    #[serde(default)]
    pub bands: ModifierBands,
    #[serde(default)]
    pub handling: HandlingTuning,
}

impl Default for WeaponTuning {
    fn default() -> Self {
        WeaponTuning {
            bow: default_bow(),
            axe: default_axe(),
            shield: default_shield(),
            dagger: default_dagger(),
            bands: ModifierBands::default(),
            handling: HandlingTuning::default(),
        }
    }
}

fn default_bow() -> ProfileFactors {
    ProfileFactors::canonical(WeaponKind::Bow)
}
fn default_axe() -> ProfileFactors {
    ProfileFactors::canonical(WeaponKind::Axe)
}
fn default_shield() -> ProfileFactors {
    ProfileFactors::canonical(WeaponKind::Shield)
}
fn default_dagger() -> ProfileFactors {
    ProfileFactors::canonical(WeaponKind::Dagger)
}

impl WeaponTuning {
    /// Factors for one weapon
    pub fn factors(&self, weapon: WeaponKind) -> ProfileFactors {
        match weapon {
            WeaponKind::Bow => self.bow,
            WeaponKind::Axe => self.axe,
            WeaponKind::Shield => self.shield,
            WeaponKind::Dagger => self.dagger,
        }
    }

    /// Reject factors and bands that would break aggregation
    pub fn validate(&self) -> Result<(), ConfigError> {
        for weapon in WeaponKind::all() {
            for (name, value) in self.factors(*weapon).named() {
                if !value.is_finite() || value <= 0.0 {
                    return Err(ConfigError::ValidationError(format!(
                        "{}.{} must be a positive finite number, got {}",
                        section_name(*weapon),
                        name,
                        value
                    )));
                }
            }
        }

        for (name, band) in self.bands.named() {
            if !band.is_valid() {
                return Err(ConfigError::ValidationError(format!(
                    "bands.{} must satisfy 0 < min <= max, got [{}, {}]",
                    name, band.min, band.max
                )));
            }
        }

        let handling = &self.handling;
        if !handling.block_move_multiplier.is_finite() || handling.block_move_multiplier <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "handling.block_move_multiplier must be a positive finite number, got {}",
                handling.block_move_multiplier
            )));
        }
        if !handling.min_incoming_damage.is_finite() || handling.min_incoming_damage < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "handling.min_incoming_damage must be a non-negative finite number, got {}",
                handling.min_incoming_damage
            )));
        }

        Ok(())
    }
}

fn section_name(weapon: WeaponKind) -> &'static str {
    match weapon {
        WeaponKind::Bow => "bow",
        WeaponKind::Axe => "axe",
        WeaponKind::Shield => "shield",
        WeaponKind::Dagger => "dagger",
    }
}

/// Load weapon tuning from a file; `.json` files are read as JSON, anything else as TOML
pub fn load_weapon_tuning(path: &Path) -> Result<WeaponTuning, ConfigError> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let tuning: WeaponTuning = if is_json {
        let content = fs::read_to_string(path)?;
        super::parse_json(&content)?
    } else {
        super::load_toml(path)?
    };
    tuning.validate()?;
    log::debug!("loaded weapon tuning from {}", path.display());
    Ok(tuning)
}

/// Load weapon tuning from a TOML string
pub fn parse_weapon_tuning(content: &str) -> Result<WeaponTuning, ConfigError> {
    let tuning: WeaponTuning = super::parse_toml(content)?;
    tuning.validate()?;
    Ok(tuning)
}

/// Get the bundled weapon tuning
pub fn default_tuning() -> WeaponTuning {
    let toml = include_str!("../../config/weapons.toml");
    parse_weapon_tuning(toml).unwrap_or_else(|err| {
        log::warn!("bundled weapon tuning rejected ({}), using compiled-in defaults", err);
        WeaponTuning::default()
    })
}
