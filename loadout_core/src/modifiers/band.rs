//! ClampBand - Safety ranges for aggregated multipliers

use serde::{Deserialize, Serialize};

/// Closed range a multiplier is clamped into
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClampBand {
    pub min: f64,
    pub max: f64,
}

impl ClampBand {
    pub const fn new(min: f64, max: f64) -> Self {
        ClampBand { min, max }
    }

    /// Clamp a value into the band
    ///
    /// Uses `max`/`min` rather than `f64::clamp` so a misconfigured band
    /// cannot panic; NaN resolves to the lower bound.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Check the band is usable: finite, positive, ordered
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min > 0.0 && self.min <= self.max
    }
}

/// One band per aggregated multiplier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModifierBands {
    #[serde(default = "default_move_speed")]
    pub move_speed: ClampBand,
    #[serde(default = "default_incoming_damage")]
    pub incoming_damage: ClampBand,
    #[serde(default = "default_outgoing_damage")]
    pub outgoing_damage: ClampBand,
    #[serde(default = "default_draw_power")]
    pub draw_power: ClampBand,
    #[serde(default = "default_arrow_speed")]
    pub arrow_speed: ClampBand,
}

impl Default for ModifierBands {
    fn default() -> Self {
        ModifierBands {
            move_speed: default_move_speed(),
            incoming_damage: default_incoming_damage(),
            outgoing_damage: default_outgoing_damage(),
            draw_power: default_draw_power(),
            arrow_speed: default_arrow_speed(),
        }
    }
}

impl ModifierBands {
    /// Bands paired with their config names, for validation and display
    pub fn named(&self) -> [(&'static str, ClampBand); 5] {
        [
            ("move_speed", self.move_speed),
            ("incoming_damage", self.incoming_damage),
            ("outgoing_damage", self.outgoing_damage),
            ("draw_power", self.draw_power),
            ("arrow_speed", self.arrow_speed),
        ]
    }
}

fn default_move_speed() -> ClampBand {
    ClampBand::new(0.65, 1.25)
}
fn default_incoming_damage() -> ClampBand {
    ClampBand::new(0.45, 1.0)
}
fn default_outgoing_damage() -> ClampBand {
    ClampBand::new(0.85, 1.35)
}
fn default_draw_power() -> ClampBand {
    ClampBand::new(0.85, 1.35)
}
fn default_arrow_speed() -> ClampBand {
    ClampBand::new(0.85, 1.25)
}
