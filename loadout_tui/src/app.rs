//! Application state

use loadout_core::{
    config::load_weapon_tuning, AggregationBreakdown, AggregatorBuilder, ConfigError, Handling,
    Loadout, ModifierAggregator, RoleCategory, WeaponKind, WeaponTuning,
};
use std::path::Path;
use thiserror::Error;

/// Base values used for the handling preview
pub const PREVIEW_MOVE_SPEED: f64 = 380.0;
pub const PREVIEW_ARROW_SPEED: f64 = 900.0;
pub const PREVIEW_HIT_DAMAGE: f64 = 20.0;
pub const PREVIEW_DRAW: f64 = 1.0;

/// Startup error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to load weapon tuning: {0}")]
    Tuning(#[from] ConfigError),
    #[error("Terminal error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Loadout,
    Breakdown,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Loadout, Tab::Breakdown, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Loadout => "Loadout",
            Tab::Breakdown => "Calc",
            Tab::Help => "Help",
        }
    }
}

pub struct App {
    pub current_tab: Tab,
    pub tuning: WeaponTuning,
    pub tuning_source: String,
    /// Loadout as requested, before normalization
    pub requested: Loadout,
    /// Last role preset applied, if the flags still match it
    pub role: Option<RoleCategory>,
    /// Weapons whose provider slot is switched off
    pub disabled: Vec<WeaponKind>,
    pub aggregator: ModifierAggregator,
    pub breakdown: AggregationBreakdown,
    pub handling: Handling,
    pub selected_weapon: usize,
    pub block_requested: bool,
    pub breakdown_scroll: usize,
    pub show_help: bool,
    pub status: String,
}

impl App {
    pub fn new(tuning: WeaponTuning, tuning_source: impl Into<String>) -> Self {
        let requested = RoleCategory::Archer.loadout();
        let aggregator = ModifierAggregator::from_tuning(&tuning);
        let breakdown = aggregator.breakdown(&requested);
        let handling = aggregator.handling(&requested);

        App {
            current_tab: Tab::Loadout,
            tuning,
            tuning_source: tuning_source.into(),
            requested,
            role: Some(RoleCategory::Archer),
            disabled: Vec::new(),
            aggregator,
            breakdown,
            handling,
            selected_weapon: 0,
            block_requested: false,
            breakdown_scroll: 0,
            show_help: false,
            status: "Ready".to_string(),
        }
    }

    /// Start with tuning from a file, or the bundled tuning when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        match path {
            Some(path) => {
                let tuning = load_weapon_tuning(path)?;
                log::info!("using weapon tuning from {}", path.display());
                Ok(App::new(tuning, path.display().to_string()))
            }
            None => Ok(App::new(loadout_core::default_tuning(), "bundled")),
        }
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let next_idx = (current_idx + 1) % tabs.len();
        self.current_tab = tabs[next_idx];
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        let prev_idx = if current_idx == 0 {
            tabs.len() - 1
        } else {
            current_idx - 1
        };
        self.current_tab = tabs[prev_idx];
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.current_tab = tabs[index];
        }
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Loadout => {
                if self.selected_weapon > 0 {
                    self.selected_weapon -= 1;
                }
            }
            Tab::Breakdown => {
                if self.breakdown_scroll > 0 {
                    self.breakdown_scroll -= 1;
                }
            }
            Tab::Help => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Loadout => {
                if self.selected_weapon < WeaponKind::all().len() - 1 {
                    self.selected_weapon += 1;
                }
            }
            Tab::Breakdown => {
                if self.breakdown_scroll < self.max_breakdown_scroll() {
                    self.breakdown_scroll += 1;
                }
            }
            Tab::Help => {}
        }
    }

    /// Lines in the step list of the breakdown tab
    pub fn breakdown_line_count(&self) -> usize {
        self.breakdown
            .steps
            .iter()
            .map(|step| {
                let changed = step
                    .profile
                    .factors()
                    .iter()
                    .filter(|(_, factor)| *factor != 1.0)
                    .count();
                // Header, changed factors, shooting note, blank separator
                1 + changed + usize::from(step.profile.can_shoot) + 1
            })
            .sum()
    }

    /// Furthest the step list can scroll while keeping its last line visible
    pub fn max_breakdown_scroll(&self) -> usize {
        self.breakdown_line_count().saturating_sub(1)
    }

    pub fn selected_weapon(&self) -> WeaponKind {
        WeaponKind::all()[self.selected_weapon.min(WeaponKind::all().len() - 1)]
    }

    /// Flip the requested flag of the selected weapon
    pub fn toggle_selected_flag(&mut self) {
        let weapon = self.selected_weapon();
        let flag = match weapon {
            WeaponKind::Bow => &mut self.requested.arrows,
            WeaponKind::Axe => &mut self.requested.longsword,
            WeaponKind::Shield => &mut self.requested.shield,
            WeaponKind::Dagger => &mut self.requested.mini_sword,
        };
        *flag = !*flag;
        let equipped = *flag;
        self.status = format!(
            "{} {}",
            weapon,
            if equipped { "requested" } else { "removed" }
        );
        self.recompute();
    }

    /// Apply the next role preset
    pub fn cycle_role(&mut self) {
        let roles = RoleCategory::all();
        let next = match self.role {
            Some(role) => {
                let idx = roles.iter().position(|r| *r == role).unwrap_or(0);
                roles[(idx + 1) % roles.len()]
            }
            None => roles[0],
        };
        self.requested = next.loadout();
        self.role = Some(next);
        self.status = format!("Applied role preset {}", next);
        self.recompute();
    }

    /// Switch the selected weapon's provider slot on or off
    pub fn toggle_selected_provider(&mut self) {
        let weapon = self.selected_weapon();
        if let Some(idx) = self.disabled.iter().position(|w| *w == weapon) {
            self.disabled.remove(idx);
            self.status = format!("{} provider registered", weapon);
        } else {
            self.disabled.push(weapon);
            self.status = format!("{} provider removed, using neutral profile", weapon);
            log::debug!("{} provider disabled", weapon);
        }
        self.rebuild_aggregator();
    }

    pub fn toggle_block(&mut self) {
        self.block_requested = !self.block_requested;
    }

    pub fn is_provider_enabled(&self, weapon: WeaponKind) -> bool {
        !self.disabled.contains(&weapon)
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        if self.show_help {
            self.current_tab = Tab::Help;
        }
    }

    fn rebuild_aggregator(&mut self) {
        let mut builder = AggregatorBuilder::from_tuning(&self.tuning);
        for weapon in &self.disabled {
            builder = builder.unregister(*weapon);
        }
        self.aggregator = builder.build();
        self.recompute();
    }

    fn recompute(&mut self) {
        if let Some(role) = self.role {
            if role.loadout() != self.requested {
                self.role = None;
            }
        }
        self.breakdown = self.aggregator.breakdown(&self.requested);
        self.handling = self.aggregator.handling(&self.requested);
        self.breakdown_scroll = self.breakdown_scroll.min(self.max_breakdown_scroll());
    }
}

impl Default for App {
    fn default() -> Self {
        App::new(loadout_core::default_tuning(), "bundled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_as_archer() {
        let app = App::default();
        assert_eq!(app.requested, Loadout::archer());
        assert!(app.breakdown.clamped.can_shoot_arrows);
    }

    #[test]
    fn test_toggle_axe_flag() {
        let mut app = App::default();
        app.selected_weapon = 1;
        app.toggle_selected_flag();
        assert!(app.requested.longsword);
        // Requested both primaries; the axe wins
        assert!(!app.breakdown.normalized.arrows);
        assert_eq!(app.breakdown.clamped.outgoing_damage_multiplier, 1.08);
        assert_eq!(app.role, None);
    }

    #[test]
    fn test_cycle_role() {
        let mut app = App::default();
        app.cycle_role();
        assert_eq!(app.role, Some(RoleCategory::Longswordsman));
        app.cycle_role();
        assert_eq!(app.role, Some(RoleCategory::ShieldSword));
        assert_eq!(app.breakdown.clamped.move_speed_multiplier, 0.93);
        app.cycle_role();
        assert_eq!(app.role, Some(RoleCategory::Archer));
    }

    #[test]
    fn test_disable_provider() {
        let mut app = App::default();
        app.cycle_role();
        app.selected_weapon = 1;
        app.toggle_selected_provider();
        assert!(!app.is_provider_enabled(WeaponKind::Axe));
        assert_eq!(app.breakdown.clamped.outgoing_damage_multiplier, 1.0);

        app.toggle_selected_provider();
        assert_eq!(app.breakdown.clamped.outgoing_damage_multiplier, 1.08);
    }

    #[test]
    fn test_breakdown_scroll_is_bounded() {
        let mut app = App::default();
        app.set_tab(1);
        for _ in 0..1000 {
            app.on_down();
        }
        // Archer: four headers and separators plus the shooting note
        assert_eq!(app.breakdown_line_count(), 9);
        assert_eq!(app.breakdown_scroll, app.max_breakdown_scroll());

        // Fewer lines after a change pulls the scroll back in range
        app.breakdown_scroll = 100;
        app.toggle_block();
        app.cycle_role();
        assert!(app.breakdown_scroll <= app.max_breakdown_scroll());
    }

    #[test]
    fn test_tab_navigation() {
        let mut app = App::default();
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Breakdown);
        app.prev_tab();
        app.prev_tab();
        assert_eq!(app.current_tab, Tab::Help);
        app.set_tab(0);
        assert_eq!(app.current_tab, Tab::Loadout);
    }
}
