//! Help tab view

use crate::app::App;
use crate::ui::section_header;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let handling = &app.tuning.handling;

    let lines = vec![
        section_header("Navigation"),
        key_line("1-3", "Jump to tab (Loadout/Calc/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Select weapon / scroll"),
        key_line("q / Ctrl+C", "Quit"),
        key_line("?", "Toggle help"),
        Line::from(""),
        section_header("Loadout"),
        key_line("Enter / Space", "Toggle the selected weapon in the request"),
        key_line("r", "Apply next role preset"),
        key_line("d", "Register/remove the selected weapon's provider"),
        key_line("b", "Hold block (needs a shield)"),
        Line::from(""),
        section_header("Game Mechanics"),
        Line::from(""),
        heading("Arm Slots:"),
        Line::from("  Axe and bow share the main arm; the axe wins"),
        Line::from("  A shield only fits beside the axe"),
        Line::from("  The dagger is carried on the belt and always kept"),
        Line::from(""),
        heading("Modifiers:"),
        Line::from("  Final = clamp(Bow × Axe × Shield × Dagger, band)"),
        Line::from("  Unequipped weapons and missing providers are neutral (×1.0)"),
        Line::from(""),
        heading("Handling:"),
        Line::from(format!(
            "  Blocking with a shield slows movement to ×{:.2}",
            handling.block_move_multiplier
        )),
        Line::from(format!(
            "  Every hit taken deals at least {:.1} damage",
            handling.min_incoming_damage
        )),
        Line::from("  Without a bow there is no draw and no arrow"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help & Mechanics "));

    f.render_widget(paragraph, area);
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Yellow),
    ))
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:20}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
