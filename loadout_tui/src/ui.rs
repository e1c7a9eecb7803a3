//! UI rendering

mod breakdown_view;
mod help_view;
mod loadout_view;

use crate::app::{App, Tab};
use loadout_core::ClampBand;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Loadout => loadout_view::draw(f, app, chunks[1]),
        Tab::Breakdown => breakdown_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("Tab", "Next tab"), ("q", "Quit")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Loadout => vec![
            ("↑/↓", "Select weapon"),
            ("Space", "Toggle flag"),
            ("r", "Role preset"),
            ("d", "Toggle provider"),
            ("b", "Block"),
        ],
        Tab::Breakdown => vec![("↑/↓", "Scroll")],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    // Add tab-specific keys first
    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Loadout Inspector "),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

pub fn section_header(name: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", name),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

/// Colour for a multiplier: green above neutral, red below
pub fn multiplier_color(value: f64) -> Color {
    if value > 1.0 {
        Color::Green
    } else if value < 1.0 {
        Color::Red
    } else {
        Color::White
    }
}

pub fn multiplier_line(name: &str, value: f64) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:18}", name), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("×{:.4}", value),
            Style::default().fg(multiplier_color(value)),
        ),
    ])
}

/// Multiplier with its raw product and band, highlighting clamped values
pub fn clamped_line(name: &str, raw: f64, clamped: f64, band: ClampBand) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("{:18}", name), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("×{:.4}", clamped),
            Style::default().fg(multiplier_color(clamped)),
        ),
        Span::styled(
            format!("  [{:.2}, {:.2}]", band.min, band.max),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if raw != clamped {
        spans.push(Span::styled(
            format!("  clamped from ×{:.4}", raw),
            Style::default().fg(Color::Magenta),
        ));
    }
    Line::from(spans)
}

pub fn flag_span(on: bool) -> Span<'static> {
    if on {
        Span::styled("[x]", Style::default().fg(Color::Green))
    } else {
        Span::styled("[ ]", Style::default().fg(Color::DarkGray))
    }
}
