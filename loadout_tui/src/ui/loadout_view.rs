//! Loadout tab view - interactive loadout editing

use crate::app::{App, PREVIEW_ARROW_SPEED, PREVIEW_DRAW, PREVIEW_HIT_DAMAGE, PREVIEW_MOVE_SPEED};
use crate::ui::{flag_span, multiplier_line, section_header};
use loadout_core::WeaponKind;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    draw_weapons(f, app, chunks[0]);
    draw_result(f, app, chunks[1]);
}

fn draw_weapons(f: &mut Frame, app: &App, area: Rect) {
    let requested = &app.requested;
    let normalized = &app.breakdown.normalized;
    let mut lines: Vec<Line> = vec![];

    let role = match app.role {
        Some(role) => role.to_string(),
        None => "custom".to_string(),
    };
    lines.push(Line::from(vec![
        Span::styled("  Role: ", Style::default().fg(Color::Gray)),
        Span::styled(role, Style::default().fg(Color::Cyan)),
        Span::styled(
            format!("  (resolves to {})", requested.role_category()),
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Weapon      Req  Eq   Provider",
        Style::default().fg(Color::DarkGray),
    )));

    for (i, weapon) in WeaponKind::all().iter().enumerate() {
        let is_selected = i == app.selected_weapon;
        let (prefix, style) = if is_selected {
            ("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        } else {
            ("  ", Style::default().fg(Color::White))
        };

        let provider = if app.is_provider_enabled(*weapon) {
            Span::styled("registered", Style::default().fg(Color::Green))
        } else {
            Span::styled("neutral", Style::default().fg(Color::Red))
        };

        lines.push(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(format!("{:10}", weapon.name()), style),
            flag_span(weapon.is_equipped(requested)),
            Span::raw("  "),
            flag_span(weapon.is_equipped(normalized)),
            Span::raw("  "),
            provider,
        ]));
    }

    lines.push(Line::from(""));
    if requested != normalized {
        lines.push(Line::from(Span::styled(
            "  Arm-slot rules changed the request",
            Style::default().fg(Color::Magenta),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("  {}", app.status),
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Weapons "),
    );

    f.render_widget(paragraph, area);
}

fn draw_result(f: &mut Frame, app: &App, area: Rect) {
    let mods = &app.breakdown.clamped;
    let handling = &app.handling;
    let mut lines: Vec<Line> = vec![];

    lines.push(section_header("Modifiers"));
    for (name, value) in mods.multipliers() {
        lines.push(multiplier_line(name, value));
    }
    lines.push(Line::from(vec![
        Span::styled(format!("{:18}", "can_shoot_arrows"), Style::default().fg(Color::Gray)),
        Span::styled(
            mods.can_shoot_arrows.to_string(),
            Style::default().fg(if mods.can_shoot_arrows { Color::Green } else { Color::Red }),
        ),
    ]));
    lines.push(Line::from(""));

    lines.push(section_header("Handling Preview"));
    let blocking = handling.is_blocking(app.block_requested);
    lines.push(preview_line(
        if blocking { "Move (blocking)" } else { "Move" },
        PREVIEW_MOVE_SPEED,
        handling.movement_speed(PREVIEW_MOVE_SPEED, app.block_requested),
    ));
    lines.push(preview_line(
        "Hit taken",
        PREVIEW_HIT_DAMAGE,
        handling.incoming_damage(PREVIEW_HIT_DAMAGE),
    ));
    lines.push(preview_line(
        "Hit dealt",
        PREVIEW_HIT_DAMAGE,
        handling.outgoing_damage(PREVIEW_HIT_DAMAGE),
    ));
    lines.push(preview_line(
        "Full draw",
        PREVIEW_DRAW,
        handling.draw_power(PREVIEW_DRAW),
    ));
    lines.push(preview_line(
        "Arrow speed",
        PREVIEW_ARROW_SPEED,
        handling.arrow_launch_speed(PREVIEW_ARROW_SPEED),
    ));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  Tuning: {}", app.tuning_source),
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Result "));

    f.render_widget(paragraph, area);
}

fn preview_line(name: &str, base: f64, value: f64) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:18}", name), Style::default().fg(Color::Gray)),
        Span::styled(format!("{:.2}", value), Style::default().fg(Color::White)),
        Span::styled(
            format!(" (base: {:.2})", base),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}
