//! Breakdown tab - shows how each multiplier is composed

use crate::app::App;
use crate::ui::{clamped_line, section_header};
use loadout_core::ProfileStep;
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
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_steps(f, app, chunks[0]);
    draw_totals(f, app, chunks[1]);
}

fn draw_steps(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = vec![];

    for step in &app.breakdown.steps {
        lines.extend(step_breakdown(step));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Profiles In Multiplication Order "),
        )
        .scroll((u16::try_from(app.breakdown_scroll).unwrap_or(u16::MAX), 0));

    f.render_widget(paragraph, area);
}

fn draw_totals(f: &mut Frame, app: &App, area: Rect) {
    let breakdown = &app.breakdown;
    let bands = app.aggregator.bands();
    let raw = breakdown.raw.multipliers();
    let clamped = breakdown.clamped.multipliers();
    let named_bands = bands.named();

    let mut lines = vec![
        section_header("Final Multipliers"),
        Line::from(""),
    ];
    for i in 0..raw.len() {
        lines.push(clamped_line(raw[i].0, raw[i].1, clamped[i].1, named_bands[i].1));
    }

    lines.extend([
        Line::from(""),
        section_header("Composition"),
        Line::from(""),
        Line::from(Span::styled(
            "Final = clamp(Bow × Axe × Shield × Dagger, band)",
            Style::default().fg(Color::Yellow),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Each factor starts at 1.0; unequipped weapons stay neutral",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "  A missing provider contributes the neutral profile",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "  NaN, infinite or zero factors are read as 1.0",
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            "  Only the bow decides whether arrows can be shot",
            Style::default().fg(Color::White),
        )),
    ]);

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Totals & Reference "),
    );

    f.render_widget(paragraph, area);
}

fn step_breakdown(step: &ProfileStep) -> Vec<Line<'static>> {
    let mut lines = vec![];

    let status = if !step.provided {
        Span::styled("missing, neutral", Style::default().fg(Color::Red))
    } else if step.profile.active {
        Span::styled("equipped", Style::default().fg(Color::Green))
    } else {
        Span::styled("not equipped", Style::default().fg(Color::DarkGray))
    };

    lines.push(Line::from(vec![
        Span::styled(
            format!("{:10}", step.weapon.name()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        status,
    ]));

    // Only the factors this weapon changes
    let running = step.running.multipliers();
    for (i, (name, factor)) in step.profile.factors().iter().enumerate() {
        if *factor == 1.0 {
            continue;
        }
        lines.push(Line::from(vec![
            Span::styled(format!("  {:16}", name), Style::default().fg(Color::Gray)),
            Span::styled(format!("×{:.4}", factor), Style::default().fg(Color::Magenta)),
            Span::styled(
                format!("  → {:.4}", running[i].1),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    if step.profile.can_shoot {
        lines.push(Line::from(Span::styled(
            "  grants shooting",
            Style::default().fg(Color::Cyan),
        )));
    }

    lines
}
