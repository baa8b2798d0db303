use crate::app::App;
use crate::constants::{AMBER, CYBER_BLUE, CYBER_PURPLE, EMERALD, NEON_CYAN};
use crate::content::{ABOUT_CARDS, EXPERIENCE_SUMMARY, TIMELINE};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

fn card(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(color))
}

pub fn draw_about(f: &mut Frame<'_>, area: Rect, app: &App) {
    let outer = card("About", CYBER_PURPLE);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(TIMELINE.len() as u16 * 2 + 2),
        ])
        .split(inner);

    let facts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    f.render_widget(
        Paragraph::new(format!("📍 {}", app.location_or_fallback()))
            .style(Style::default().fg(Color::White))
            .block(card("Location", NEON_CYAN)),
        facts[0],
    );
    f.render_widget(
        Paragraph::new(format!("⚡ {}", EXPERIENCE_SUMMARY))
            .style(Style::default().fg(Color::White))
            .block(card("Experience", AMBER)),
        facts[1],
    );

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);
    let colors = [NEON_CYAN, CYBER_BLUE, EMERALD];
    for ((about, col), color) in ABOUT_CARDS.iter().zip(cols.iter()).zip(colors) {
        f.render_widget(
            Paragraph::new(about.body)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true })
                .block(card(about.title, color)),
            *col,
        );
    }

    let mut journey = Vec::new();
    for event in TIMELINE.iter() {
        journey.push(Line::from(vec![
            Span::styled(format!("{} ", event.year), Style::default().fg(AMBER)),
            Span::styled("◆ ", Style::default().fg(NEON_CYAN)),
            Span::styled(
                event.title,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]));
        journey.push(Line::from(Span::styled(
            format!("       {}", event.description),
            Style::default().fg(Color::DarkGray),
        )));
    }
    f.render_widget(
        Paragraph::new(journey).block(card("My Journey", CYBER_PURPLE)),
        rows[2],
    );
}
