use crate::app::App;
use crate::constants::{CYBER_PURPLE, GOLD, NEON_CYAN, NEON_PINK};
use crate::content::{greeting_for_hour, EXPERIENCE_SUMMARY, OWNER_NAME, SOCIAL_LINKS, TAGLINE};
use crate::typewriter::Phase;
use chrono::{Local, Timelike};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Hero screen.
pub fn draw_home(f: &mut Frame<'_>, area: Rect, app: &App) {
    let now = Local::now();

    let cursor = match app.typewriter.phase() {
        Phase::Holding if now.timestamp_subsec_millis() >= 500 => " ",
        _ => "▌",
    };

    let mut socials = vec![Span::raw("  ")];
    for link in SOCIAL_LINKS.iter() {
        socials.push(Span::styled(
            format!("[{}]", link.key),
            Style::default().fg(Color::DarkGray),
        ));
        socials.push(Span::styled(
            format!(" {}   ", link.label),
            Style::default().fg(link.color).add_modifier(Modifier::BOLD),
        ));
    }

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("{}, I'm", greeting_for_hour(now.hour())),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            OWNER_NAME,
            Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                app.typewriter.visible(),
                Style::default().fg(NEON_PINK).add_modifier(Modifier::BOLD),
            ),
            Span::styled(cursor, Style::default().fg(NEON_PINK)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            TAGLINE,
            Style::default().fg(CYBER_PURPLE).add_modifier(Modifier::ITALIC),
        )),
        Line::from(Span::styled(EXPERIENCE_SUMMARY, Style::default().fg(GOLD))),
        Line::default(),
        Line::from(socials),
        Line::default(),
        Line::from(Span::styled(
            format!("🕒 {}", now.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Home ")
        .border_style(Style::default().fg(CYBER_PURPLE));

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}
