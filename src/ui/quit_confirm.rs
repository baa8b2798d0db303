use crate::constants::{AMBER, CYBER_DARK};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_quit_confirm(f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Confirm Quit ")
        .border_style(Style::default().fg(AMBER))
        .style(Style::default().bg(CYBER_DARK));

    let key = Style::default().fg(AMBER).add_modifier(Modifier::BOLD);
    let text = vec![
        Line::default(),
        Line::from(Span::styled(
            "Leave the portfolio?",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("y", key),
            Span::raw(" to quit or "),
            Span::styled("n", key),
            Span::raw(" to stay."),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
