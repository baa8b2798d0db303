use crate::constants::{CYBER_PURPLE, NEON_CYAN};
use crate::content::{CORE_PHILOSOPHY, SKILL_CATEGORIES};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_skills(f: &mut Frame<'_>, area: Rect) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Skills ")
        .border_style(Style::default().fg(CYBER_PURPLE));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(40),
            Constraint::Min(4),
        ])
        .split(inner);

    // Two rows of three cards.
    for (row_idx, chunk) in SKILL_CATEGORIES.chunks(3).enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(rows[row_idx]);

        for (category, col) in chunk.iter().zip(cols.iter()) {
            let lines: Vec<Line> = category
                .skills
                .iter()
                .map(|skill| {
                    Line::from(vec![
                        Span::styled("▸ ", Style::default().fg(category.color)),
                        Span::styled(*skill, Style::default().fg(Color::White)),
                    ])
                })
                .collect();
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(Span::styled(
                    format!(" {} ", category.title),
                    Style::default()
                        .fg(category.color)
                        .add_modifier(Modifier::BOLD),
                ))
                .border_style(Style::default().fg(category.color));
            f.render_widget(Paragraph::new(lines).block(block), *col);
        }
    }

    f.render_widget(
        Paragraph::new(CORE_PHILOSOPHY)
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Core Philosophy ")
                    .border_style(Style::default().fg(NEON_CYAN)),
            ),
        rows[2],
    );
}
