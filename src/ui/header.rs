use crate::app::{App, Section};
use crate::constants::{
    CYBER_PURPLE, HEAVY_DOWN_AND_LEFT, HEAVY_DOWN_AND_RIGHT, HEAVY_HORIZONTAL, HEAVY_UP_AND_LEFT,
    HEAVY_UP_AND_RIGHT, LOGO_TEXT, NEON_CYAN, NEON_PINK,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

fn logo_lines() -> Vec<Line<'static>> {
    let bar: String = std::iter::repeat(HEAVY_HORIZONTAL)
        .take(LOGO_TEXT.chars().count() + 2)
        .collect();
    let frame = Style::default().fg(CYBER_PURPLE);
    vec![
        Line::from(vec![
            Span::styled(format!("{}{}", HEAVY_DOWN_AND_RIGHT, HEAVY_HORIZONTAL), frame),
            Span::styled(
                LOGO_TEXT,
                Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("{}{}", HEAVY_HORIZONTAL, HEAVY_DOWN_AND_LEFT), frame),
        ]),
        Line::from(Span::styled(
            format!("{}{}{}", HEAVY_UP_AND_RIGHT, bar, HEAVY_UP_AND_LEFT),
            frame,
        )),
    ]
}

pub fn draw_header(f: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14),
            Constraint::Min(10),
            Constraint::Length(16),
        ])
        .split(inner);

    f.render_widget(Paragraph::new(logo_lines()), chunks[0]);

    let titles: Vec<Line> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, s)| Line::from(format!("{} {}", i + 1, s.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.section.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(NEON_CYAN)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(Span::styled("│", Style::default().fg(Color::DarkGray)));
    f.render_widget(tabs, chunks[1]);

    let assistant = if app.assistant.is_thinking() {
        Span::styled("● AI typing", Style::default().fg(NEON_PINK))
    } else if app.assistant.is_open() {
        Span::styled("● AI online", Style::default().fg(NEON_CYAN))
    } else {
        Span::styled("○ [a] Ask AI", Style::default().fg(Color::DarkGray))
    };
    f.render_widget(
        Paragraph::new(Line::from(assistant)).alignment(Alignment::Right),
        chunks[2],
    );
}
