use crate::app::{App, Section};
use crate::constants::{CYBER_DARK, CYBER_PURPLE, NEON_CYAN};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

const ICONS: [&str; 5] = ["🏠", "👤", "🛠", "🚀", "✉"];

/// Navigation overlay with the activity feed underneath.
pub fn draw_main_menu(f: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" NAVIGATION ")
        .border_style(Style::default().fg(NEON_CYAN))
        .style(Style::default().bg(CYBER_DARK));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(Section::ALL.len() as u16),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    let items: Vec<ListItem> = Section::ALL
        .iter()
        .zip(ICONS)
        .enumerate()
        .map(|(i, (section, icon))| {
            let label = format!("{} {}  {}", icon, section.title(), i + 1);
            if i == app.menu_selected {
                ListItem::new(format!("➤ {}", label)).style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(NEON_CYAN)
                        .add_modifier(Modifier::BOLD),
                )
            } else if *section == app.section {
                ListItem::new(format!("  {}", label)).style(Style::default().fg(NEON_CYAN))
            } else {
                ListItem::new(format!("  {}", label)).style(Style::default().fg(Color::White))
            }
        })
        .collect();

    f.render_widget(List::new(items), chunks[0]);

    let status = Block::default()
        .borders(Borders::TOP)
        .title(" SYSTEM STATUS ")
        .border_style(Style::default().fg(CYBER_PURPLE));
    let log_area = status.inner(chunks[2]);
    f.render_widget(status, chunks[2]);
    app.logs.render(f, log_area);
}
