use crate::constants::{CYBER_PURPLE, NEON_CYAN};
use crate::content::Project;
use crate::projects::{ProjectFilter, ProjectsView};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

pub fn draw_projects(f: &mut Frame<'_>, area: Rect, view: &ProjectsView) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Projects ")
        .border_style(Style::default().fg(CYBER_PURPLE));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(inner);

    let titles: Vec<Line> = ProjectFilter::ALL
        .iter()
        .map(|filter| Line::from(format!("{} ({})", filter.label(), filter.count())))
        .collect();
    let selected = ProjectFilter::ALL
        .iter()
        .position(|filter| *filter == view.filter)
        .unwrap_or(0);
    f.render_widget(
        Tabs::new(titles)
            .select(selected)
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(NEON_CYAN)
                    .add_modifier(Modifier::BOLD),
            ),
        rows[0],
    );

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);

    let visible = view.visible();
    let items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let style = if i == view.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(project.color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(project.color)
            };
            let marker = if i == view.selected { "➤ " } else { "  " };
            ListItem::new(format!("{}{}", marker, project.title)).style(style)
        })
        .collect();
    f.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        cols[0],
    );

    if let Some(project) = view.selected_project() {
        draw_project_card(f, cols[1], project, view.detail_open);
    }
}

fn draw_project_card(f: &mut Frame<'_>, area: Rect, project: &Project, detail: bool) {
    let label = Style::default().fg(project.color).add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled(project.title, label)),
        Line::default(),
        Line::from(Span::styled(
            if detail {
                project.long_description
            } else {
                project.description
            },
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Tech: ", label),
            Span::styled(project.tech_stack.join(" · "), Style::default().fg(Color::White)),
        ]),
    ];

    if detail {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Key Features", label)));
        for feature in project.features {
            lines.push(Line::from(vec![
                Span::styled("  ✓ ", Style::default().fg(project.color)),
                Span::raw(*feature),
            ]));
        }
    } else {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Enter: view details",
            Style::default().fg(Color::DarkGray),
        )));
    }

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::NONE)),
        Rect {
            x: area.x.saturating_add(1),
            width: area.width.saturating_sub(1),
            ..area
        },
    );
}
