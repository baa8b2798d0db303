use crate::constants::{AMBER, CYBER_PURPLE, EMERALD, NEON_CYAN, NEON_PINK};
use crate::contact::{ContactField, ContactForm, ContactNotice};
use crate::content::{CONTACT_EMAIL, CONTACT_STATS, SOCIAL_LINKS};
use crate::status_indicator::StatusIndicator;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const FIELDS: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

/// Contact details on the left, the form on the right. `owns_cursor` is false
/// when another panel holds the terminal cursor.
pub fn draw_contact(
    f: &mut Frame<'_>,
    area: Rect,
    form: &ContactForm,
    sending: &StatusIndicator,
    owns_cursor: bool,
) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Contact ")
        .border_style(Style::default().fg(CYBER_PURPLE));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(inner);

    draw_details(f, cols[0]);
    draw_form(f, cols[1], form, sending, owns_cursor);
}

fn draw_details(f: &mut Frame<'_>, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Let's build something intelligent together.",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("✉ ", Style::default().fg(NEON_CYAN)),
            Span::styled(CONTACT_EMAIL, Style::default().fg(NEON_CYAN)),
        ]),
    ];
    for link in SOCIAL_LINKS.iter() {
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", link.label), Style::default().fg(link.color)),
            Span::styled(link.url, Style::default().fg(Color::DarkGray)),
        ]));
    }
    lines.push(Line::default());
    for stat in CONTACT_STATS.iter() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<20}", stat.label),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                stat.value,
                Style::default().fg(AMBER).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn draw_form(
    f: &mut Frame<'_>,
    area: Rect,
    form: &ContactForm,
    sending: &StatusIndicator,
    owns_cursor: bool,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    for (field, row) in FIELDS.iter().zip(rows.iter()) {
        let focused = form.editing && form.focus == *field;
        let border = if focused { NEON_CYAN } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", field.label()))
            .border_style(Style::default().fg(border));
        let inner = block.inner(*row);

        let value = form.value(*field);
        let text = if value.is_empty() {
            Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(value, Style::default().fg(Color::White))
        };
        f.render_widget(
            Paragraph::new(Line::from(text))
                .block(block)
                .wrap(Wrap { trim: false }),
            *row,
        );

        if focused && owns_cursor && inner.width > 0 && inner.height > 0 {
            let width = u16::try_from(value.width()).unwrap_or(u16::MAX);
            let x = inner.x + width % inner.width;
            let y = inner.y + (width / inner.width).min(inner.height - 1);
            f.set_cursor_position((x, y));
        }
    }

    if sending.is_busy() {
        sending.render(f, rows[3], NEON_CYAN);
        return;
    }
    let status = match &form.notice {
        Some(ContactNotice::Sent) => Span::styled(
            "✓ Message sent! I'll get back to you soon.",
            Style::default().fg(EMERALD),
        ),
        Some(ContactNotice::Invalid(reason)) => {
            Span::styled(format!("✗ {}", reason), Style::default().fg(NEON_PINK))
        }
        None if form.editing => Span::styled(
            "Enter to send",
            Style::default().fg(Color::DarkGray),
        ),
        None => Span::styled(
            "Press Enter or i to start typing",
            Style::default().fg(Color::DarkGray),
        ),
    };
    f.render_widget(Paragraph::new(Line::from(status)), rows[3]);
}
