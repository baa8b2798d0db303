use crate::assistant::AssistantWidget;
use crate::chat_message::render_message;
use crate::constants::{CYBER_DARK, NEON_CYAN, NEON_PINK};
use crate::status_indicator::StatusIndicator;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

const PROMPT: &str = "→ ";
const PLACEHOLDER: &str = "Ask me anything...";

/// The assistant side panel: history, typing indicator and input line.
pub fn draw_chat(
    f: &mut Frame<'_>,
    area: Rect,
    assistant: &mut AssistantWidget,
    typing: &StatusIndicator,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(
            " 🤖 AI Assistant ",
            Style::default().fg(NEON_CYAN).add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(NEON_CYAN))
        .style(Style::default().bg(CYBER_DARK));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(inner);

    draw_history(f, chunks[0], assistant);
    if typing.is_busy() {
        typing.render(f, chunks[1], NEON_PINK);
    }
    draw_input(f, chunks[2], assistant);
}

fn draw_history(f: &mut Frame<'_>, area: Rect, assistant: &mut AssistantWidget) {
    let mut lines: Vec<Line> = Vec::new();
    for message in assistant.store().messages() {
        lines.extend(render_message(message, area.width));
        lines.push(Line::default());
    }

    let overflow = lines.len().saturating_sub(area.height as usize);
    let max_scroll = u16::try_from(overflow).unwrap_or(u16::MAX);
    let offset = assistant.clamp_scroll(max_scroll);

    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
}

fn draw_input(f: &mut Frame<'_>, area: Rect, assistant: &AssistantWidget) {
    let border = if assistant.is_thinking() {
        Color::DarkGray
    } else {
        NEON_CYAN
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);

    let input = assistant.input();
    let text = if input.is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(input, Style::default().fg(Color::White))
    };

    // Keep the tail of long input visible.
    let typed_width = u16::try_from(PROMPT.width() + input.width()).unwrap_or(u16::MAX);
    let h_scroll = typed_width.saturating_sub(inner.width.saturating_sub(1));

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(PROMPT, Style::default().fg(NEON_CYAN)),
            text,
        ]))
        .block(block)
        .scroll((0, h_scroll)),
        area,
    );

    if inner.width > 0 && inner.height > 0 {
        let offset = (typed_width - h_scroll).min(inner.width - 1);
        f.set_cursor_position((inner.x.saturating_add(offset), inner.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::ResponseResolver;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_follow_tail_is_clamped_to_history() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut assistant = AssistantWidget::new(
            Arc::new(ResponseResolver::default()),
            Duration::from_millis(10),
            Default::default(),
            tx,
        );
        for _ in 0..6 {
            assistant.deliver("a reply long enough to wrap over a couple of lines".into());
        }
        assert_eq!(assistant.scroll, u16::MAX);

        let typing = StatusIndicator::new();
        let mut terminal = Terminal::new(TestBackend::new(40, 16)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                draw_chat(f, area, &mut assistant, &typing)
            })
            .unwrap();

        let pinned = assistant.scroll;
        assert!(pinned > 0 && pinned < u16::MAX);
        assistant.scroll_up();
        assert_eq!(assistant.scroll, pinned - 1);
    }

    #[tokio::test]
    async fn test_very_long_input_keeps_cursor_in_panel() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut assistant = AssistantWidget::new(
            Arc::new(ResponseResolver::default()),
            Duration::from_millis(10),
            Default::default(),
            tx,
        );
        assistant.set_input("x".repeat(65_500));

        let typing = StatusIndicator::new();
        let panel = Rect::new(72, 0, 48, 30);
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|f| draw_chat(f, panel, &mut assistant, &typing))
            .unwrap();

        let cursor = terminal.get_cursor_position().unwrap();
        assert!(cursor.x > panel.x && cursor.x < panel.right() - 1);
        assert!(cursor.y > panel.y && cursor.y < panel.bottom() - 1);
    }
}
