use crate::constants::{CYBER_BLUE, CYBER_PURPLE};
use crate::conversation::{Message, Sender};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

/// Renders one message as a bubble: header, wrapped body, footer.
/// Assistant bubbles hug the left edge, user bubbles are indented.
pub fn render_message(message: &Message, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let style = base_style(message.sender());
    let indent = indent_for(message.sender());

    render_header(&mut lines, message, style, indent);
    render_content(&mut lines, message.text(), width, style, indent);
    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("╰─".to_string(), style),
    ]));

    lines
}

fn base_style(sender: Sender) -> Style {
    Style::default().fg(match sender {
        Sender::Assistant => CYBER_BLUE,
        Sender::User => CYBER_PURPLE,
    })
}

fn indent_for(sender: Sender) -> &'static str {
    match sender {
        Sender::Assistant => "",
        Sender::User => "    ",
    }
}

fn render_header(lines: &mut Vec<Line<'static>>, message: &Message, style: Style, indent: &str) {
    let timestamp = message.timestamp().format("%H:%M").to_string();
    let who = match message.sender() {
        Sender::Assistant => "🤖 Assistant",
        Sender::User => "👤 You",
    };

    lines.push(Line::from(vec![
        Span::styled(indent.to_string(), style),
        Span::styled("┌─ ".to_string(), style),
        Span::styled(who.to_string(), style.add_modifier(Modifier::BOLD)),
        Span::styled(" ".to_string(), style),
        Span::styled(timestamp, Style::default().fg(Color::DarkGray)),
    ]));
}

fn render_content(
    lines: &mut Vec<Line<'static>>,
    text: &str,
    width: u16,
    style: Style,
    indent: &str,
) {
    let wrap_width = (width as usize)
        .saturating_sub(indent.len() + 2)
        .max(8);
    let body = Style::default().fg(Color::White);

    for wrapped_line in wrap(text, wrap_width) {
        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled("│ ".to_string(), style),
            Span::styled(wrapped_line.into_owned(), body),
        ]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::ConversationStore;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_long_message_wraps_inside_bubble() {
        let store = ConversationStore::new("word ".repeat(30));
        let lines = render_message(&store.messages()[0], 40);
        // header + at least 4 wrapped lines + footer
        assert!(lines.len() >= 6);
        assert!(text_of(&lines[0]).contains("Assistant"));
        assert!(text_of(lines.last().unwrap()).contains("╰─"));
        for body in &lines[1..lines.len() - 1] {
            assert!(text_of(body).starts_with("│ "));
        }
    }

    #[test]
    fn test_user_bubbles_are_indented() {
        let mut store = ConversationStore::new("hi");
        store.append_user("hello");
        let lines = render_message(store.last().unwrap(), 40);
        assert!(text_of(&lines[1]).starts_with("    │ hello"));
    }
}
