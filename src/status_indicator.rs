use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];
const DOT_FRAMES: [&str; 3] = ["●∙∙", "∙●∙", "∙∙●"];

/// Spinner line used as the assistant's typing indicator and for the contact
/// form's "Sending..." state.
#[derive(Debug)]
pub struct StatusIndicator {
    busy: bool,
    status_text: String,
    spinner_idx: usize,
}

impl StatusIndicator {
    pub fn new() -> Self {
        Self {
            busy: false,
            status_text: String::new(),
            spinner_idx: 0,
        }
    }

    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status_text = status.into();
    }

    pub fn update_spinner(&mut self) {
        self.spinner_idx = self.spinner_idx.wrapping_add(1);
    }

    fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_idx % SPINNER_FRAMES.len()]
    }

    fn dots(&self) -> &'static str {
        DOT_FRAMES[(self.spinner_idx / 2) % DOT_FRAMES.len()]
    }

    /// Draws the spinner line. Nothing is drawn while idle.
    pub fn render(&self, frame: &mut Frame, area: Rect, accent: Color) {
        if !self.busy || area.height == 0 {
            return;
        }
        let line = Line::from(vec![
            Span::styled(self.spinner(), Style::default().fg(Color::Gray)),
            Span::raw(" "),
            Span::styled(self.status_text.as_str(), Style::default().fg(Color::DarkGray)),
            Span::raw(" "),
            Span::styled(self.dots(), Style::default().fg(accent)),
        ]);

        frame.render_widget(
            Paragraph::new(line),
            Rect {
                x: area.x,
                y: area.y,
                width: area.width,
                height: 1,
            },
        );
    }
}

impl Default for StatusIndicator {
    fn default() -> Self {
        Self::new()
    }
}
