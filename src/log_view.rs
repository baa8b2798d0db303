use crate::constants::MAX_LOG_ENTRIES;
use chrono::Local;
use log::info;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Short in-app activity feed shown under the navigation menu.
#[derive(Debug)]
pub struct LogView {
    pub entries: Vec<String>,
}

impl LogView {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        info!("{}", entry);
        self.entries
            .push(format!("{} {}", Local::now().format("%H:%M:%S"), entry));
        if self.entries.len() > MAX_LOG_ENTRIES {
            self.entries.remove(0);
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        let visible = area.height as usize;
        let skip = self.entries.len().saturating_sub(visible);
        let lines: Vec<Line> = self.entries[skip..]
            .iter()
            .map(|entry| {
                Line::from(vec![
                    Span::styled("• ", Style::default().fg(Color::DarkGray)),
                    Span::raw(entry.as_str()),
                ])
            })
            .collect();

        let para = Paragraph::new(lines)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });
        f.render_widget(para, area);
    }
}

impl Default for LogView {
    fn default() -> Self {
        Self::new()
    }
}
