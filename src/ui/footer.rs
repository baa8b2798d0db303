use crate::app::{App, AppScreen, Section};
use crate::constants::NEON_CYAN;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Paragraph, Wrap},
    Frame,
};

fn instructions(app: &App) -> &'static str {
    if app.screen == AppScreen::QuitConfirm {
        return "Press 'y' to confirm quit or 'n' to cancel.";
    }
    if app.assistant.is_open() {
        return "Type a question, Enter to send. PgUp/PgDn scroll, Esc or Ctrl+A to close.";
    }
    if app.menu_open {
        return "Up/Down to choose a section, Enter to jump, Esc to close.";
    }
    match app.section {
        Section::Home => "g/l/h open socials · Tab or 1-5 switch section · a ask AI · m menu · q quit",
        Section::Projects if app.projects.detail_open => "Enter/Esc close details · Up/Down select · f filter",
        Section::Projects => "Up/Down select · Enter details · f filter · Tab next section · q quit",
        Section::Contact if app.contact.editing => {
            "Tab/Up/Down move between fields · Enter sends · Esc stop editing"
        }
        Section::Contact => "Enter or i to fill in the form · Tab next section · q quit",
        Section::About | Section::Skills => {
            "Tab/Shift+Tab or 1-5 switch section · a ask AI · m menu · q quit"
        }
    }
}

/// Draws the footer with hints for the current focus.
pub fn draw_footer(f: &mut Frame<'_>, area: Rect, app: &App) {
    let footer = Paragraph::new(instructions(app))
        .style(Style::default().fg(NEON_CYAN))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(footer, area);
}
