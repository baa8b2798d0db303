use crate::app::{App, AppScreen, Section};
use crate::assistant::SubmitOutcome;
use crate::content::social_link_for_key;
use crate::intro::IntroAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, warn};

/// Routes a key press to the handler for the current screen and focus.
pub fn handle_key(key: KeyEvent, app: &mut App) {
    match app.screen {
        AppScreen::Intro => {
            if let Some(action) = app.intro.handle_input(key) {
                match action {
                    IntroAction::Quit => app.shutdown(),
                    IntroAction::Skip => app.finish_intro(),
                }
            }
        }
        AppScreen::QuitConfirm => handle_quit_confirm_input(key, app),
        AppScreen::Portfolio => handle_portfolio_input(key, app),
        AppScreen::Quit => {}
    }
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

fn handle_portfolio_input(key: KeyEvent, app: &mut App) {
    if is_ctrl(&key, 'c') {
        app.screen = AppScreen::QuitConfirm;
        return;
    }
    if is_ctrl(&key, 'a') {
        app.assistant.toggle();
        return;
    }

    if app.assistant.is_open() {
        handle_chat_input(key, app);
    } else if app.menu_open {
        handle_menu_input(key, app);
    } else if app.section == Section::Contact && app.contact.editing {
        handle_contact_input(key, app);
    } else {
        handle_navigation_input(key, app);
    }
}

pub fn handle_chat_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.assistant.close(),
        KeyCode::Enter => {
            // Modified Enter is reserved; only a bare Enter sends.
            if !key.modifiers.is_empty() {
                return;
            }
            match app.assistant.submit() {
                SubmitOutcome::Sent { message_id } => {
                    app.typing_indicator.set_busy(true);
                    app.logs.add(format!("Question #{} sent", message_id));
                }
                SubmitOutcome::Busy => debug!("assistant still typing; input kept"),
                SubmitOutcome::Empty => {}
            }
        }
        KeyCode::PageUp | KeyCode::Up => app.assistant.scroll_up(),
        KeyCode::PageDown | KeyCode::Down => app.assistant.scroll_down(),
        KeyCode::Backspace => app.assistant.backspace(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'u' => app.assistant.scroll_up(),
                    'd' => app.assistant.scroll_down(),
                    _ => {}
                }
            } else {
                app.assistant.push_char(c);
            }
        }
        _ => {}
    }
}

fn handle_menu_input(key: KeyEvent, app: &mut App) {
    let len = Section::ALL.len();
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            app.menu_selected = (app.menu_selected + 1) % len;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.menu_selected = (app.menu_selected + len - 1) % len;
        }
        KeyCode::Enter => {
            if let Some(section) = Section::from_index(app.menu_selected) {
                app.goto(section);
            }
            app.menu_open = false;
        }
        KeyCode::Esc | KeyCode::Char('m') => app.menu_open = false,
        _ => {}
    }
}

fn handle_contact_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.contact.editing = false,
        KeyCode::Tab | KeyCode::Down => app.contact.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.contact.focus_prev(),
        KeyCode::Enter => match app.contact.submit() {
                Ok(true) => {
                    app.contact_status.set_busy(true);
                    app.logs.add("Sending contact message...");
                }
                Ok(false) => {}
                Err(e) if e.is_user_facing() => {
                    app.logs.add(format!("Contact form rejected: {}", e))
                }
                Err(e) => warn!("contact submit failed: {}", e),
            },
        KeyCode::Backspace => app.contact.backspace(),
        KeyCode::Char(c) => app.contact.push_char(c),
        _ => {}
    }
}

fn handle_navigation_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('q') => app.screen = AppScreen::QuitConfirm,
        KeyCode::Char('a') => app.assistant.toggle(),
        KeyCode::Char('m') => {
            app.menu_selected = app.section.index();
            app.menu_open = true;
        }
        KeyCode::Tab | KeyCode::Right => app.goto(app.section.next()),
        KeyCode::BackTab | KeyCode::Left => app.goto(app.section.prev()),
        KeyCode::Char(c @ '1'..='5') => {
            let idx = c as usize - '1' as usize;
            if let Some(section) = Section::from_index(idx) {
                app.goto(section);
            }
        }
        _ => handle_section_input(key, app),
    }
}

fn handle_section_input(key: KeyEvent, app: &mut App) {
    match (app.section, key.code) {
        (Section::Home, KeyCode::Char(c)) => {
            if let Some(link) = social_link_for_key(c) {
                match open::that(link.url) {
                    Ok(()) => app.logs.add(format!("Opened {}", link.label)),
                    Err(e) => warn!("could not open {}: {}", link.url, e),
                }
            }
        }
        (Section::Projects, KeyCode::Down | KeyCode::Char('j')) => app.projects.select_next(),
        (Section::Projects, KeyCode::Up | KeyCode::Char('k')) => app.projects.select_prev(),
        (Section::Projects, KeyCode::Char('f')) => app.projects.cycle_filter(),
        (Section::Projects, KeyCode::Enter) => app.projects.toggle_detail(),
        (Section::Projects, KeyCode::Esc) => app.projects.detail_open = false,
        (Section::Contact, KeyCode::Enter | KeyCode::Char('i')) => app.contact.editing = true,
        _ => {}
    }
}

pub fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => app.shutdown(),
        KeyCode::Char('n') | KeyCode::Esc => app.screen = AppScreen::Portfolio,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppEvent;
    use crate::config::Config;
    use crate::contact::{ContactField, ContactNotice};
    use tokio::sync::mpsc;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> (App, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let config = Config {
            intro_enabled: false,
            ..Config::default()
        };
        (App::new(&config, tx), rx)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            handle_key(press(KeyCode::Char(c)), app);
        }
    }

    #[tokio::test]
    async fn test_intro_skips_on_any_key() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(&Config::default(), tx);
        assert_eq!(app.screen, AppScreen::Intro);
        handle_key(press(KeyCode::Char(' ')), &mut app);
        assert_eq!(app.screen, AppScreen::Portfolio);
    }

    #[tokio::test]
    async fn test_enter_sends_and_shift_enter_does_not() {
        let (mut app, _rx) = app();
        handle_key(press(KeyCode::Char('a')), &mut app);
        assert!(app.assistant.is_open());

        type_text(&mut app, "hello");
        handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT), &mut app);
        assert_eq!(app.assistant.store().len(), 1);
        assert_eq!(app.assistant.input(), "hello");

        handle_key(press(KeyCode::Enter), &mut app);
        assert_eq!(app.assistant.store().len(), 2);
        assert!(app.assistant.input().is_empty());
    }

    #[tokio::test]
    async fn test_ctrl_enter_does_not_send() {
        let (mut app, _rx) = app();
        app.assistant.toggle();
        type_text(&mut app, "skills");
        handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::CONTROL), &mut app);
        handle_key(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::CONTROL | KeyModifiers::SHIFT),
            &mut app,
        );
        assert_eq!(app.assistant.store().len(), 1);
        assert_eq!(app.assistant.input(), "skills");
        assert!(!app.typing_indicator.is_busy());
    }

    #[tokio::test]
    async fn test_blank_enter_is_ignored() {
        let (mut app, _rx) = app();
        app.assistant.toggle();
        type_text(&mut app, "   ");
        handle_key(press(KeyCode::Enter), &mut app);
        assert_eq!(app.assistant.store().len(), 1);
    }

    #[tokio::test]
    async fn test_navigation_keys() {
        let (mut app, _rx) = app();
        handle_key(press(KeyCode::Char('4')), &mut app);
        assert_eq!(app.section, Section::Projects);
        handle_key(press(KeyCode::Tab), &mut app);
        assert_eq!(app.section, Section::Contact);
        handle_key(press(KeyCode::Left), &mut app);
        assert_eq!(app.section, Section::Projects);

        handle_key(press(KeyCode::Char('f')), &mut app);
        assert_eq!(app.projects.filter, crate::projects::ProjectFilter::Ai);

        handle_key(press(KeyCode::Char('m')), &mut app);
        assert!(app.menu_open);
        handle_key(press(KeyCode::Down), &mut app);
        handle_key(press(KeyCode::Enter), &mut app);
        assert!(!app.menu_open);
        assert_eq!(app.section, Section::Contact);
    }

    #[tokio::test]
    async fn test_contact_editing_captures_letters() {
        let (mut app, _rx) = app();
        app.goto(Section::Contact);
        handle_key(press(KeyCode::Char('i')), &mut app);
        assert!(app.contact.editing);
        type_text(&mut app, "q1");
        assert_eq!(app.contact.name, "q1");
        assert_eq!(app.screen, AppScreen::Portfolio);
        handle_key(press(KeyCode::Tab), &mut app);
        assert_eq!(app.contact.focus, ContactField::Email);

        // Enter from any field submits; an incomplete form is rejected inline.
        handle_key(press(KeyCode::Enter), &mut app);
        assert!(matches!(app.contact.notice, Some(ContactNotice::Invalid(_))));
        assert!(!app.contact.is_submitting());

        handle_key(press(KeyCode::Esc), &mut app);
        assert!(!app.contact.editing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_contact_enter_submits_complete_form() {
        let (mut app, mut rx) = app();
        app.goto(Section::Contact);
        handle_key(press(KeyCode::Enter), &mut app);
        type_text(&mut app, "Ada");
        handle_key(press(KeyCode::Down), &mut app);
        type_text(&mut app, "ada@example.com");
        handle_key(press(KeyCode::Down), &mut app);
        type_text(&mut app, "Hello there");
        handle_key(press(KeyCode::Enter), &mut app);
        assert!(app.contact.is_submitting());

        match rx.recv().await {
            Some(event @ AppEvent::ContactSubmitted(_)) => app.on_background_event(event),
            other => panic!("expected contact submission, got {:?}", other),
        }
        assert_eq!(app.contact.notice, Some(ContactNotice::Sent));
        assert!(app.contact.name.is_empty());
    }

    #[tokio::test]
    async fn test_quit_flow() {
        let (mut app, _rx) = app();
        handle_key(press(KeyCode::Char('q')), &mut app);
        assert_eq!(app.screen, AppScreen::QuitConfirm);
        handle_key(press(KeyCode::Char('n')), &mut app);
        assert_eq!(app.screen, AppScreen::Portfolio);
        handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &mut app);
        assert_eq!(app.screen, AppScreen::QuitConfirm);
        handle_key(press(KeyCode::Char('y')), &mut app);
        assert_eq!(app.screen, AppScreen::Quit);
    }
}
