// src/ui.rs

mod about;
mod chat;
mod contact_form;
mod footer;
mod header;
mod home;
mod main_menu;
mod project_list;
mod quit_confirm;
mod skills;

use crate::app::{App, AppEvent, AppScreen, Section};
use crate::config::{get_config, Config};
use crate::constants::{CYBER_DARK, FALLBACK_LOCATION};
use crate::errors::PortfolioResult;
use crate::geolocation::{spawn_lookup, LocationService};
use crate::key_handlers::handle_key;
use crossterm::{
    event::{self, Event as CEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info, warn};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Clear},
    Frame, Terminal,
};
use std::{
    io,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Runs the terminal UI until the user quits.
pub async fn run_ui() -> PortfolioResult<()> {
    let config = get_config();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, rx) = mpsc::unbounded_channel::<AppEvent>();
    spawn_input_reader(tx.clone(), config.tick_rate());

    let mut app = App::new(&config, tx.clone());
    let lookup = start_location_lookup(&config, &mut app, tx);
    info!("portfolio started");

    let res = run_app(&mut terminal, &mut app, rx).await;

    app.shutdown();
    if let Some(handle) = lookup {
        handle.abort();
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("ui loop failed: {}", err);
    }
    res
}

fn start_location_lookup(
    config: &Config,
    app: &mut App,
    events: UnboundedSender<AppEvent>,
) -> Option<JoinHandle<()>> {
    match LocationService::new(
        config.geocode_url.clone(),
        config.geocode_timeout(),
        config.location_cache_ttl(),
    ) {
        Ok(service) => Some(spawn_lookup(
            Arc::new(service),
            config.coordinates(),
            events,
        )),
        Err(e) => {
            warn!("location lookup disabled: {}", e);
            app.location = FALLBACK_LOCATION.to_string();
            None
        }
    }
}

/// Polls crossterm on a blocking thread and forwards key presses and ticks.
/// Stops once the event loop drops its receiver.
fn spawn_input_reader(tx: UnboundedSender<AppEvent>, tick_rate: Duration) {
    tokio::task::spawn_blocking(move || {
        let mut last_tick = Instant::now();
        while !tx.is_closed() {
            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            match event::poll(timeout) {
                Ok(true) => {
                    if let Ok(event) = event::read() {
                        if tx.send(AppEvent::Input(event)).is_err() {
                            return;
                        }
                    }
                }
                Ok(false) => {}
                Err(e) => {
                    warn!("terminal poll failed: {}", e);
                    return;
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.send(AppEvent::Tick).is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });
}

/// Main loop of the application.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut rx: UnboundedReceiver<AppEvent>,
) -> PortfolioResult<()> {
    loop {
        terminal.draw(|f| draw(f, app))?;

        match rx.recv().await {
            Some(AppEvent::Input(CEvent::Key(key))) => {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, app);
                }
            }
            Some(AppEvent::Input(_)) => {}
            Some(AppEvent::Tick) => app.on_tick(),
            Some(event) => app.on_background_event(event),
            None => break,
        }

        if app.screen == AppScreen::Quit {
            break;
        }
    }
    Ok(())
}

pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    if app.screen == AppScreen::Intro {
        app.intro.draw(f, area);
        return;
    }

    f.render_widget(Block::default().style(Style::default().bg(CYBER_DARK)), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    header::draw_header(f, rows[0], app);

    let body = if app.assistant.is_open() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);
        chat::draw_chat(f, cols[1], &mut app.assistant, &app.typing_indicator);
        cols[0]
    } else {
        rows[1]
    };

    match app.section {
        Section::Home => home::draw_home(f, body, app),
        Section::About => about::draw_about(f, body, app),
        Section::Skills => skills::draw_skills(f, body),
        Section::Projects => project_list::draw_projects(f, body, &app.projects),
        Section::Contact => contact_form::draw_contact(
            f,
            body,
            &app.contact,
            &app.contact_status,
            !app.assistant.is_open(),
        ),
    }

    footer::draw_footer(f, rows[2], app);

    if app.menu_open {
        let popup = centered_rect(50, 70, area);
        f.render_widget(Clear, popup);
        main_menu::draw_main_menu(f, popup, app);
    }

    if app.screen == AppScreen::QuitConfirm {
        let popup = centered_rect(40, 25, area);
        f.render_widget(Clear, popup);
        quit_confirm::draw_quit_confirm(f, popup);
    }
}

/// A rect of the given percentage size centred in `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn app() -> (App, UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let config = Config {
            intro_enabled: false,
            ..Config::default()
        };
        (App::new(&config, tx), rx)
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(50, 50, area);
        assert_eq!(popup.width, 50);
        assert_eq!(popup.height, 20);
        assert_eq!(popup.x, 25);
        assert_eq!(popup.y, 10);
    }

    #[tokio::test]
    async fn test_every_section_renders() {
        let (mut app, _rx) = app();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        for section in Section::ALL {
            app.goto(section);
            terminal.draw(|f| draw(f, &mut app)).unwrap();
            assert!(screen_text(&terminal).contains(section.title()));
        }
    }

    #[tokio::test]
    async fn test_chat_panel_and_overlays_render() {
        let (mut app, _rx) = app();
        app.assistant.toggle();
        app.menu_open = true;
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        let text = screen_text(&terminal);
        assert!(text.contains("AI Assistant"));
        assert!(text.contains("NAVIGATION"));

        app.menu_open = false;
        app.screen = AppScreen::QuitConfirm;
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        assert!(screen_text(&terminal).contains("Quit"));
    }

    #[tokio::test]
    async fn test_tiny_terminal_does_not_panic() {
        let (mut app, _rx) = app();
        app.assistant.toggle();
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        for section in Section::ALL {
            app.goto(section);
            terminal.draw(|f| draw(f, &mut app)).unwrap();
        }
    }
}
