use crate::assistant::AssistantWidget;
use crate::config::Config;
use crate::contact::{ContactForm, ContactSubmission};
use crate::content::HERO_TITLES;
use crate::intro::IntroScreen;
use crate::log_view::LogView;
use crate::projects::ProjectsView;
use crate::resolver::ResponseResolver;
use crate::status_indicator::StatusIndicator;
use crate::typewriter::Typewriter;
use crate::constants::FALLBACK_LOCATION;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::UnboundedSender;

/// Everything the event loop reacts to.
#[derive(Debug)]
pub enum AppEvent {
    Input(crossterm::event::Event),
    Tick,
    AssistantReply(String),
    LocationResolved(String),
    ContactSubmitted(ContactSubmission),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Intro,
    Portfolio,
    QuitConfirm,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub struct App {
    pub screen: AppScreen,
    pub intro: IntroScreen,
    pub section: Section,
    pub menu_open: bool,
    pub menu_selected: usize,
    pub assistant: AssistantWidget,
    pub typing_indicator: StatusIndicator,
    pub typewriter: Typewriter,
    pub location: String,
    pub projects: ProjectsView,
    pub contact: ContactForm,
    pub contact_status: StatusIndicator,
    pub logs: LogView,
    pub last_tick: Instant,
}

impl App {
    /// Must be called from within a tokio runtime.
    pub fn new(config: &Config, events: UnboundedSender<AppEvent>) -> App {
        let resolver = Arc::new(ResponseResolver::from_rules(
            config.keyword_rules.as_deref(),
        ));

        let mut typing_indicator = StatusIndicator::new();
        typing_indicator.set_status("Assistant is typing");
        let mut contact_status = StatusIndicator::new();
        contact_status.set_status("Sending...");

        App {
            screen: if config.intro_enabled {
                AppScreen::Intro
            } else {
                AppScreen::Portfolio
            },
            intro: IntroScreen::new(),
            section: Section::Home,
            menu_open: false,
            menu_selected: 0,
            assistant: AssistantWidget::new(
                resolver,
                config.reply_delay(),
                config.composing_policy,
                events.clone(),
            ),
            typing_indicator,
            typewriter: Typewriter::new(&HERO_TITLES),
            location: "Loading...".to_string(),
            projects: ProjectsView::new(),
            contact: ContactForm::new(config.contact_submit_delay(), events),
            contact_status,
            logs: LogView::new(),
            last_tick: Instant::now(),
        }
    }

    pub fn goto(&mut self, section: Section) {
        if self.section != section {
            self.section = section;
            self.contact.editing = false;
            self.logs.add(format!("Navigated to {}", section.title()));
        }
    }

    pub fn finish_intro(&mut self) {
        if self.screen == AppScreen::Intro {
            self.screen = AppScreen::Portfolio;
            self.logs.add("Intro complete");
        }
    }

    /// Advances animations and time-driven state.
    pub fn on_tick(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick);
        self.last_tick = now;

        if self.screen == AppScreen::Intro && self.intro.is_done() {
            self.finish_intro();
        }

        self.typewriter.advance(dt);

        self.typing_indicator.set_busy(self.assistant.is_thinking());
        if self.typing_indicator.is_busy() {
            self.typing_indicator.update_spinner();
        }
        self.contact_status.set_busy(self.contact.is_submitting());
        if self.contact_status.is_busy() {
            self.contact_status.update_spinner();
        }
    }

    /// Applies an event produced by a background task.
    pub fn on_background_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AssistantReply(reply) => {
                let id = self.assistant.deliver(reply);
                self.typing_indicator
                    .set_busy(self.assistant.is_thinking());
                self.logs.add(format!("Assistant replied (#{})", id));
            }
            AppEvent::LocationResolved(label) => {
                self.logs.add(format!("Location: {}", label));
                self.location = label;
            }
            AppEvent::ContactSubmitted(submission) => {
                self.contact.complete(&submission);
                self.contact_status.set_busy(false);
                self.logs.add("Contact message sent");
            }
            AppEvent::Input(_) | AppEvent::Tick => {}
        }
    }

    pub fn location_or_fallback(&self) -> &str {
        if self.location.is_empty() {
            FALLBACK_LOCATION
        } else {
            &self.location
        }
    }

    /// Stops background work tied to this session.
    pub fn shutdown(&mut self) {
        self.assistant.cancel_pending();
        self.screen = AppScreen::Quit;
    }
}
