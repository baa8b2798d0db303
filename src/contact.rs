// src/contact.rs

//! Contact form with a simulated submission round trip.

use crate::app::AppEvent;
use crate::errors::{PortfolioError, PortfolioResult};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Email Address",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "John Doe",
            ContactField::Email => "your@email.com",
            ContactField::Message => "Tell me about your project...",
        }
    }

    fn next(&self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    fn prev(&self) -> Self {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Message => ContactField::Email,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn validate(&self) -> PortfolioResult<()> {
        if self.name.trim().is_empty() {
            return Err(PortfolioError::validation_error("name is required"));
        }
        if self.email.trim().is_empty() {
            return Err(PortfolioError::validation_error("email is required"));
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(PortfolioError::validation_error(
                "email address looks invalid",
            ));
        }
        if self.message.trim().is_empty() {
            return Err(PortfolioError::validation_error("message is required"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactNotice {
    Sent,
    Invalid(String),
}

#[derive(Debug)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub focus: ContactField,
    pub editing: bool,
    pub notice: Option<ContactNotice>,
    submit_delay: Duration,
    in_flight: Option<JoinHandle<()>>,
    events: UnboundedSender<AppEvent>,
}

impl ContactForm {
    pub fn new(submit_delay: Duration, events: UnboundedSender<AppEvent>) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            focus: ContactField::Name,
            editing: false,
            notice: None,
            submit_delay,
            in_flight: None,
            events,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.is_submitting() {
            return;
        }
        self.notice = None;
        self.focused_mut().push(c);
    }

    pub fn backspace(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.focused_mut().pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    fn snapshot(&self) -> ContactSubmission {
        ContactSubmission {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }

    /// Validates the form and starts the simulated send.
    ///
    /// Returns `Ok(false)` when a submission is already in flight.
    pub fn submit(&mut self) -> PortfolioResult<bool> {
        if self.is_submitting() {
            return Ok(false);
        }
        let submission = self.snapshot();
        if let Err(e) = submission.validate() {
            self.notice = Some(ContactNotice::Invalid(e.to_string()));
            return Err(e);
        }

        self.notice = None;
        self.editing = false;
        let events = self.events.clone();
        let delay = self.submit_delay;
        self.in_flight = Some(tokio::spawn(async move {
            sleep(delay).await;
            let _ = events.send(AppEvent::ContactSubmitted(submission));
        }));
        Ok(true)
    }

    /// Finishes the round trip: records the submission and clears the form.
    pub fn complete(&mut self, submission: &ContactSubmission) {
        info!(
            "contact form submitted by {} <{}> ({} chars)",
            submission.name,
            submission.email,
            submission.message.chars().count()
        );
        self.in_flight = None;
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.focus = ContactField::Name;
        self.notice = Some(ContactNotice::Sent);
    }
}

impl Drop for ContactForm {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use tokio::time::Instant;

    fn filled_form() -> (ContactForm, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut form = ContactForm::new(Duration::from_millis(2000), tx);
        form.name = "Ada".into();
        form.email = "ada@example.com".into();
        form.message = "Let's build something".into();
        (form, rx)
    }

    #[test]
    fn test_validation_rules() {
        let ok = ContactSubmission {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "hi".into(),
        };
        assert!(ok.validate().is_ok());

        let mut bad = ok.clone();
        bad.name = "  ".into();
        assert!(bad.validate().is_err());

        let mut bad = ok.clone();
        bad.email = "ada@localhost".into();
        assert!(bad.validate().unwrap_err().is_user_facing());

        let mut bad = ok;
        bad.message.clear();
        assert!(bad.validate().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_clears_form_after_round_trip() {
        let (mut form, mut rx) = filled_form();
        let start = Instant::now();
        assert!(form.submit().unwrap());
        assert!(form.is_submitting());
        // A second submit while in flight is ignored.
        assert!(!form.submit().unwrap());

        let submission = match rx.recv().await {
            Some(AppEvent::ContactSubmitted(s)) => s,
            other => panic!("unexpected event {:?}", other),
        };
        assert!(start.elapsed() >= Duration::from_millis(2000));
        assert_eq!(submission.name, "Ada");

        form.complete(&submission);
        assert!(!form.is_submitting());
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
        assert_eq!(form.notice, Some(ContactNotice::Sent));
    }

    #[tokio::test]
    async fn test_invalid_submit_sets_notice() {
        let (mut form, _rx) = filled_form();
        form.email = "nope".into();
        assert!(form.submit().is_err());
        assert!(matches!(form.notice, Some(ContactNotice::Invalid(_))));
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_typing_goes_to_focused_field() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut form = ContactForm::new(Duration::from_millis(10), tx);
        form.push_char('A');
        form.focus_next();
        form.push_char('b');
        form.focus_prev();
        form.backspace();
        assert_eq!(form.value(ContactField::Name), "");
        assert_eq!(form.value(ContactField::Email), "b");
    }
}
