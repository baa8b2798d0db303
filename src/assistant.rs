// src/assistant.rs

//! The assistant chat panel: input buffer, conversation history and the
//! delayed, scripted reply.

use crate::app::AppEvent;
use crate::conversation::ConversationStore;
use crate::resolver::{ResponseResolver, GREETING};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Duration, Instant};

/// Longest question the input line accepts from the keyboard.
pub const MAX_INPUT_CHARS: usize = 2000;

/// What happens when the user submits while a reply is still pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComposingPolicy {
    /// Refuse the submission and keep the typed text.
    #[default]
    Block,
    /// Accept it; replies are delivered one by one in submission order.
    ///
    /// The store's composing flag clears on every delivered reply, so with
    /// several replies queued it drops early. `AssistantWidget::is_thinking`
    /// stays set until the last one lands and is what the typing indicator
    /// follows.
    Queue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Empty,
    Busy,
    Sent { message_id: u64 },
}

#[derive(Debug)]
struct ScheduledReply {
    due: Instant,
    text: String,
}

/// Background worker that posts replies to the event loop once they are due.
///
/// Dropping the scheduler aborts the worker, so nothing is delivered after the
/// owning widget goes away.
#[derive(Debug)]
pub struct ReplyScheduler {
    queue: UnboundedSender<ScheduledReply>,
    worker: JoinHandle<()>,
}

impl ReplyScheduler {
    pub fn spawn(events: UnboundedSender<AppEvent>) -> Self {
        let (queue, mut receiver) = mpsc::unbounded_channel::<ScheduledReply>();
        let worker = tokio::spawn(async move {
            while let Some(reply) = receiver.recv().await {
                sleep_until(reply.due).await;
                if events.send(AppEvent::AssistantReply(reply.text)).is_err() {
                    break;
                }
            }
        });
        Self { queue, worker }
    }

    fn schedule(&self, text: String, delay: Duration) -> bool {
        self.queue
            .send(ScheduledReply {
                due: Instant::now() + delay,
                text,
            })
            .is_ok()
    }

    pub fn cancel(&self) {
        self.worker.abort();
    }
}

impl Drop for ReplyScheduler {
    fn drop(&mut self) {
        self.worker.abort();
    }
}

#[derive(Debug)]
pub struct AssistantWidget {
    store: ConversationStore,
    resolver: Arc<ResponseResolver>,
    scheduler: ReplyScheduler,
    input: String,
    open: bool,
    reply_delay: Duration,
    policy: ComposingPolicy,
    pending: usize,
    pub scroll: u16,
}

impl AssistantWidget {
    /// Must be called from within a tokio runtime.
    pub fn new(
        resolver: Arc<ResponseResolver>,
        reply_delay: Duration,
        policy: ComposingPolicy,
        events: UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            store: ConversationStore::new(GREETING),
            resolver,
            scheduler: ReplyScheduler::spawn(events),
            input: String::new(),
            open: false,
            reply_delay,
            policy,
            pending: 0,
            scroll: 0,
        }
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// True while at least one reply is waiting on its delay. This is the
    /// source for the typing indicator under both policies.
    pub fn is_thinking(&self) -> bool {
        self.pending > 0
    }

    pub fn push_char(&mut self, c: char) {
        if self.input.chars().count() >= MAX_INPUT_CHARS {
            return;
        }
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    /// Pins the offset to what the rendered history allows.
    pub fn clamp_scroll(&mut self, max: u16) -> u16 {
        self.scroll = self.scroll.min(max);
        self.scroll
    }

    /// Sends the current input. The reply is chosen now and delivered through
    /// the event loop after the thinking delay.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.input.trim().is_empty() {
            return SubmitOutcome::Empty;
        }
        if self.policy == ComposingPolicy::Block && self.is_thinking() {
            debug!("assistant busy, submission held back");
            return SubmitOutcome::Busy;
        }

        let text = std::mem::take(&mut self.input);
        let reply = self.resolver.resolve(&text).to_string();
        let Some(message_id) = self.store.append_user(text) else {
            return SubmitOutcome::Empty;
        };

        if self.scheduler.schedule(reply, self.reply_delay) {
            self.pending += 1;
        } else {
            warn!("reply worker is gone; message {} will not be answered", message_id);
        }
        // Jump back to the newest message.
        self.scroll = u16::MAX;
        debug!("user message {} queued, {} pending", message_id, self.pending);
        SubmitOutcome::Sent { message_id }
    }

    /// Appends a reply handed back by the scheduler.
    pub fn deliver(&mut self, reply: String) -> u64 {
        self.pending = self.pending.saturating_sub(1);
        let id = self.store.append_assistant_reply(reply);
        self.scroll = u16::MAX;
        id
    }

    /// Drops every pending reply. Used when the session ends.
    pub fn cancel_pending(&mut self) {
        self.scheduler.cancel();
        self.pending = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::Sender;
    use crate::resolver::FALLBACK_REPLY;
    use tokio::sync::mpsc::UnboundedReceiver;

    const DELAY: Duration = Duration::from_millis(1500);

    fn widget(policy: ComposingPolicy) -> (AssistantWidget, UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let widget = AssistantWidget::new(Arc::new(ResponseResolver::default()), DELAY, policy, tx);
        (widget, rx)
    }

    async fn next_reply(rx: &mut UnboundedReceiver<AppEvent>) -> String {
        match rx.recv().await {
            Some(AppEvent::AssistantReply(text)) => text,
            other => panic!("expected assistant reply, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_then_delay_appends_user_and_assistant() {
        let (mut w, mut rx) = widget(ComposingPolicy::Block);
        w.set_input("hello");
        let start = Instant::now();

        assert_eq!(w.submit(), SubmitOutcome::Sent { message_id: 2 });
        assert_eq!(w.store().len(), 2);
        assert!(w.store().is_composing());
        assert!(w.input().is_empty());

        let reply = next_reply(&mut rx).await;
        assert!(start.elapsed() >= DELAY);
        w.deliver(reply);

        assert_eq!(w.store().len(), 3);
        assert!(!w.store().is_composing());
        assert!(!w.is_thinking());
        let senders: Vec<Sender> = w.store().messages().iter().map(|m| m.sender()).collect();
        assert_eq!(senders, vec![Sender::Assistant, Sender::User, Sender::Assistant]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_not_delivered_before_delay() {
        let (mut w, mut rx) = widget(ComposingPolicy::Block);
        w.set_input("xyz123");
        w.submit();
        let early = tokio::time::timeout(Duration::from_millis(1400), rx.recv()).await;
        assert!(early.is_err());
        assert_eq!(next_reply(&mut rx).await, FALLBACK_REPLY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_submission_is_a_no_op() {
        let (mut w, _rx) = widget(ComposingPolicy::Block);
        w.set_input("   ");
        assert_eq!(w.submit(), SubmitOutcome::Empty);
        assert_eq!(w.store().len(), 1);
        assert!(!w.is_thinking());
    }

    #[tokio::test(start_paused = true)]
    async fn test_block_policy_keeps_input_while_thinking() {
        let (mut w, _rx) = widget(ComposingPolicy::Block);
        w.set_input("first");
        w.submit();
        w.set_input("second");
        assert_eq!(w.submit(), SubmitOutcome::Busy);
        assert_eq!(w.input(), "second");
        assert_eq!(w.store().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_queue_policy_delivers_in_submission_order() {
        let (mut w, mut rx) = widget(ComposingPolicy::Queue);
        w.set_input("skills");
        w.submit();
        w.set_input("xyz");
        assert!(matches!(w.submit(), SubmitOutcome::Sent { .. }));
        assert_eq!(w.store().len(), 3);

        let first = next_reply(&mut rx).await;
        assert!(first.contains("specializes"));
        w.deliver(first);
        // One reply still queued: the store says done, the widget does not.
        assert!(!w.store().is_composing());
        assert!(w.is_thinking());

        let second = next_reply(&mut rx).await;
        assert_eq!(second, FALLBACK_REPLY);
        w.deliver(second);
        assert!(!w.is_thinking());
        assert_eq!(w.store().len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_widget_cancels_pending_reply() {
        let (mut w, mut rx) = widget(ComposingPolicy::Block);
        w.set_input("hello");
        w.submit();
        drop(w);
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_pending_clears_thinking() {
        let (mut w, mut rx) = widget(ComposingPolicy::Block);
        w.set_input("hello");
        w.submit();
        w.cancel_pending();
        assert!(!w.is_thinking());
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_toggle_and_editing() {
        let (mut w, _rx) = widget(ComposingPolicy::Block);
        assert!(!w.is_open());
        w.toggle();
        assert!(w.is_open());
        w.push_char('h');
        w.push_char('i');
        w.backspace();
        assert_eq!(w.input(), "h");
        w.close();
        assert!(!w.is_open());
    }

    #[tokio::test]
    async fn test_typed_input_is_capped() {
        let (mut w, _rx) = widget(ComposingPolicy::Block);
        for _ in 0..MAX_INPUT_CHARS + 5 {
            w.push_char('é');
        }
        assert_eq!(w.input().chars().count(), MAX_INPUT_CHARS);
        w.backspace();
        w.push_char('!');
        assert!(w.input().ends_with('!'));
    }
}
