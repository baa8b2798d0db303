// src/conversation.rs

use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// One conversational turn. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    id: u64,
    text: String,
    sender: Sender,
    timestamp: DateTime<Local>,
}

impl Message {
    fn new(id: u64, text: String, sender: Sender) -> Self {
        Self {
            id,
            text,
            sender,
            timestamp: Local::now(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Append-only message history plus the "assistant is composing" flag.
///
/// Ids start at 1 with the seeded greeting and increase by one per append.
#[derive(Debug)]
pub struct ConversationStore {
    messages: Vec<Message>,
    composing: bool,
    next_id: u64,
}

impl ConversationStore {
    /// Creates the store and seeds the greeting as message 1.
    pub fn new(greeting: impl Into<String>) -> Self {
        let mut store = Self {
            messages: Vec::new(),
            composing: false,
            next_id: 1,
        };
        store.seed(greeting.into());
        store
    }

    fn seed(&mut self, greeting: String) {
        self.push(greeting, Sender::Assistant);
    }

    fn push(&mut self, text: String, sender: Sender) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(Message::new(id, text, sender));
        id
    }

    /// Appends a user message and marks the store composing.
    ///
    /// Blank input is ignored and returns `None`. The composing flag does not
    /// gate this call; callers decide whether to submit while a reply is pending.
    pub fn append_user(&mut self, text: impl Into<String>) -> Option<u64> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }
        let id = self.push(text, Sender::User);
        self.composing = true;
        Some(id)
    }

    /// Appends an assistant message and clears the composing flag.
    pub fn append_assistant_reply(&mut self, text: impl Into<String>) -> u64 {
        let id = self.push(text.into(), Sender::Assistant);
        self.composing = false;
        id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_with_single_assistant_greeting() {
        let store = ConversationStore::new("hello there");
        assert_eq!(store.len(), 1);
        let first = &store.messages()[0];
        assert_eq!(first.id(), 1);
        assert_eq!(first.sender(), Sender::Assistant);
        assert_eq!(first.text(), "hello there");
        assert!(!store.is_composing());
    }

    #[test]
    fn test_blank_user_input_is_ignored() {
        let mut store = ConversationStore::new("greeting");
        assert_eq!(store.append_user(""), None);
        assert_eq!(store.append_user("   "), None);
        assert_eq!(store.append_user("\t\n"), None);
        assert_eq!(store.len(), 1);
        assert!(!store.is_composing());
    }

    #[test]
    fn test_user_then_assistant_cycles_composing_flag() {
        let mut store = ConversationStore::new("greeting");
        let user_id = store.append_user("hello").unwrap();
        assert_eq!(user_id, 2);
        assert!(store.is_composing());

        let reply_id = store.append_assistant_reply("hi!");
        assert_eq!(reply_id, 3);
        assert!(!store.is_composing());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_user_text_is_kept_verbatim() {
        let mut store = ConversationStore::new("greeting");
        store.append_user("  spaced out  ");
        assert_eq!(store.last().unwrap().text(), "  spaced out  ");
        assert!(store.last().unwrap().is_from_user());
    }

    #[test]
    fn test_append_while_composing_is_accepted() {
        let mut store = ConversationStore::new("greeting");
        store.append_user("one");
        assert!(store.append_user("two").is_some());
        assert!(store.is_composing());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_ids_are_contiguous_and_increasing() {
        let mut store = ConversationStore::new("greeting");
        store.append_user("a");
        store.append_assistant_reply("b");
        store.append_user("c");
        store.append_assistant_reply("d");
        let ids: Vec<u64> = store.messages().iter().map(Message::id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }
}
