//! Append-only conversation transcript
//!
//! A [`Transcript`] is owned exclusively by one agent. Messages are only
//! ever appended; nothing is edited or removed. The full transcript is sent
//! as context on every LLM call so that follow-up turns see prior history.

use crate::chat::message::Message;

/// Ordered conversation history owned by a single agent (Entity)
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Create an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message. This is the only mutation the transcript allows.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// The ordered messages, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let t = Transcript::new();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert!(t.last().is_none());
    }

    #[test]
    fn test_push_preserves_order() {
        let mut t = Transcript::new();
        t.push(Message::user("first"));
        t.push(Message::assistant("second"));
        t.push(Message::user("third"));

        let contents: Vec<_> = t.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
        assert_eq!(t.last().unwrap().content, "third");
    }
}
