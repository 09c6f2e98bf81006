use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{ChatMessage, SenderRole};

const GREETING: &str = "Hello! I'm your health advisor. How can I help you \
                        today? Please describe your symptoms or health \
                        concerns.";

/// Append-only consultation transcript. Messages are never edited or
/// removed once recorded.
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self { messages: Vec::new() }
    }

    /// A transcript opened with the advisor's standing greeting.
    pub fn with_greeting(now: DateTime<Utc>) -> Self {
        let mut transcript = Self::new();
        transcript.record(GREETING.to_string(), SenderRole::Advisor, now);
        transcript
    }

    pub fn record(
        &mut self,
        text: String,
        sender: SenderRole,
        now: DateTime<Utc>,
    ) -> &ChatMessage {
        self.messages.push(ChatMessage {
            id: Uuid::new_v4(),
            text,
            sender,
            timestamp: now,
        });
        // Just pushed, so the last element exists.
        self.messages
            .last()
            .expect("transcript push cannot leave it empty")
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_opens_the_transcript() {
        let transcript = ChatTranscript::with_greeting(Utc::now());
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.messages()[0].sender, SenderRole::Advisor);
        assert!(transcript.messages()[0].text.contains("describe your symptoms"));
    }

    #[test]
    fn records_append_in_order() {
        let now = Utc::now();
        let mut transcript = ChatTranscript::new();
        transcript.record("I have a fever".to_string(), SenderRole::Requester, now);
        transcript.record("I see you have a fever.".to_string(), SenderRole::Advisor, now);

        let senders: Vec<SenderRole> = transcript
            .messages()
            .iter()
            .map(|message| message.sender)
            .collect();
        assert_eq!(senders, vec![SenderRole::Requester, SenderRole::Advisor]);
    }
}
