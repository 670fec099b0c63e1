//! Headless test harness for driving a conversation programmatically.
//!
//! Uses the instant scheduler, so a send followed by a pump is fully
//! deterministic and never waits on real time.

use std::time::Duration;

use shared::Message;

use crate::state::chat::{ChatState, InstantScheduler};

/// Headless conversation driver
pub struct ChatHarness {
    pub chat: ChatState,
}

impl ChatHarness {
    /// Create a harness with zero delay and synchronous reply delivery.
    pub fn new() -> Self {
        Self {
            chat: ChatState::new(Box::new(InstantScheduler), Duration::ZERO),
        }
    }

    // ── Driving ───────────────────────────────────────────────

    /// Put `text` into the input buffer and submit it.
    pub fn send(&mut self, text: &str) {
        self.chat.input = text.to_string();
        self.chat.send_message();
    }

    /// Run one poll cycle, as the app loop does each frame.
    /// Returns true if a reply was appended.
    pub fn pump(&mut self) -> bool {
        self.chat.poll_responses()
    }

    /// Send and immediately deliver the reply.
    pub fn send_and_pump(&mut self, text: &str) {
        self.send(text);
        self.pump();
    }

    /// Reset to a fresh conversation.
    pub fn clear(&mut self) {
        self.chat.clear();
    }

    // ── Inspection ────────────────────────────────────────────

    pub fn message_count(&self) -> usize {
        self.chat.messages.len()
    }

    pub fn last(&self) -> Option<&Message> {
        self.chat.messages.last()
    }

    pub fn is_processing(&self) -> bool {
        self.chat.is_processing
    }

    /// Export the conversation as JSON.
    pub fn export_transcript_json(&self) -> String {
        serde_json::to_string_pretty(&self.chat.messages).unwrap_or_default()
    }

    /// Replace the conversation with one parsed from JSON.
    pub fn load_transcript_json(&mut self, json: &str) -> Result<(), String> {
        let messages: Vec<Message> =
            serde_json::from_str(json).map_err(|e| format!("JSON parse error: {e}"))?;
        self.chat.clear();
        self.chat.messages = messages;
        Ok(())
    }
}

impl Default for ChatHarness {
    fn default() -> Self {
        Self::new()
    }
}
