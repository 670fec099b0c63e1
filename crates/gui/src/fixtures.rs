//! Factory functions for creating test data.

use shared::Message;

use crate::responder;

// ── Prompts ─────────────────────────────────────────────────────

/// A prompt that triggers the flood simulation response.
pub fn flood_prompt() -> &'static str {
    "Can you show a flood?"
}

/// A prompt that triggers the generic fallback response.
pub fn generic_prompt() -> &'static str {
    "What's up?"
}

// ── Message factories ───────────────────────────────────────────

/// An assistant message carrying the flood simulation video.
pub fn assistant_with_video(content: &str) -> Message {
    Message::assistant(content).with_video(responder::FLOOD_SIMULATION_VIDEO)
}

// ── Conversation factories ──────────────────────────────────────

/// The initial conversation: just the greeting.
pub fn greeting_conversation() -> Vec<Message> {
    vec![responder::greeting()]
}

/// A full exchange: greeting, flood request, flood reply with video.
pub fn flood_conversation() -> Vec<Message> {
    vec![
        responder::greeting(),
        Message::user(flood_prompt()),
        responder::synthesize_reply(flood_prompt()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::MessageRole;

    #[test]
    fn test_prompt_factories() {
        assert!(responder::is_flood_request(flood_prompt()));
        assert!(!responder::is_flood_request(generic_prompt()));
    }

    #[test]
    fn test_greeting_conversation() {
        let msgs = greeting_conversation();
        assert_eq!(msgs.len(), 1);
        assert_eq!(msgs[0].role, MessageRole::Assistant);
    }

    #[test]
    fn test_flood_conversation_shape() {
        let msgs = flood_conversation();
        assert_eq!(msgs.len(), 3);
        assert_eq!(msgs[1].role, MessageRole::User);
        assert!(msgs[2].has_video());
        assert!(msgs[2].alembic_url.is_none());
    }

    #[test]
    fn test_assistant_with_video_factory() {
        let m = assistant_with_video("done");
        assert_eq!(
            m.video_url.as_deref(),
            Some(responder::FLOOD_SIMULATION_VIDEO)
        );
    }
}
