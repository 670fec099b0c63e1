//! Integration tests for the conversation flow, driven headlessly through
//! ChatHarness.

use physica_gui_lib::harness::ChatHarness;
use physica_gui_lib::responder::{
    FALLBACK_RESPONSE, FLOOD_RESPONSE, FLOOD_SIMULATION_VIDEO, GREETING,
};
use shared::MessageRole;

#[test]
fn test_flood_request_scenario() {
    // Initial state: one assistant greeting message.
    let mut h = ChatHarness::new();
    assert_eq!(h.message_count(), 1);
    assert_eq!(h.last().unwrap().content, GREETING);

    // Sending immediately appends the user message (2 total)...
    h.send("Can you show a flood?");
    assert_eq!(h.message_count(), 2);
    assert_eq!(h.last().unwrap().role, MessageRole::User);
    assert_eq!(h.last().unwrap().content, "Can you show a flood?");
    assert!(h.is_processing());

    // ...and after the delay the assistant reply lands (3 total) with the
    // flood response text and the fixed video path.
    assert!(h.pump());
    assert_eq!(h.message_count(), 3);
    let reply = h.last().unwrap();
    assert_eq!(reply.role, MessageRole::Assistant);
    assert_eq!(reply.content, FLOOD_RESPONSE);
    assert_eq!(reply.video_url.as_deref(), Some(FLOOD_SIMULATION_VIDEO));
    assert!(!h.is_processing());
}

#[test]
fn test_generic_request_scenario() {
    let mut h = ChatHarness::new();
    h.send_and_pump("What's up?");

    let reply = h.last().unwrap();
    assert_eq!(reply.content, FALLBACK_RESPONSE);
    assert!(reply.video_url.is_none());
}

#[test]
fn test_every_send_appends_exactly_one_pair() {
    let mut h = ChatHarness::new();
    for (i, prompt) in ["Hello", "simulate gravity", "FLOODING near a river"]
        .iter()
        .enumerate()
    {
        h.send(prompt);
        assert_eq!(h.message_count(), 2 + i * 2);
        h.pump();
        assert_eq!(h.message_count(), 3 + i * 2);
    }
}

#[test]
fn test_flood_detection_examples() {
    for prompt in ["Show me a flood", "FLOODING near a river", "a FlOoD please"] {
        let mut h = ChatHarness::new();
        h.send_and_pump(prompt);
        assert!(
            h.last().unwrap().has_video(),
            "expected a video for {prompt:?}"
        );
    }

    for prompt in ["Hello", "simulate gravity", "water dynamics"] {
        let mut h = ChatHarness::new();
        h.send_and_pump(prompt);
        assert!(
            !h.last().unwrap().has_video(),
            "expected no video for {prompt:?}"
        );
    }
}

#[test]
fn test_whitespace_submission_is_ignored() {
    let mut h = ChatHarness::new();
    h.send("");
    h.send("   ");
    h.send("\t\n");
    assert_eq!(h.message_count(), 1);
    assert!(!h.is_processing());
    assert!(!h.pump());
}

#[test]
fn test_submission_blocked_while_processing() {
    let mut h = ChatHarness::new();
    h.send("first");
    // the reply has not been delivered yet, the controller is busy
    h.send("second");
    assert_eq!(h.message_count(), 2);

    h.pump();
    assert_eq!(h.message_count(), 3);

    // after the reply, sending works again
    h.send_and_pump("second");
    assert_eq!(h.message_count(), 5);
}

#[test]
fn test_user_content_is_trimmed() {
    let mut h = ChatHarness::new();
    h.send_and_pump("   Show me a flood   ");
    assert_eq!(h.chat.messages[1].content, "Show me a flood");
}

#[test]
fn test_synthesized_replies_never_carry_alembic() {
    let mut h = ChatHarness::new();
    h.send_and_pump("flood");
    h.send_and_pump("gravity");
    assert!(h.chat.messages.iter().all(|m| m.alembic_url.is_none()));
}

#[test]
fn test_conversation_order_mirrors_insertion() {
    let mut h = ChatHarness::new();
    h.send_and_pump("one");
    h.send_and_pump("flood two");

    let roles: Vec<_> = h.chat.messages.iter().map(|m| m.role).collect();
    assert_eq!(
        roles,
        vec![
            MessageRole::Assistant,
            MessageRole::User,
            MessageRole::Assistant,
            MessageRole::User,
            MessageRole::Assistant,
        ]
    );
    assert_eq!(h.chat.messages[1].content, "one");
    assert_eq!(h.chat.messages[3].content, "flood two");
}

#[test]
fn test_transcript_export_import() {
    let mut h = ChatHarness::new();
    h.send_and_pump("Can you show a flood?");
    let json = h.export_transcript_json();
    assert!(json.contains("\"videoUrl\""));

    let mut h2 = ChatHarness::new();
    h2.load_transcript_json(&json).unwrap();
    assert_eq!(h2.message_count(), 3);
    assert_eq!(h2.chat.messages, h.chat.messages);
}
