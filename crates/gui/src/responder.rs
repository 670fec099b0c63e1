//! Canned response synthesis for the simulated physics engine.
//!
//! There is no real simulation behind this: the reply is a pure function of
//! the prompt. A prompt that mentions flooding gets the pre-recorded flood
//! simulation video attached, anything else gets a generic pointer.

use shared::Message;

/// Path to the pre-recorded flood simulation video.
/// The file is expected under the configured asset root (`assets/` by
/// default); no existence check is performed.
pub const FLOOD_SIMULATION_VIDEO: &str = "/videos/flood-simulation.mp4";

pub const GREETING: &str = "Hello! I'm Physica, your AI physics simulation engine. \
    I can generate videos that accurately follow the laws of physics. \
    What simulation would you like to see today?";

pub const FLOOD_RESPONSE: &str = "I've generated a flood simulation for you. \
    This video demonstrates realistic water dynamics, including fluid flow, \
    wave propagation, and interaction with terrain surfaces - all following \
    accurate physics principles.";

pub const FALLBACK_RESPONSE: &str = "I can help you generate physics-accurate \
    simulations. Try asking me to create a flood simulation, and I'll show you \
    realistic water dynamics in action!";

/// The fixed assistant message every conversation starts with.
pub fn greeting() -> Message {
    Message::assistant(GREETING)
}

/// A prompt asks for a flood simulation iff its lowercase form contains
/// "flood".
pub fn is_flood_request(prompt: &str) -> bool {
    prompt.to_lowercase().contains("flood")
}

/// Synthesize the assistant reply for a prompt.
pub fn synthesize_reply(prompt: &str) -> Message {
    if is_flood_request(prompt) {
        Message::assistant(FLOOD_RESPONSE).with_video(FLOOD_SIMULATION_VIDEO)
    } else {
        Message::assistant(FALLBACK_RESPONSE)
    }
}
