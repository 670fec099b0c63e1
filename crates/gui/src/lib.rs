// Library crate: exposes testable modules for integration tests.
// GUI-specific modules (app, ui) remain in the binary crate.

pub mod export;
pub mod fixtures;
pub mod harness;
pub mod responder;
pub mod state;
