pub mod chat;
pub mod settings;

use std::path::PathBuf;
use std::time::Duration;

use chat::{ChatState, DelayScheduler, InstantScheduler, ReplyScheduler};
pub use settings::{AppSettings, Language};

/// Combined application state
pub struct AppState {
    pub chat: ChatState,
    pub settings: AppSettings,
    /// Show preferences window
    pub show_settings_window: bool,
}

impl AppState {
    /// Build the application state: load settings, apply the CLI asset-root
    /// override, and wire the conversation to a timer-backed scheduler.
    pub fn new(assets_override: Option<PathBuf>) -> Self {
        let mut settings = AppSettings::load();
        if let Some(root) = assets_override {
            settings.assets.root = root;
        }

        let scheduler: Box<dyn ReplyScheduler> = match DelayScheduler::new() {
            Ok(s) => Box::new(s),
            Err(e) => {
                tracing::error!("{e}; replies will be delivered without delay");
                Box::new(InstantScheduler)
            }
        };

        let chat = ChatState::new(
            scheduler,
            Duration::from_millis(settings.chat.processing_delay_ms),
        );

        Self {
            chat,
            settings,
            show_settings_window: false,
        }
    }
}
