//! Keyboard shortcut handling

use eframe::egui;

use crate::state::AppState;

/// Handle keyboard shortcuts for the application
pub fn handle_keyboard(ctx: &egui::Context, state: &mut AppState) {
    ctx.input(|i| {
        // Ctrl+N — new conversation
        if i.modifiers.command && i.key_pressed(egui::Key::N) {
            state.chat.clear();
        }
        // Escape — close the preferences window
        if i.key_pressed(egui::Key::Escape) && state.show_settings_window {
            state.show_settings_window = false;
        }
    });
}
