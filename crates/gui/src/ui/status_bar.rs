use egui::Ui;

use crate::i18n::t;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let count = state.chat.messages.len();
        ui.weak(format!("{}: {count}", t("status.messages")));

        ui.separator();

        if state.chat.is_processing {
            ui.colored_label(
                egui::Color32::from_rgb(255, 200, 100),
                t("status.generating"),
            );
        } else {
            ui.weak(t("status.ready"));
        }

        // Right-aligned version
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.weak("Physica v0.1");
        });
    });
}
