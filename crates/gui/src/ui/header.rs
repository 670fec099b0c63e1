use egui::Ui;

use crate::app::styles;
use crate::i18n::t;
use crate::state::AppState;

pub fn show(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        // Brand mark
        brand_disc(ui);
        ui.heading(egui::RichText::new("Physica").strong());

        ui.add_space(16.0);

        // Static navigation links
        ui.weak(t("header.home"));
        ui.weak(t("header.features"));
        ui.weak(t("header.about"));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .small_button("⚙")
                .on_hover_text(t("header.preferences_tip"))
                .clicked()
            {
                state.show_settings_window = true;
            }

            // Decorative, not wired to anything
            let _ = ui.add(
                egui::Button::new(egui::RichText::new(t("header.sign_up")).color(egui::Color32::WHITE))
                    .fill(styles::PHYSICA_500)
                    .corner_radius(egui::CornerRadius::same(12)),
            );
        });
    });
}

fn brand_disc(ui: &mut Ui) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(24.0, 24.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), 12.0, styles::PHYSICA_500);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "💬",
        egui::FontId::proportional(12.0),
        egui::Color32::WHITE,
    );
}
