use egui::Ui;

use shared::Message;

use crate::app::styles;
use crate::state::AppSettings;
use crate::ui::video_panel;

/// Render a single message row: user messages right-aligned on the accent
/// color, assistant messages left-aligned on the neutral fill with an
/// avatar disc. A video panel is attached beneath assistant messages that
/// carry one.
pub fn show(ui: &mut Ui, msg: &Message, settings: &AppSettings) {
    if msg.is_user() {
        ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
            bubble(ui, msg, styles::PHYSICA_500, egui::Color32::WHITE);
        });
    } else {
        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
            ui.horizontal(|ui| {
                avatar(ui);
                ui.vertical(|ui| {
                    bubble(ui, msg, styles::PHYSICA_100, egui::Color32::BLACK);
                    if let Some(url) = &msg.video_url {
                        ui.add_space(4.0);
                        video_panel::show(ui, url, msg.alembic_url.as_deref(), settings);
                    }
                });
            });
        });
    }
}

fn bubble(ui: &mut Ui, msg: &Message, fill: egui::Color32, text_color: egui::Color32) {
    let max_w = ui.available_width() * 0.7;
    egui::Frame::NONE
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_max_width(max_w);
            ui.label(egui::RichText::new(&msg.content).color(text_color));
        });
}

fn avatar(ui: &mut Ui) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(28.0, 28.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), 14.0, styles::PHYSICA_100);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "AI",
        egui::FontId::proportional(11.0),
        styles::PHYSICA_600,
    );
}
