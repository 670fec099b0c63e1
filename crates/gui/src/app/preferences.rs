//! Preferences window

use std::time::Duration;

use eframe::egui;

use crate::i18n::{set_lang, t, Lang};
use crate::state::{AppState, Language};

/// Show the preferences window
pub fn settings_window(ctx: &egui::Context, state: &mut AppState) {
    let mut open = state.show_settings_window;
    egui::Window::new(t("settings.title"))
        .open(&mut open)
        .resizable(true)
        .default_width(380.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                show_general_settings(ui, state);
                show_chat_settings(ui, state);
                show_ui_settings(ui, state);
                show_asset_settings(ui, state);
                show_settings_buttons(ui, state);
            });
        });
    state.show_settings_window = open;
}

fn show_general_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.general"));
    ui.horizontal(|ui| {
        ui.label(t("settings.language"));
        egui::ComboBox::from_id_salt("language_combo")
            .selected_text(match state.settings.language {
                Language::En => "English",
                Language::Ru => "Русский",
            })
            .show_ui(ui, |ui| {
                if ui
                    .selectable_value(&mut state.settings.language, Language::En, "English")
                    .clicked()
                {
                    set_lang(Lang::En);
                }
                if ui
                    .selectable_value(&mut state.settings.language, Language::Ru, "Русский")
                    .clicked()
                {
                    set_lang(Lang::Ru);
                }
            });
    });
    ui.add_space(10.0);
}

fn show_chat_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.chat"));
    ui.horizontal(|ui| {
        ui.label(t("settings.delay"));
        ui.add(
            egui::DragValue::new(&mut state.settings.chat.processing_delay_ms)
                .speed(50)
                .range(0..=10_000),
        )
        .on_hover_text(t("settings.delay_hint"));
    });
    ui.add_space(10.0);
}

fn show_ui_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.ui"));
    ui.horizontal(|ui| {
        ui.label(t("settings.font_size"));
        ui.add(
            egui::DragValue::new(&mut state.settings.ui.font_size)
                .speed(0.5)
                .range(8.0..=24.0)
                .suffix(" pt"),
        );
    });
    ui.add_space(10.0);
}

fn show_asset_settings(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(t("settings.assets"));
    ui.horizontal(|ui| {
        ui.label(t("settings.assets_root"));
        ui.label(state.settings.assets.root.display().to_string());
        if ui.button(t("settings.browse")).clicked() {
            if let Some(dir) = rfd::FileDialog::new()
                .set_title(t("settings.browse_title"))
                .pick_folder()
            {
                state.settings.assets.root = dir;
            }
        }
    });
    ui.add_space(10.0);
}

fn show_settings_buttons(ui: &mut egui::Ui, state: &mut AppState) {
    ui.separator();
    ui.horizontal(|ui| {
        if ui.button(t("settings.apply")).clicked() {
            state
                .chat
                .set_delay(Duration::from_millis(state.settings.chat.processing_delay_ms));
            state.settings.save();
        }
        if ui.button(t("settings.reset")).clicked() {
            state.settings = crate::state::AppSettings::default();
            set_lang(Lang::En);
        }
        if ui.button(t("settings.close")).clicked() {
            state.show_settings_window = false;
        }
    });
}
