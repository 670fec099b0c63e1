//! Main application module

mod keyboard;
mod preferences;
pub mod styles;

use std::path::PathBuf;
use std::time::Duration;

use eframe::egui;

use crate::i18n::{set_lang, Lang};
use crate::state::{AppState, Language};
use crate::ui::{background, chat_panel, header, status_bar};

/// Main application
pub struct PhysicaApp {
    state: AppState,
    /// Last applied font size (to detect changes)
    last_font_size: f32,
}

impl PhysicaApp {
    pub fn new(cc: &eframe::CreationContext<'_>, assets_override: Option<PathBuf>) -> Self {
        let state = AppState::new(assets_override);

        set_lang(match state.settings.language {
            Language::Ru => Lang::Ru,
            Language::En => Lang::En,
        });

        // Apply initial styles with font size from settings
        styles::configure_styles(&cc.egui_ctx, state.settings.ui.font_size);

        // Poster previews in the video panel go through the image loaders
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let last_font_size = state.settings.ui.font_size;

        Self {
            state,
            last_font_size,
        }
    }
}

impl eframe::App for PhysicaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply font size if changed
        if self.state.settings.ui.font_size != self.last_font_size {
            styles::apply_font_size(ctx, self.state.settings.ui.font_size);
            self.last_font_size = self.state.settings.ui.font_size;
        }

        keyboard::handle_keyboard(ctx, &mut self.state);

        // Pick up a finished reply; keep repainting while one is pending,
        // since channel delivery does not wake the UI by itself.
        self.state.chat.poll_responses();
        if self.state.chat.is_processing {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        // ── Header ───────────────────────────────────────────
        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(egui::Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                header::show(ui, &mut self.state);
            });

        // ── Status bar ───────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(22.0)
            .frame(
                egui::Frame::side_top_panel(&ctx.style())
                    .inner_margin(egui::Margin::symmetric(8, 2)),
            )
            .show(ctx, |ui| {
                status_bar::show(ui, &self.state);
            });

        // ── Preferences window ───────────────────────────────
        preferences::settings_window(ctx, &mut self.state);

        // ── Central panel: conversation ──────────────────────
        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(egui::Color32::WHITE)
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                background::paint(ui.painter(), ui.max_rect());

                let column_width = ui.available_width().min(760.0);
                ui.vertical_centered(|ui| {
                    ui.set_max_width(column_width);
                    chat_panel::show(ui, &mut self.state);
                });
            });
    }
}
