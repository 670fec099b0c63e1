use std::path::Path;

use egui::Ui;

use crate::app::styles;
use crate::export;
use crate::i18n::t;
use crate::state::AppSettings;

/// Playback-and-export panel for a simulation video attached to a message.
///
/// Playback is delegated to the platform's default player; the panel itself
/// shows a poster frame when a sibling `.jpg` exists next to the video.
pub fn show(ui: &mut Ui, video_url: &str, alembic_url: Option<&str>, settings: &AppSettings) {
    let video_path = export::resolve_asset(&settings.assets.root, video_url);

    egui::Frame::NONE
        .fill(egui::Color32::from_rgb(20, 20, 24))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(8))
        .show(ui, |ui| {
            ui.set_max_width(360.0);

            poster(ui, &video_path);

            ui.horizontal(|ui| {
                if ui
                    .button(format!("▶ {}", t("video.play")))
                    .on_hover_text(t("video.play_tip"))
                    .clicked()
                {
                    if let Err(e) = open::that(&video_path) {
                        tracing::error!("Failed to open {}: {e}", video_path.display());
                    }
                }

                export_menu(ui, &video_path, alembic_url, settings);
            });
        });
}

fn poster(ui: &mut Ui, video_path: &Path) {
    let poster_path = video_path.with_extension("jpg");
    if poster_path.is_file() {
        ui.add(
            egui::Image::new(format!("file://{}", poster_path.display()))
                .max_width(344.0)
                .corner_radius(egui::CornerRadius::same(4)),
        );
    } else {
        let name = video_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        ui.weak(egui::RichText::new(name).color(styles::PHYSICA_200));
    }
    ui.add_space(4.0);
}

fn export_menu(ui: &mut Ui, video_path: &Path, alembic_url: Option<&str>, settings: &AppSettings) {
    ui.menu_button(format!("{} ⏷", t("video.export")), |ui| {
        if ui.button(format!("MP4  {}", t("video.original"))).clicked() {
            ui.close_menu();
            save_copy(
                video_path,
                t("video.export_video_title"),
                export::VIDEO_EXPORT_NAME,
                "MP4",
                &["mp4"],
            );
        }

        let alembic_resp = ui
            .add_enabled(
                alembic_url.is_some(),
                egui::Button::new(format!("ABC  {}", t("video.alembic"))),
            )
            .on_disabled_hover_text(t("video.alembic_tip"));
        if alembic_resp.clicked() {
            ui.close_menu();
            if let Some(url) = alembic_url {
                let path = export::resolve_asset(&settings.assets.root, url);
                save_copy(
                    &path,
                    t("video.export_alembic_title"),
                    export::ALEMBIC_EXPORT_NAME,
                    "Alembic",
                    &["abc"],
                );
            }
        }
    });
}

fn save_copy(src: &Path, title: &str, file_name: &str, filter_name: &str, extensions: &[&str]) {
    if let Some(dest) = rfd::FileDialog::new()
        .set_title(title)
        .add_filter(filter_name, extensions)
        .set_file_name(file_name)
        .save_file()
    {
        match export::export_asset(src, &dest) {
            Ok(bytes) => tracing::info!("Exported {} ({bytes} bytes)", dest.display()),
            Err(e) => tracing::error!("{e}"),
        }
    }
}
