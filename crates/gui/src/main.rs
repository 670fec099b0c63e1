mod app;
pub mod i18n;
mod ui;

// Re-export library modules so that `crate::state`, `crate::export`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use physica_gui_lib::export;
pub use physica_gui_lib::state;

use std::path::PathBuf;

use app::PhysicaApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "physica_gui=info,physica_gui_lib=info".into()),
        )
        .init();

    // Parse --assets <dir> argument
    let assets_override = parse_assets_arg();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Physica — AI Physics Simulation")
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "physica-gui",
        native_options,
        Box::new(move |cc| Ok(Box::new(PhysicaApp::new(cc, assets_override)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_assets_arg() -> Option<PathBuf> {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--assets" && i + 1 < args.len() {
            let root = PathBuf::from(&args[i + 1]);
            tracing::info!("Using asset root {}", root.display());
            return Some(root);
        }
        i += 1;
    }
    None
}
