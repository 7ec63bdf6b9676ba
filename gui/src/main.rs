mod app;
mod dialogs;
mod logging;
mod panels;
mod settings;
mod theme;

use app::ElementListApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    let loaded = settings::load();
    if let Err(e) = logging::init(&loaded.config.logging) {
        eprintln!("[Logging] Failed to install subscriber: {e}");
    }
    for warning in &loaded.warnings {
        tracing::warn!("{warning}");
    }

    let window = &loaded.config.window;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(theme::WINDOW_TITLE)
            .with_inner_size(window.inner_size())
            .with_min_inner_size(window.min_inner_size()),
        centered: true,
        ..Default::default()
    };

    tracing::debug!(size = ?window.inner_size(), "starting");
    eframe::run_native(
        theme::WINDOW_TITLE,
        options,
        Box::new(|cc| {
            theme::apply_style(&cc.egui_ctx);
            Ok(Box::new(ElementListApp::new(cc)))
        }),
    )
}
