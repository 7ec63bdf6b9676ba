use eframe::egui;

pub struct ActionsPanel;

impl ActionsPanel {
    /// Renders the "Clear All" row. Returns true if it was clicked.
    pub fn show(ui: &mut egui::Ui) -> bool {
        ui.vertical_centered(|ui| ui.button("Clear All").clicked())
            .inner
    }
}
