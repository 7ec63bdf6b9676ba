use crate::theme::STATUS_COLOR;
use eframe::egui::{self, RichText};
use elist_core::StatusMessage;

pub struct StatusBarPanel;

impl StatusBarPanel {
    pub fn show(ui: &mut egui::Ui, status: StatusMessage) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(status.to_string()).color(STATUS_COLOR));
        });
    }
}
