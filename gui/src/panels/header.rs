use crate::theme::{TITLE_FONT_SIZE, WINDOW_TITLE};
use eframe::egui::{self, RichText};

pub struct HeaderPanel;

impl HeaderPanel {
    pub fn show(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(WINDOW_TITLE).strong().size(TITLE_FONT_SIZE));
        });
    }
}
