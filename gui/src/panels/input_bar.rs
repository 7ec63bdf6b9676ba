use crate::theme::INPUT_WIDTH;
use eframe::egui;
use elist_core::UiEvent;

pub struct InputBarPanel;

impl InputBarPanel {
    /// Renders the label, text field and "Add" button.
    ///
    /// Returns the submit gesture, if any. `focus` moves keyboard focus into
    /// the text field.
    pub fn show(ui: &mut egui::Ui, input: &mut String, focus: bool) -> Option<UiEvent> {
        let mut event = None;

        ui.horizontal(|ui| {
            ui.label("Enter an element:");

            let response = ui.add(egui::TextEdit::singleline(input).desired_width(INPUT_WIDTH));
            if focus {
                response.request_focus();
            }

            // A single-line TextEdit gives up focus when Enter is pressed.
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                event = Some(UiEvent::EnterPressed);
            }

            if ui.button("Add").clicked() {
                event = Some(UiEvent::AddClicked);
            }
        });

        event
    }
}
