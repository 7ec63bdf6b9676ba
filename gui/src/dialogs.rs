//! Modal notices raised by the editor.
//!
//! egui has no blocking dialogs: the pending [`Dialog`] is drawn every frame
//! as a centered window while the rest of the UI is disabled, and the answer
//! is handed back to the editor once the user picks one.

use crate::theme::{DIALOG_BUTTON_SIZE, DIALOG_WIDTH};
use eframe::egui::{self, Align2, RichText};
use elist_core::{Dialog, DialogAnswer, DialogKind};

/// Draws `dialog` and returns the user's answer, if one was given this frame.
pub fn show(ctx: &egui::Context, dialog: Dialog) -> Option<DialogAnswer> {
    let mut answer = None;

    let (enter, escape) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::Enter),
            i.key_pressed(egui::Key::Escape),
        )
    });

    egui::Window::new(dialog.title())
        .id(egui::Id::new("elist-dialog"))
        .collapsible(false)
        .resizable(false)
        .default_width(DIALOG_WIDTH)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(icon(dialog.kind())).size(20.0));
                ui.label(dialog.message());
            });
            ui.add_space(8.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match dialog.kind() {
                    DialogKind::Warning => {
                        if ui.add_sized(DIALOG_BUTTON_SIZE, egui::Button::new("OK")).clicked()
                            || enter
                        {
                            answer = Some(DialogAnswer::Acknowledged);
                        }
                    }
                    DialogKind::Confirm => {
                        // right_to_left: "No" is placed first so "Yes" ends up on the left.
                        if ui.add_sized(DIALOG_BUTTON_SIZE, egui::Button::new("No")).clicked() {
                            answer = Some(DialogAnswer::No);
                        }
                        if ui.add_sized(DIALOG_BUTTON_SIZE, egui::Button::new("Yes")).clicked() {
                            answer = Some(DialogAnswer::Yes);
                        }
                    }
                }
            });
        });

    if answer.is_none() && escape {
        answer = Some(DialogAnswer::Dismissed);
    }
    answer
}

fn icon(kind: DialogKind) -> &'static str {
    match kind {
        DialogKind::Warning => "⚠",
        DialogKind::Confirm => "❓",
    }
}
