use crate::dialogs;
use crate::panels::{ActionsPanel, ElementListPanel, HeaderPanel, InputBarPanel, StatusBarPanel};
use crate::theme::PANEL_MARGIN;
use eframe::egui;
use elist_core::{ElementListEditor, UiEvent};

pub struct ElementListApp {
    editor: ElementListEditor,
}

impl ElementListApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            editor: ElementListEditor::new(),
        }
    }
}

impl eframe::App for ElementListApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Events are collected while drawing and applied once the frame is laid out.
        let mut events = Vec::new();
        let blocked = self.editor.dialog().is_some();
        let frame = egui::Frame::side_top_panel(&ctx.style()).inner_margin(PANEL_MARGIN);

        egui::TopBottomPanel::top("header")
            .frame(frame)
            .show(ctx, HeaderPanel::show);

        egui::TopBottomPanel::bottom("controls")
            .frame(frame)
            .show(ctx, |ui| {
                ui.add_enabled_ui(!blocked, |ui| {
                    let focus = self.editor.take_focus_request();
                    events.extend(InputBarPanel::show(
                        ui,
                        self.editor.pending_input_mut(),
                        focus,
                    ));
                    if ActionsPanel::show(ui) {
                        events.push(UiEvent::ClearAllClicked);
                    }
                });
                StatusBarPanel::show(ui, self.editor.status());
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                let change =
                    ElementListPanel::show(ui, self.editor.elements(), self.editor.selection());
                events.extend(change.map(UiEvent::SelectionChanged));
            });
        });

        if let Some(dialog) = self.editor.dialog() {
            events.extend(dialogs::show(ctx, dialog).map(UiEvent::DialogAnswered));
        }

        if !events.is_empty() {
            for event in events {
                self.editor.handle(event);
            }
            ctx.request_repaint();
        }
    }
}
