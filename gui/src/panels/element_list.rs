use eframe::egui::{self, ScrollArea};
use elist_core::SelectionChange;
use elist_core::types::Element;

/// Whether the current primary press started over the visible list.
const PRESS_ID: &str = "element-list-press";

pub struct ElementListPanel;

impl ElementListPanel {
    /// Renders the scrollable single-selection list.
    ///
    /// Returns the selection notification for this frame. While a press that
    /// started on the list is held, the row under the pointer is reported as
    /// adjusting. When the button is released, the row under the pointer is
    /// reported as settled, however long the press lasted and whichever row
    /// it started on. Keyboard activation of a row is settled as well.
    pub fn show(
        ui: &mut egui::Ui,
        elements: &[Element],
        selection: Option<usize>,
    ) -> Option<SelectionChange> {
        let press_id = egui::Id::new(PRESS_ID);
        let (pressed, down, released, pointer) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_down(),
                i.pointer.primary_released(),
                i.pointer.latest_pos(),
            )
        });
        let mut change = None;

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let visible = ui.clip_rect();
                let over_list = pointer.filter(|pos| visible.contains(*pos));

                if pressed {
                    ui.data_mut(|d| d.insert_temp(press_id, over_list.is_some()));
                }
                let tracking = ui.data(|d| d.get_temp::<bool>(press_id)).unwrap_or(false);

                ui.spacing_mut().item_spacing.y = 2.0;
                ui.with_layout(egui::Layout::top_down_justified(egui::Align::LEFT), |ui| {
                    for (index, element) in elements.iter().enumerate() {
                        let response =
                            ui.selectable_label(selection == Some(index), element.as_str());
                        let under_pointer =
                            tracking && over_list.is_some_and(|pos| response.rect.contains(pos));

                        if under_pointer && released {
                            change = Some(SelectionChange::settled(index));
                        } else if response.clicked() {
                            change = Some(SelectionChange::settled(index));
                        } else if under_pointer && down {
                            change = Some(SelectionChange::adjusting(index));
                        }
                    }
                });

                if released {
                    ui.data_mut(|d| d.remove::<bool>(press_id));
                }
            });

        change
    }
}
