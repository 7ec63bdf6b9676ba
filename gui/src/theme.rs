use eframe::egui::{self, Color32};

pub const WINDOW_TITLE: &str = "Element Manager";

// Header
pub const TITLE_FONT_SIZE: f32 = 18.0;

// Layout
pub const ITEM_SPACING: [f32; 2] = [10.0, 10.0];
pub const PANEL_MARGIN: f32 = 10.0;
pub const INPUT_WIDTH: f32 = 200.0;

// Status line
pub const STATUS_COLOR: Color32 = Color32::GRAY;

// Dialogs
pub const DIALOG_WIDTH: f32 = 320.0;
pub const DIALOG_BUTTON_SIZE: [f32; 2] = [72.0, 24.0];

/// Applies the window's spacing to the context.
pub fn apply_style(ctx: &egui::Context) {
    ctx.style_mut(|style| {
        style.spacing.item_spacing = egui::vec2(ITEM_SPACING[0], ITEM_SPACING[1]);
    });
}
