//! Theme configuration for egui.
//!
//! Light grey theme with a blue accent, green prices and red remove buttons.

use egui::{Color32, Stroke, Visuals};

/// Apply the light theme to egui context.
pub fn apply_light_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    let bg_color = Color32::from_rgb(248, 248, 248); // #f8f8f8
    let card_color = Color32::WHITE;
    let widget_color = Color32::from_rgb(232, 232, 232); // #e8e8e8
    let text_color = Color32::from_rgb(51, 51, 51); // #333

    style.visuals = Visuals::light();

    // Panel colors
    style.visuals.panel_fill = bg_color;
    style.visuals.window_fill = card_color;
    style.visuals.extreme_bg_color = Color32::from_rgb(250, 250, 250);

    // Widget colors
    style.visuals.widgets.noninteractive.bg_fill = card_color;
    style.visuals.widgets.inactive.bg_fill = widget_color;
    style.visuals.widgets.inactive.weak_bg_fill = widget_color;
    style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(210, 210, 210);
    style.visuals.widgets.active.bg_fill = accent_color();

    // Text colors
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text_color);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text_color);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Color32::BLACK);
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);

    // Selection
    style.visuals.selection.bg_fill = accent_color();
    style.visuals.selection.stroke = Stroke::new(1.0, Color32::WHITE);

    style.visuals.hyperlink_color = accent_color();

    // Rounding
    style.visuals.window_rounding = 10.0.into();
    style.visuals.widgets.noninteractive.rounding = 8.0.into();
    style.visuals.widgets.inactive.rounding = 8.0.into();
    style.visuals.widgets.hovered.rounding = 8.0.into();
    style.visuals.widgets.active.rounding = 8.0.into();

    // Spacing
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = 15.0.into();
    style.spacing.button_padding = egui::vec2(12.0, 6.0);

    ctx.set_style(style);
}

/// Selected buttons and links.
pub fn accent_color() -> Color32 {
    Color32::from_rgb(0, 122, 255) // #007AFF
}

/// Prices.
pub fn price_color() -> Color32 {
    Color32::from_rgb(40, 167, 69) // #28A745
}

/// Remove buttons and error messages.
pub fn danger_color() -> Color32 {
    Color32::from_rgb(220, 53, 69) // #DC3545
}

/// Unselected buttons and empty-list hints.
pub fn muted_color() -> Color32 {
    Color32::from_rgb(136, 136, 136) // #888
}

/// Background of the statistics box.
pub fn stats_fill() -> Color32 {
    Color32::from_rgb(232, 232, 232) // #e8e8e8
}
