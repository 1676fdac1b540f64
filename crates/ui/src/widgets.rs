use egui::{Button, Color32, Response, RichText, Ui};

use crate::theme;

/// Filled, fixed-width button with white label text.
pub fn filled_button(ui: &mut Ui, label: impl Into<String>, fill: Color32) -> Response {
    let text = RichText::new(label.into())
        .size(14.0)
        .color(theme::tokens().button_text);
    ui.add(Button::new(text).fill(fill).min_size(egui::vec2(220.0, 36.0)))
}

pub fn title(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).size(32.0).color(theme::tokens().title));
}

pub fn prompt(ui: &mut Ui, text: &str, size: f32) {
    ui.label(RichText::new(text).size(size).color(theme::tokens().prompt));
}
