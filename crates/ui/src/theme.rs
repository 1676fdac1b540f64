use egui::{Color32, FontFamily, FontId, Rounding, Stroke, TextStyle, Visuals};
use numguess_domain::Difficulty;

#[derive(Clone, Debug)]
pub struct ThemeTokens {
    pub neutral_bg: Color32,
    pub neutral_panel: Color32,
    pub text_primary: Color32,
    pub title: Color32,
    pub prompt: Color32,
    pub button_text: Color32,
    pub go: Color32,
    pub caution: Color32,
    pub danger: Color32,
    pub quit: Color32,
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub tokens: ThemeTokens,
    pub visuals: Visuals,
}

pub fn tokens() -> ThemeTokens {
    ThemeTokens {
        neutral_bg: Color32::from_rgb(0x0D, 0x11, 0x17),
        neutral_panel: Color32::from_rgb(0x16, 0x1B, 0x22),
        text_primary: Color32::from_rgb(0xC9, 0xD1, 0xD9),
        title: Color32::from_rgb(0x00, 0x80, 0x00),
        prompt: Color32::from_rgb(0xFF, 0xA5, 0x00),
        button_text: Color32::WHITE,
        go: Color32::from_rgb(0x23, 0x86, 0x36),
        caution: Color32::from_rgb(0xFB, 0x85, 0x00),
        danger: Color32::from_rgb(0xDA, 0x36, 0x33),
        quit: Color32::from_rgb(0x7D, 0x0A, 0x0A),
    }
}

pub fn dark() -> Theme {
    let tokens = tokens();

    let mut visuals = Visuals::dark();
    visuals.window_rounding = Rounding::same(8.0);
    visuals.panel_fill = tokens.neutral_bg;
    visuals.window_fill = tokens.neutral_panel;
    visuals.extreme_bg_color = tokens.neutral_panel;
    visuals.widgets.noninteractive.bg_fill = tokens.neutral_bg;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, tokens.text_primary);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, tokens.text_primary);
    visuals.selection.bg_fill = tokens.go;

    Theme { tokens, visuals }
}

pub fn apply(ctx: &egui::Context) {
    let theme = dark();
    let mut style = (*ctx.style()).clone();
    style.visuals = theme.visuals;
    style.spacing.item_spacing = egui::vec2(10.0, 12.0);
    style.spacing.button_padding = egui::vec2(16.0, 8.0);
    style.text_styles = [
        (TextStyle::Heading, FontId::new(32.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Button, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(14.0, FontFamily::Monospace)),
    ]
    .into();
    ctx.set_style(style);
}

/// Button fill for each difficulty: green, orange, red.
pub fn difficulty_fill(difficulty: Difficulty) -> Color32 {
    let tokens = tokens();
    match difficulty {
        Difficulty::Easy => tokens.go,
        Difficulty::Medium => tokens.caution,
        Difficulty::Hard => tokens.danger,
    }
}
