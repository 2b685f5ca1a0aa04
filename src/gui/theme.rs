// src/gui/theme.rs
//
// The active theme lives in GuiState and is passed in explicitly; nothing here
// holds state of its own.

use eframe::egui::{self, Color32};

use crate::config::state::Theme;

pub fn apply(ctx: &egui::Context, theme: Theme) {
    let t = match theme {
        Theme::Light => egui::Theme::Light,
        Theme::Dark => egui::Theme::Dark,
    };
    ctx.set_theme(t);
    logd!("UI: Theme applied {:?}", theme);
}

pub fn success_color(theme: Theme) -> Color32 {
    match theme {
        Theme::Light => Color32::from_rgb(30, 130, 60),
        Theme::Dark => Color32::from_rgb(90, 200, 120),
    }
}

pub fn error_color(theme: Theme) -> Color32 {
    match theme {
        Theme::Light => Color32::from_rgb(200, 30, 30),
        Theme::Dark => Color32::from_rgb(240, 90, 90),
    }
}
