// src/gui/components/header.rs
//
// Title row with the light/dark toggle. The toggle only flips GuiState.theme;
// App::update applies it.

use eframe::egui::{self, Align, Layout};

use crate::{config::consts::APP_TITLE, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.heading(format!("💰 {APP_TITLE}"));

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let theme = app.state.gui.theme;
            if ui
                .button(theme.toggle_icon())
                .on_hover_text("Toggle light/dark theme")
                .clicked()
            {
                app.state.gui.theme = theme.toggled();
                logf!("UI: Theme → {:?}", app.state.gui.theme);
            }
        });
    });
    ui.label("Enter a website URL to get development and maintenance cost estimates");
    ui.add_space(4.0);
}
