// src/gui/components/url_bar.rs
//
// URL field + Analyze button. Enter in the field does the same as the button.

use eframe::egui::{self, Spinner};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.label("Website URL");

    ui.horizontal(|ui| {
        let field = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.url_text)
                .hint_text("https://example.com")
                .desired_width(420.0),
        );
        let submitted = field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let clicked = ui
            .add_enabled(!app.running, egui::Button::new("Analyze"))
            .clicked();

        if submitted || clicked {
            app.start_analysis(ui.ctx());
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }
        ui.label(app.status_text());
    });
}
