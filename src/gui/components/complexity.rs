// src/gui/components/complexity.rs
//
// Score bar, size metrics and the Yes/No feature grid.

use eframe::egui::{self, ProgressBar, RichText};

use super::metric;
use crate::{
    analysis::Analysis,
    config::state::Theme,
    gui::theme::{error_color, success_color},
    report::{format_size, yes_no},
};

pub fn draw(ui: &mut egui::Ui, a: &Analysis, theme: Theme) {
    let m = &a.metrics;

    ui.heading("Website Complexity Analysis");

    ui.label(RichText::new("Overall Complexity").strong());
    ui.add(ProgressBar::new((m.complexity_score / 10.0) as f32));
    metric(ui, "Complexity Score", &format!("{:.1}/10", m.complexity_score));

    ui.add_space(8.0);

    let features = [
        ("Forms", m.has_forms),
        ("Authentication", m.has_authentication),
        ("Dynamic Content", m.has_dynamic_content),
    ];

    ui.columns(2, |cols| {
        cols[0].label(RichText::new("Size Metrics").strong());
        metric(&mut cols[0], "Content Size", &format_size(m.content_length))
            .on_hover_text("Total amount of content found on the website");
        metric(&mut cols[0], "Estimated Pages", &m.estimated_pages.to_string())
            .on_hover_text("Approximate number of pages the website contains");

        cols[1].label(RichText::new("Feature Detection").strong());
        egui::Grid::new("features")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .show(&mut cols[1], |ui| {
                for (name, present) in features {
                    ui.strong(format!("{name}:"));
                    let color = if present { success_color(theme) } else { error_color(theme) };
                    ui.colored_label(color, yes_no(present));
                    ui.end_row();
                }
            });
    });
}
