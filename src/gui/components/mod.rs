// src/gui/components/mod.rs
pub mod breakdown_table;
pub mod complexity;
pub mod cost_cards;
pub mod footer;
pub mod header;
pub mod url_bar;

use eframe::egui::{self, RichText};

/// Small caption over a large value, like a dashboard metric.
pub(super) fn metric(ui: &mut egui::Ui, label: &str, value: &str) -> egui::Response {
    ui.label(RichText::new(label).small());
    ui.label(RichText::new(value).size(24.0).strong())
}
