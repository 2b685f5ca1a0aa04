// src/gui/components/footer.rs
use eframe::egui::{self, RichText};

use crate::report::FOOTER_NOTE;

pub fn draw(ui: &mut egui::Ui) {
    ui.label(RichText::new(FOOTER_NOTE).italics().small());
}
