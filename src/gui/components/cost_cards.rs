// src/gui/components/cost_cards.rs
//
// The three headline numbers side by side.

use eframe::egui;

use super::metric;
use crate::{
    analysis::Analysis,
    report::{format_usd, HOSTING_INCLUDES, MAINTENANCE_INCLUDES},
};

pub fn draw(ui: &mut egui::Ui, a: &Analysis) {
    let c = &a.costs;

    ui.columns(3, |cols| {
        metric(&mut cols[0], "Development Cost", &format_usd(c.development_cost));
        cols[0].strong("Breakdown:");
        cols[0].label(format!("- Frontend: {}", format_usd(c.frontend_cost)));
        cols[0].label(format!("- Backend: {}", format_usd(c.backend_cost)));

        metric(&mut cols[1], "Monthly Hosting Cost", &format_usd(c.hosting_cost));
        includes(&mut cols[1], HOSTING_INCLUDES);

        metric(&mut cols[2], "Monthly Maintenance", &format_usd(c.maintenance_cost));
        includes(&mut cols[2], MAINTENANCE_INCLUDES);
    });
}

fn includes(ui: &mut egui::Ui, items: &[&str]) {
    ui.strong("Includes:");
    for item in items {
        ui.label(format!("- {item}"));
    }
}
