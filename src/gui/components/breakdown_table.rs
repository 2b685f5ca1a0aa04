// src/gui/components/breakdown_table.rs
//
// Hours and dollars per line item. Purely a view.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::{analysis::Analysis, report::format_usd};

const HEADERS: [&str; 3] = ["Item", "Hours", "Cost"];

pub fn draw(ui: &mut egui::Ui, a: &Analysis) {
    let c = &a.costs;
    let hours = |h: f64| format!("{h:.0} h");

    let rows: [(&str, String, String); 5] = [
        ("Frontend", hours(c.frontend_hours), format_usd(c.frontend_cost)),
        ("Backend", hours(c.backend_hours), format_usd(c.backend_cost)),
        (
            "Development total",
            hours(c.frontend_hours + c.backend_hours),
            format_usd(c.development_cost),
        ),
        ("Hosting (monthly)", s!("-"), format_usd(c.hosting_cost)),
        ("Maintenance (monthly)", s!("-"), format_usd(c.maintenance_cost)),
    ];

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(180.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| { ui.strong(h); });
            }
        })
        .body(|mut body| {
            for (item, hrs, cost) in &rows {
                body.row(18.0, |mut row| {
                    row.col(|ui| { ui.label(*item); });
                    row.col(|ui| { ui.label(hrs.as_str()); });
                    row.col(|ui| { ui.label(cost.as_str()); });
                });
            }
        });
}
