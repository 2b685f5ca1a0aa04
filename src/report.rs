// src/report.rs
//! Human-facing rendering of an [`Analysis`]: number formatting, the plain
//! text report printed by the CLI, and the flat JSON form.

use crate::analysis::Analysis;

pub const HOSTING_INCLUDES: &[&str] = &["Server costs", "CDN services", "SSL certificates"];
pub const MAINTENANCE_INCLUDES: &[&str] = &["Bug fixes", "Updates", "Security patches"];
pub const FOOTER_NOTE: &str =
    "Note: Estimates are approximate and may vary based on specific requirements";

/// Content length in human units: `chars`, `K chars`, `M chars`, `G chars` (base 1000).
pub fn format_size(chars: usize) -> String {
    let mut size = chars as f64;
    for unit in ["chars", "K chars", "M chars"] {
        if size < 1000.0 {
            return format!("{size:.1} {unit}");
        }
        size /= 1000.0;
    }
    format!("{size:.1} G chars")
}

/// `$1,234.56`: thousands separators, two decimals, leading `-` when negative.
pub fn format_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${amount}");
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0.00" reads oddly; only sign amounts that survive rounding.
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    join!(sign, "$", &grouped, ".", cents)
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Plain-text report, one labelled value per line.
pub fn render_text(a: &Analysis) -> String {
    let m = &a.metrics;
    let c = &a.costs;
    let mut out = String::new();

    out.push_str(&format!("Website: {}\n\n", a.url));

    out.push_str(&row("Development Cost", &format_usd(c.development_cost)));
    out.push_str(&row(
        "  Frontend",
        &format!("{} ({:.0} h)", format_usd(c.frontend_cost), c.frontend_hours),
    ));
    out.push_str(&row(
        "  Backend",
        &format!("{} ({:.0} h)", format_usd(c.backend_cost), c.backend_hours),
    ));
    out.push_str(&row("Monthly Hosting Cost", &format_usd(c.hosting_cost)));
    out.push_str(&row("  Includes", &HOSTING_INCLUDES.join(", ")));
    out.push_str(&row("Monthly Maintenance", &format_usd(c.maintenance_cost)));
    out.push_str(&row("  Includes", &MAINTENANCE_INCLUDES.join(", ")));
    out.push('\n');

    out.push_str(&row("Complexity Score", &format!("{:.1}/10", m.complexity_score)));
    out.push_str(&row("Content Size", &format_size(m.content_length)));
    out.push_str(&row("Estimated Pages", &m.estimated_pages.to_string()));
    out.push_str(&row("Forms", yes_no(m.has_forms)));
    out.push_str(&row("Authentication", yes_no(m.has_authentication)));
    out.push_str(&row("Dynamic Content", yes_no(m.has_dynamic_content)));
    out.push('\n');

    out.push_str(FOOTER_NOTE);
    out.push('\n');
    out
}

/// Pretty JSON, flat: `url` plus every metric and cost field.
pub fn to_json(a: &Analysis) -> serde_json::Result<String> {
    serde_json::to_string_pretty(a)
}

fn row(label: &str, value: &str) -> String {
    format!("{label:<22}{value}\n")
}
