// tests/report_output.rs
//
// CLI-facing output: flat JSON and the plain-text report.
//
use site_cost::{analyze, report, ExtractError, RateTable};

fn sample() -> site_cost::Analysis {
    let stub = |_: &str| Ok::<_, ExtractError>(String::from("Sign in with login. Contact form."));
    analyze("https://example.com", &stub, &RateTable::default(), None).unwrap()
}

#[test]
fn json_is_flat() {
    let json = report::to_json(&sample()).unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    let obj = v.as_object().unwrap();

    for key in [
        "url",
        "content_length",
        "complexity_score",
        "estimated_pages",
        "has_forms",
        "has_authentication",
        "has_dynamic_content",
        "frontend_hours",
        "backend_hours",
        "frontend_cost",
        "backend_cost",
        "development_cost",
        "hosting_cost",
        "maintenance_cost",
    ] {
        assert!(obj.contains_key(key), "missing {key}");
    }
    assert!(!obj.contains_key("metrics"));
    assert!(!obj.contains_key("costs"));
    assert_eq!(obj["has_forms"], serde_json::Value::Bool(true));
    assert_eq!(obj["has_authentication"], serde_json::Value::Bool(true));
}

#[test]
fn text_report_has_every_figure() {
    let a = sample();
    let text = report::render_text(&a);

    assert!(text.starts_with("Website: https://example.com"));
    assert!(text.contains(&report::format_usd(a.costs.development_cost)));
    assert!(text.contains("Monthly Hosting Cost"));
    assert!(text.contains("Server costs, CDN services, SSL certificates"));
    assert!(text.contains("Complexity Score"));
    assert!(text.contains("1.0/10"));
    assert!(text.contains("Forms"));
    assert!(text.trim_end().ends_with(report::FOOTER_NOTE));
}
