// benches/metrics.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use site_cost::{compute_metrics, core::html::extract_text};

/// A few hundred KB of plausible markup.
fn sample_html() -> String {
    let mut html = String::from("<html><head><script>var x = 1;</script></head><body>");
    for i in 0..2_000 {
        html.push_str(&format!(
            "<div class=\"card\"><h2>Item {i}</h2><p>Fast checkout with payment and \
             <a href=\"/p/{i}\">details</a>.</p><img src=\"/img/{i}.png\" alt=\"Item {i}\"></div>"
        ));
    }
    html.push_str("<form><input name=\"q\"></form></body></html>");
    html
}

fn bench_pipeline(c: &mut Criterion) {
    let html = sample_html();
    let text = extract_text(&html);

    c.bench_function("extract_text", |b| {
        b.iter(|| black_box(extract_text(black_box(&html))).len())
    });

    c.bench_function("compute_metrics", |b| {
        b.iter(|| black_box(compute_metrics(black_box(&text))))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
