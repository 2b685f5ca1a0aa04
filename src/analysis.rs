// src/analysis.rs
use serde::Serialize;

use crate::{
    core::url::is_valid_http_url,
    costs::{calculate_costs, CostBreakdown},
    error::AnalysisError,
    extract::{ContentExtractor, ExtractError},
    metrics::{compute_metrics, ComplexityMetrics},
    progress::{NullProgress, Progress},
    rates::RateTable,
};

const STAGES: usize = 3; // fetch, score, price

/// Everything one run produces. Serializes flat: `url` plus the metric and
/// cost fields side by side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub url: String,
    #[serde(flatten)]
    pub metrics: ComplexityMetrics,
    #[serde(flatten)]
    pub costs: CostBreakdown,
}

/// Validate → extract → score → price.
///
/// The URL is checked before the extractor is touched. Empty content is an
/// `ExtractionFailed`, never a metrics object. Whitespace is still content
/// and gets scored like any other text.
pub fn analyze(
    url: &str,
    extractor: &dyn ContentExtractor,
    rates: &RateTable,
    progress: Option<&mut dyn Progress>,
) -> Result<Analysis, AnalysisError> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    progress.begin(STAGES);
    let res = run_stages(url, extractor, rates, progress);
    progress.finish();

    match &res {
        Ok(a) => logf!(
            "Analyze: OK url={} chars={} score={:.1} development={:.2}",
            a.url, a.metrics.content_length, a.metrics.complexity_score, a.costs.development_cost
        ),
        Err(e) => loge!("Analyze: {e}"),
    }
    res
}

fn run_stages(
    url: &str,
    extractor: &dyn ContentExtractor,
    rates: &RateTable,
    progress: &mut dyn Progress,
) -> Result<Analysis, AnalysisError> {
    if !is_valid_http_url(url) {
        return Err(AnalysisError::InvalidUrl(s!(url)));
    }

    progress.log("Analyzing website…");
    let text = extractor
        .fetch_and_extract(url)
        .and_then(|t| if t.is_empty() { Err(ExtractError::Empty) } else { Ok(t) })
        .map_err(|source| AnalysisError::ExtractionFailed { url: s!(url), source })?;

    progress.log("Scoring complexity…");
    let metrics = compute_metrics(&text);
    logd!("Analyze: metrics {:?}", metrics);

    progress.log("Estimating costs…");
    let costs = calculate_costs(&metrics, rates);

    Ok(Analysis { url: s!(url), metrics, costs })
}
