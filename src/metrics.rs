// src/metrics.rs
//! Heuristic complexity signals derived from a page's extracted text.
//!
//! Everything here is a case-insensitive (ASCII) substring test over the whole
//! text. The keywords and thresholds are fixed; estimates produced by other
//! tools from the same text must agree exactly, so nothing is deduplicated
//! (`"api"` feeds both the score and the dynamic-content flag).

use serde::Serialize;

use crate::core::html::to_lower;

const BASE_SCORE: f64 = 1.0;
const MAX_SCORE: f64 = 10.0;

const LARGE_CONTENT_CHARS: usize = 10_000;
const MEDIUM_CONTENT_CHARS: usize = 5_000;

/// (keyword, score bonus)
const SCORE_KEYWORDS: &[(&str, f64)] = &[
    ("database", 1.0),
    ("api", 1.0),
    ("authentication", 1.0),
    ("payment", 2.0),
];

const BASE_PAGES: usize = 5; // home, about, contact, …
const CHARS_PER_PAGE: usize = 3_000;

const FORM_TERMS: &[&str] = &["form"];
const AUTH_TERMS: &[&str] = &["login", "signin", "register"];
const DYNAMIC_TERMS: &[&str] = &["javascript", "api", "ajax"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplexityMetrics {
    pub content_length: usize,
    pub complexity_score: f64,
    pub estimated_pages: usize,
    pub has_forms: bool,
    pub has_authentication: bool,
    pub has_dynamic_content: bool,
}

/// Score, page estimate and feature flags for one extracted text.
///
/// Callers reject empty content before getting here; an empty string would
/// just score as the simplest possible site.
pub fn compute_metrics(text: &str) -> ComplexityMetrics {
    let lc = to_lower(text);
    let len = char_len(text);

    ComplexityMetrics {
        content_length: len,
        complexity_score: score_lowered(&lc, len),
        estimated_pages: pages_for_len(len),
        has_forms: contains_any(&lc, FORM_TERMS),
        has_authentication: contains_any(&lc, AUTH_TERMS),
        has_dynamic_content: contains_any(&lc, DYNAMIC_TERMS),
    }
}

/// Complexity score in `[1.0, 10.0]`.
pub fn complexity_score(text: &str) -> f64 {
    score_lowered(&to_lower(text), char_len(text))
}

pub fn estimate_page_count(text: &str) -> usize {
    pages_for_len(char_len(text))
}

fn score_lowered(lc: &str, len: usize) -> f64 {
    let mut score = BASE_SCORE;

    if len > LARGE_CONTENT_CHARS {
        score += 2.0;
    } else if len > MEDIUM_CONTENT_CHARS {
        score += 1.0;
    }

    for (kw, bonus) in SCORE_KEYWORDS {
        if lc.contains(kw) {
            score += bonus;
        }
    }

    score.min(MAX_SCORE)
}

fn pages_for_len(len: usize) -> usize {
    BASE_PAGES + len / CHARS_PER_PAGE
}

fn contains_any(lc: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| lc.contains(t))
}

// Lengths are counted in characters, not bytes.
fn char_len(text: &str) -> usize {
    text.chars().count()
}
