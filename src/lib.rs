// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod gui;

pub mod analysis;
pub mod costs;
pub mod error;
pub mod extract;
pub mod metrics;
pub mod progress;
pub mod rates;
pub mod report;

pub use analysis::{analyze, Analysis};
pub use costs::{calculate_costs, CostBreakdown};
pub use error::AnalysisError;
pub use extract::{ContentExtractor, ExtractError, HttpExtractor};
pub use metrics::{compute_metrics, ComplexityMetrics};
pub use rates::RateTable;
