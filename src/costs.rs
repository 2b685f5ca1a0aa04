// src/costs.rs
use serde::Serialize;

use crate::metrics::ComplexityMetrics;
use crate::rates::RateTable;

// Frontend hours
const FRONTEND_BASE_HOURS: f64 = 40.0;
const FRONTEND_HOURS_PER_PAGE: f64 = 4.0;
const FRONTEND_FORMS_HOURS: f64 = 20.0;
const FRONTEND_DYNAMIC_HOURS: f64 = 30.0;

// Backend hours
const BACKEND_BASE_HOURS: f64 = 20.0;
const BACKEND_AUTH_HOURS: f64 = 40.0;
const BACKEND_HOURS_PER_PAGE: f64 = 2.0; // endpoints per page
const BACKEND_DYNAMIC_HOURS: f64 = 30.0;

/// Score at which hosting costs exactly the base price.
const NEUTRAL_SCORE: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub frontend_hours: f64,
    pub backend_hours: f64,
    pub frontend_cost: f64,
    pub backend_cost: f64,
    /// Always `frontend_cost + backend_cost`.
    pub development_cost: f64,
    /// Monthly.
    pub hosting_cost: f64,
    /// Monthly.
    pub maintenance_cost: f64,
}

pub fn frontend_hours(metrics: &ComplexityMetrics) -> f64 {
    let forms = if metrics.has_forms { FRONTEND_FORMS_HOURS } else { 0.0 };
    let dynamic = if metrics.has_dynamic_content { FRONTEND_DYNAMIC_HOURS } else { 0.0 };

    FRONTEND_BASE_HOURS + metrics.estimated_pages as f64 * FRONTEND_HOURS_PER_PAGE + forms + dynamic
}

pub fn backend_hours(metrics: &ComplexityMetrics) -> f64 {
    let auth = if metrics.has_authentication { BACKEND_AUTH_HOURS } else { 0.0 };
    let dynamic = if metrics.has_dynamic_content { BACKEND_DYNAMIC_HOURS } else { 0.0 };

    BACKEND_BASE_HOURS + auth + metrics.estimated_pages as f64 * BACKEND_HOURS_PER_PAGE + dynamic
}

/// Price one set of metrics against a rate table. Plain `f64` all the way;
/// rounding to cents is left to whoever displays the numbers.
pub fn calculate_costs(metrics: &ComplexityMetrics, rates: &RateTable) -> CostBreakdown {
    let fe_hours = frontend_hours(metrics);
    let be_hours = backend_hours(metrics);

    let frontend_cost = fe_hours * rates.frontend_hourly_rate();
    let backend_cost = be_hours * rates.backend_hourly_rate();
    let development_cost = frontend_cost + backend_cost;

    let complexity_multiplier = metrics.complexity_score / NEUTRAL_SCORE;
    let hosting_cost = rates.base_hosting_cost() * complexity_multiplier;

    let maintenance_cost = development_cost * rates.maintenance_percentage();

    CostBreakdown {
        frontend_hours: fe_hours,
        backend_hours: be_hours,
        frontend_cost,
        backend_cost,
        development_cost,
        hosting_cost,
        maintenance_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::compute_metrics;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn metrics(pages: usize, forms: bool, auth: bool, dynamic: bool) -> ComplexityMetrics {
        ComplexityMetrics {
            content_length: 100,
            complexity_score: 5.0,
            estimated_pages: pages,
            has_forms: forms,
            has_authentication: auth,
            has_dynamic_content: dynamic,
        }
    }

    #[test]
    fn simplest_site_with_default_rates() {
        let c = calculate_costs(&compute_metrics("a"), &RateTable::default());
        assert_eq!(c.frontend_hours, 60.0);
        assert_eq!(c.backend_hours, 30.0);
        assert!(approx(c.frontend_cost, 4500.0));
        assert!(approx(c.backend_cost, 2550.0));
        assert!(approx(c.development_cost, 7050.0));
        assert!(approx(c.hosting_cost, 10.0));
        assert!(approx(c.maintenance_cost, 1057.5));
    }

    #[test]
    fn every_flag_adds_hours() {
        let m = metrics(5, true, true, true);
        assert_eq!(frontend_hours(&m), 40.0 + 20.0 + 20.0 + 30.0);
        assert_eq!(backend_hours(&m), 20.0 + 40.0 + 10.0 + 30.0);
    }

    #[test]
    fn more_pages_never_means_fewer_hours() {
        for flags in [(false, false, false), (true, true, true), (true, false, true)] {
            let (f, a, d) = flags;
            let mut prev = (0.0, 0.0);
            for pages in 0..50 {
                let m = metrics(pages, f, a, d);
                let now = (frontend_hours(&m), backend_hours(&m));
                assert!(now.0 >= prev.0 && now.1 >= prev.1);
                prev = now;
            }
        }
    }

    #[test]
    fn development_is_sum_of_parts() {
        let rates = RateTable::new(91.5, 123.25, 40.0, 0.2).unwrap();
        for pages in [0, 7, 333] {
            let c = calculate_costs(&metrics(pages, true, false, true), &rates);
            assert_eq!(c.development_cost, c.frontend_cost + c.backend_cost);
            assert!(approx(c.maintenance_cost, c.development_cost * 0.2));
        }
    }

    #[test]
    fn hosting_scales_with_score() {
        let rates = RateTable::default();
        let mut m = metrics(5, false, false, false);

        m.complexity_score = 5.0;
        assert!(approx(calculate_costs(&m, &rates).hosting_cost, 50.0));

        m.complexity_score = 10.0;
        assert!(approx(calculate_costs(&m, &rates).hosting_cost, 100.0));
    }
}
