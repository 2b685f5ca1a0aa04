// src/rates.rs
use serde::Serialize;
use thiserror::Error;

use crate::config::consts::{
    BACKEND_HOURLY_RATE, BASE_HOSTING_COST, FRONTEND_HOURLY_RATE, MAINTENANCE_PERCENTAGE,
};

/// Hourly rates and percentages used to turn hours into dollars.
///
/// Fields are private so every table in circulation went through [`RateTable::new`]
/// (or is the default card): all values positive, maintenance in `(0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RateTable {
    frontend_hourly_rate: f64,
    backend_hourly_rate: f64,
    base_hosting_cost: f64,
    maintenance_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RateError {
    #[error("{field} must be greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f64 },
    #[error("maintenance percentage must be in (0, 1] (got {0})")]
    MaintenanceOutOfRange(f64),
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            frontend_hourly_rate: FRONTEND_HOURLY_RATE,
            backend_hourly_rate: BACKEND_HOURLY_RATE,
            base_hosting_cost: BASE_HOSTING_COST,
            maintenance_percentage: MAINTENANCE_PERCENTAGE,
        }
    }
}

impl RateTable {
    pub fn new(
        frontend_hourly_rate: f64,
        backend_hourly_rate: f64,
        base_hosting_cost: f64,
        maintenance_percentage: f64,
    ) -> Result<Self, RateError> {
        positive("frontend_hourly_rate", frontend_hourly_rate)?;
        positive("backend_hourly_rate", backend_hourly_rate)?;
        positive("base_hosting_cost", base_hosting_cost)?;
        // NaN fails both comparisons, so it lands here too.
        if !(maintenance_percentage > 0.0 && maintenance_percentage <= 1.0) {
            return Err(RateError::MaintenanceOutOfRange(maintenance_percentage));
        }

        Ok(Self {
            frontend_hourly_rate,
            backend_hourly_rate,
            base_hosting_cost,
            maintenance_percentage,
        })
    }

    /// Start from this table and replace whichever values are given.
    pub fn with_overrides(
        &self,
        frontend_hourly_rate: Option<f64>,
        backend_hourly_rate: Option<f64>,
        base_hosting_cost: Option<f64>,
        maintenance_percentage: Option<f64>,
    ) -> Result<Self, RateError> {
        Self::new(
            frontend_hourly_rate.unwrap_or(self.frontend_hourly_rate),
            backend_hourly_rate.unwrap_or(self.backend_hourly_rate),
            base_hosting_cost.unwrap_or(self.base_hosting_cost),
            maintenance_percentage.unwrap_or(self.maintenance_percentage),
        )
    }

    pub fn frontend_hourly_rate(&self) -> f64 { self.frontend_hourly_rate }
    pub fn backend_hourly_rate(&self) -> f64 { self.backend_hourly_rate }
    pub fn base_hosting_cost(&self) -> f64 { self.base_hosting_cost }
    pub fn maintenance_percentage(&self) -> f64 { self.maintenance_percentage }
}

fn positive(field: &'static str, value: f64) -> Result<(), RateError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(RateError::NonPositive { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_card_matches_published_rates() {
        let r = RateTable::default();
        assert_eq!(r.frontend_hourly_rate(), 75.0);
        assert_eq!(r.backend_hourly_rate(), 85.0);
        assert_eq!(r.base_hosting_cost(), 50.0);
        assert_eq!(r.maintenance_percentage(), 0.15);
    }

    #[test]
    fn new_rejects_non_positive_values() {
        let err = RateTable::new(0.0, 85.0, 50.0, 0.15).unwrap_err();
        assert!(matches!(err, RateError::NonPositive { field: "frontend_hourly_rate", .. }));

        let err = RateTable::new(75.0, 85.0, -1.0, 0.15).unwrap_err();
        assert!(matches!(err, RateError::NonPositive { field: "base_hosting_cost", .. }));
    }

    #[test]
    fn maintenance_must_be_a_fraction() {
        assert!(RateTable::new(75.0, 85.0, 50.0, 1.0).is_ok());
        assert_eq!(
            RateTable::new(75.0, 85.0, 50.0, 1.5),
            Err(RateError::MaintenanceOutOfRange(1.5))
        );
        assert!(RateTable::new(75.0, 85.0, 50.0, 0.0).is_err());
        assert!(RateTable::new(75.0, 85.0, 50.0, f64::NAN).is_err());
    }

    #[test]
    fn overrides_keep_unset_values() {
        let r = RateTable::default()
            .with_overrides(Some(100.0), None, None, Some(0.2))
            .unwrap();
        assert_eq!(r.frontend_hourly_rate(), 100.0);
        assert_eq!(r.backend_hourly_rate(), 85.0);
        assert_eq!(r.maintenance_percentage(), 0.2);
    }
}
