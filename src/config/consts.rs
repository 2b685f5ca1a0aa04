// src/config/consts.rs

// Rate card (USD)
pub const FRONTEND_HOURLY_RATE: f64 = 75.0;
pub const BACKEND_HOURLY_RATE: f64 = 85.0;
pub const BASE_HOSTING_COST: f64 = 50.0; // per month
pub const MAINTENANCE_PERCENTAGE: f64 = 0.15; // of development cost, per month

// Net config
pub const USER_AGENT: &str = concat!("site_cost/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Local state
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";
pub const LOG_ENV_VAR: &str = "SITE_COST_LOG";

// GUI
pub const APP_TITLE: &str = "How much this app cost";
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 760.0;
