// src/gui/mod.rs
use std::sync::{Mutex, MutexGuard, PoisonError};

pub mod app;
pub mod components;
pub mod progress;
pub mod theme;

pub use app::run;

/// Lock a shared slot; a worker that panicked mid-write still leaves usable data.
pub(crate) fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}
