// src/core/mod.rs

pub mod html;
pub mod net;
pub mod sanitize;
pub mod url;

pub use self::url::is_valid_http_url;
