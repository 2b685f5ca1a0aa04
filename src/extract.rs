// src/extract.rs
use thiserror::Error;

use crate::config::options::FetchOptions;
use crate::core::{html, net};

/// Every way of not getting usable text out of a URL. A timeout is one more
/// flavour of failure, not a separate kind.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("request timed out")]
    Timeout,
    #[error("request failed")]
    Http(#[source] reqwest::Error),
    #[error("server answered HTTP {0}")]
    Status(u16),
    #[error("page has no readable text")]
    Empty,
}

impl From<reqwest::Error> for ExtractError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() { ExtractError::Timeout } else { ExtractError::Http(e) }
    }
}

/// Anything that can turn a URL into plain text.
pub trait ContentExtractor {
    fn fetch_and_extract(&self, url: &str) -> Result<String, ExtractError>;
}

impl<F> ContentExtractor for F
where
    F: Fn(&str) -> Result<String, ExtractError>,
{
    fn fetch_and_extract(&self, url: &str) -> Result<String, ExtractError> {
        self(url)
    }
}

/// Fetch over HTTP(S) and strip the HTML down to readable text.
///
/// A page with no text comes back as `""`; `analyze` decides what that means.
#[derive(Clone, Debug, Default)]
pub struct HttpExtractor {
    opts: FetchOptions,
}

impl HttpExtractor {
    pub fn new(opts: FetchOptions) -> Self {
        Self { opts }
    }
}

impl ContentExtractor for HttpExtractor {
    fn fetch_and_extract(&self, url: &str) -> Result<String, ExtractError> {
        let client = net::client(&self.opts)?;
        let page = net::http_get(&client, url)?;

        let text = html::extract_text(&page);
        logd!("Extract: {} chars of text from {} bytes of HTML", text.chars().count(), page.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_extractors() {
        let fixed = |_: &str| Ok::<_, ExtractError>(s!("static text"));
        assert_eq!(fixed.fetch_and_extract("https://example.com").unwrap(), "static text");

        let failing = |_: &str| Err::<String, _>(ExtractError::Status(503));
        let err = failing.fetch_and_extract("https://example.com").unwrap_err();
        assert_eq!(err.to_string(), "server answered HTTP 503");
    }
}
