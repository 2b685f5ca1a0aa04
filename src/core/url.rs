// src/core/url.rs
use url::Url;

/// True iff `s` is an absolute `http`/`https` URL with a non-empty host.
/// Never panics; anything that fails to parse is simply `false`.
pub fn is_valid_http_url(s: &str) -> bool {
    let Ok(parsed) = Url::parse(s) else {
        return false;
    };
    // `Url` lower-cases the scheme while parsing.
    let scheme_ok = matches!(parsed.scheme(), "http" | "https");
    let host_ok = parsed.host_str().is_some_and(|h| !h.is_empty());
    scheme_ok && host_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(is_valid_http_url("https://example.com"));
        assert!(is_valid_http_url("http://example.com/path?q=1"));
        assert!(is_valid_http_url("http://localhost:8080"));
        assert!(is_valid_http_url("HTTPS://Example.com"));
    }

    #[test]
    fn rejects_other_schemes_and_bare_hosts() {
        assert!(!is_valid_http_url("ftp://example.com"));
        assert!(!is_valid_http_url("example.com"));
        assert!(!is_valid_http_url("mailto:someone@example.com"));
        assert!(!is_valid_http_url("file:///etc/hosts"));
    }

    #[test]
    fn rejects_garbage_without_panicking() {
        assert!(!is_valid_http_url(""));
        assert!(!is_valid_http_url("   "));
        assert!(!is_valid_http_url("https://"));
        assert!(!is_valid_http_url("http://[::1"));
        assert!(!is_valid_http_url("://missing.scheme"));
    }
}
