// src/core/net.rs
// Blocking HTTP GET; callers keep it off the UI thread.

use reqwest::blocking::Client;

use crate::config::options::FetchOptions;
use crate::extract::ExtractError;

pub fn client(opts: &FetchOptions) -> Result<Client, ExtractError> {
    let client = Client::builder()
        .timeout(opts.timeout)
        .user_agent(opts.user_agent.as_str())
        .build()?;
    Ok(client)
}

/// Body of a 2xx response as text; any other status is an error.
pub fn http_get(client: &Client, url: &str) -> Result<String, ExtractError> {
    logd!("Fetch: GET {url}");
    let resp = client.get(url).send()?;

    let status = resp.status();
    if !status.is_success() {
        loge!("Fetch: {url} answered {status}");
        return Err(ExtractError::Status(status.as_u16()));
    }

    let body = resp.text()?;
    logd!("Fetch: {} bytes from {}", body.len(), url);
    Ok(body)
}
