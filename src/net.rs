// src/net.rs
// Single blocking GET per run. No retry, no backoff.

use std::error::Error;
use std::time::Duration;

use crate::params::{ACCEPT_LANGUAGE, REQUEST_TIMEOUT_SECS, USER_AGENT};

/// Fetch one game page and return the body as a String.
/// Non-2xx statuses are errors; the extraction core is never reached.
pub fn fetch(url: &str) -> Result<String, Box<dyn Error>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;

    let resp = client
        .get(url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .header(reqwest::header::ACCEPT_LANGUAGE, ACCEPT_LANGUAGE)
        .send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp.text()?)
}
