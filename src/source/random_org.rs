//! random.org-backed pattern source
//!
//! Draws true-random integers from the random.org plain-text API, one value
//! per line. Needs network access; the local source is the offline default.

use super::{PatternSource, SourceError, check_parameters};

const API_URL: &str = "https://www.random.org/integers/";

/// Pattern source backed by the random.org integers API
pub struct RandomOrgSource {
    client: reqwest::blocking::Client,
}

impl RandomOrgSource {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for RandomOrgSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternSource for RandomOrgSource {
    fn generate(&self, count: usize, min: u32, max: u32) -> Result<Vec<String>, SourceError> {
        check_parameters(count, min, max)?;

        let response = self
            .client
            .get(API_URL)
            .query(&[
                ("num", count.to_string()),
                ("min", min.to_string()),
                ("max", max.to_string()),
                ("col", "1".to_string()),
                ("base", "10".to_string()),
                ("format", "plain".to_string()),
                ("rnd", "new".to_string()),
            ])
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| SourceError::Http(e.to_string()))?;

        let body = response
            .text()
            .map_err(|e| SourceError::Http(e.to_string()))?;

        parse_body(&body, count)
    }
}

/// Parse the plain-text response body: one integer per line
fn parse_body(body: &str, expected: usize) -> Result<Vec<String>, SourceError> {
    let symbols: Vec<String> = body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect();

    if symbols.len() != expected {
        return Err(SourceError::Malformed(format!(
            "expected {expected} values, got {}",
            symbols.len()
        )));
    }

    if let Some(bad) = symbols.iter().find(|s| s.parse::<i64>().is_err()) {
        return Err(SourceError::Malformed(format!(
            "non-numeric value in response: {bad:?}"
        )));
    }

    Ok(symbols)
}
