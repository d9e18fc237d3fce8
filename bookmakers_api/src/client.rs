//! HTTP client for the bookmakers data source.

use std::time::Duration;

use url::Url;

use crate::{types::Bookmaker, Error};

/// Fetches and validates the bookmakers document.
///
/// Each request builds a fresh `reqwest::Client` with a 30-second
/// timeout. Nothing is cached between loads; every tab activation
/// re-fetches the full document.
pub struct Client {
    /// Base URL the data source is served under.
    base_api_url: String,
}

impl Client {
    /// Creates a client reading `bookmakers.json` relative to `base_url`.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn get_url(&self) -> Result<Url, Error> {
        Url::parse(format!("{}/bookmakers.json", &self.base_api_url).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    /// Fetches the full bookmakers array.
    ///
    /// Fails with [`Error::HttpStatus`] on a non-success status,
    /// [`Error::Parse`] when the body is not valid JSON (or its elements
    /// are not entries), and [`Error::DataShape`] when the decoded value
    /// is not a non-empty array.
    pub async fn get_bookmakers(&self) -> Result<Vec<Bookmaker>, Error> {
        let url = self.get_url()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json, text/plain, */*")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let value = serde_json::from_str::<serde_json::Value>(&body).map_err(|e| {
            tracing::error!("Failed to parse resource: {} | body: {}", e, truncate_body(&body));
            Error::Parse(e)
        })?;

        let items = match value {
            serde_json::Value::Array(items) if items.is_empty() => {
                tracing::error!("Bookmakers document is an empty array");
                return Err(Error::DataShape("bookmakers list is empty".to_string()));
            }
            serde_json::Value::Array(items) => items,
            _ => {
                tracing::error!("Bookmakers document is not an array");
                return Err(Error::DataShape(
                    "bookmakers document is not an array".to_string(),
                ));
            }
        };

        serde_json::from_value(serde_json::Value::Array(items)).map_err(|e| {
            tracing::error!("Failed to decode bookmaker entries: {}", e);
            Error::Parse(e)
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back off to a char boundary so multibyte bodies cannot panic here.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
