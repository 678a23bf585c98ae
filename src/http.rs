use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::AppError;

/// Human-readable reason for a non-success status code.
pub fn status_reason(code: u16) -> String {
    match code {
        400 => "bad syntax or invalid parameters".to_string(),
        401 => "API authorization failed".to_string(),
        403 => "insufficient permission for endpoint".to_string(),
        404 => "no route matches the given URI".to_string(),
        500 => "server encountered an unexpected condition".to_string(),
        other => format!("unknown error with code {other}"),
    }
}

/// Shared GET client. Clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Fetches `url` and returns the trimmed response body.
    pub async fn fetch(&self, url: &str) -> Result<String, AppError> {
        debug!("GET {}", redact(url));
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            let reason = status_reason(status.as_u16());
            error!("Request to {} failed: {} ({})", redact(url), status, reason);
            return Err(AppError::Http {
                status_code: status.as_u16(),
                reason,
            });
        }

        let body = response.text().await?;
        Ok(body.trim().to_string())
    }

    /// Fetches `url` and decodes the body as `T`.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        context: &str,
    ) -> Result<T, AppError> {
        let body = self.fetch(url).await?;
        serde_json::from_str(&body).map_err(|source| AppError::JsonShape {
            context: context.to_string(),
            source,
        })
    }
}

// Keeps the static key out of the logs.
fn redact(url: &str) -> String {
    let Some(start) = url.find("apikey=") else {
        return url.to_string();
    };
    let value_start = start + "apikey=".len();
    let value_end = url[value_start..]
        .find('&')
        .map_or(url.len(), |offset| value_start + offset);
    format!("{}***{}", &url[..value_start], &url[value_end..])
}
