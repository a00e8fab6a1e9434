//! Save Page Now.
//!
//! `POST https://web.archive.org/save/{target}` with the target repeated as
//! the `url` form field.

use crate::http::{default_client, transport};
use archivedotorg_core::{form_encode, ArchiveError, ArchiveResult, SaveOptions};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode, Url};
use std::time::Duration;

pub const SAVE_URL: &str = "https://web.archive.org/save";

const HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct SaveRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: String,
}

/// Status and headers of a save request. The status is not interpreted.
#[derive(Debug, Clone)]
pub struct SaveResult {
    pub status: StatusCode,
    pub headers: HeaderMap,
}

impl SaveResult {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Build the capture request for `target` against `endpoint`.
pub fn build_save_request(
    endpoint: &str,
    target: &str,
    options: SaveOptions,
) -> ArchiveResult<SaveRequest> {
    Url::parse(target).map_err(|e| {
        ArchiveError::InvalidRequest(format!("invalid target URL {:?}: {}", target, e))
    })?;

    let raw = format!("{}/{}", endpoint.trim_end_matches('/'), target);
    let url = Url::parse(&raw)
        .map_err(|e| ArchiveError::InvalidRequest(format!("invalid save URL {:?}: {}", raw, e)))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/x-www-form-urlencoded"),
    );

    let mut fields: Vec<(&str, &str)> = options.form_fields();
    fields.push(("url", target));

    Ok(SaveRequest {
        method: Method::POST,
        url,
        headers,
        body: form_encode(fields),
    })
}

/// Client for the Wayback Machine's Save Page Now endpoint.
#[derive(Clone, Debug)]
pub struct WebClient {
    client: Client,
    save_endpoint: String,
}

impl WebClient {
    pub fn new() -> ArchiveResult<Self> {
        let client = default_client(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))?;
        Ok(Self::with_http_client(client))
    }

    pub fn with_http_client(client: Client) -> Self {
        Self {
            client,
            save_endpoint: SAVE_URL.to_string(),
        }
    }

    /// Override the save endpoint (defaults to [`SAVE_URL`]).
    pub fn save_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.save_endpoint = endpoint.into();
        self
    }

    /// Ask the Wayback Machine to capture `target`.
    ///
    /// Any HTTP status is returned as a [`SaveResult`]; only failures before
    /// the response head arrives are errors.
    pub async fn save(&self, target: &str, options: SaveOptions) -> ArchiveResult<SaveResult> {
        let request = build_save_request(&self.save_endpoint, target, options)?;

        let response = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await
            .map_err(transport("Unable to perform the save request"))?;

        let status = response.status();
        let headers = response.headers().clone();
        // Status and headers are the result; a body that cannot be drained
        // does not change them.
        if let Err(e) = response.bytes().await {
            tracing::debug!(
                target_url = %target,
                status = status.as_u16(),
                error = %e,
                "Unable to drain the save response body"
            );
        }

        tracing::info!(target_url = %target, status = status.as_u16(), "Save request sent");

        Ok(SaveResult { status, headers })
    }
}
