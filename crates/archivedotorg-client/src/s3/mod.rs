//! IA-S3 uploads.

pub mod identifier;
pub mod request;

pub use identifier::{build_identifier_lookup, decode_identifier_response, IDENTIFIER_LOOKUP_URL};
pub use request::{build_upload_request, upload_headers, upload_url, UploadRequest, DEFAULT_URL};

use crate::http::{default_client, into_body, transport};
use archivedotorg_core::{
    ArchiveConfig, ArchiveError, ArchiveResult, Credentials, IdentifierResponse, UploadOptions,
};
use reqwest::Client;
use serde::Serialize;
use std::time::Instant;

/// Outcome of a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadReceipt {
    /// Identifier the file was stored under.
    pub identifier: String,
    pub url: String,
    pub status: u16,
}

/// Client for the IA-S3 upload API.
#[derive(Clone, Debug)]
pub struct S3Client {
    client: Client,
    credentials: Option<Credentials>,
    base_url: Option<String>,
    identifier_endpoint: String,
}

impl S3Client {
    pub fn new(credentials: Credentials) -> ArchiveResult<Self> {
        let client = default_client(ArchiveConfig::default().http_timeout())?;
        Ok(Self::with_http_client(client, credentials))
    }

    /// Credentials, base URL and timeout from `config`.
    ///
    /// Missing credentials are not an error here: identifier lookups work
    /// without them, and [`S3Client::upload`] fails with a configuration error
    /// before sending anything.
    pub fn from_config(config: &ArchiveConfig) -> ArchiveResult<Self> {
        let client = default_client(config.http_timeout())?;
        Ok(Self {
            client,
            credentials: config.credentials().ok(),
            base_url: config.s3_url.clone(),
            identifier_endpoint: IDENTIFIER_LOOKUP_URL.to_string(),
        })
    }

    /// Use a caller-supplied HTTP client (shared connection pool, custom TLS, ...).
    pub fn with_http_client(client: Client, credentials: Credentials) -> Self {
        Self {
            client,
            credentials: Some(credentials),
            base_url: None,
            identifier_endpoint: IDENTIFIER_LOOKUP_URL.to_string(),
        }
    }

    /// Override the upload endpoint (defaults to [`DEFAULT_URL`]).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the identifier lookup endpoint.
    pub fn identifier_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.identifier_endpoint = endpoint.into();
        self
    }

    /// Upload `opts.upload` as `opts.file_name` and return where it went.
    ///
    /// Unless `skip_unique_check` is set, the identifier is confirmed with the
    /// lookup service first and its answer is used. The upload fails if that
    /// check fails; nothing is sent to the upload endpoint in that case.
    pub async fn upload(&self, opts: UploadOptions) -> ArchiveResult<UploadReceipt> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or_else(ArchiveError::missing_credentials)?;
        let identifier = self.resolve_identifier(&opts).await?;
        let request =
            build_upload_request(opts, credentials, self.base_url.as_deref(), &identifier)?;

        tracing::debug!(
            identifier = %identifier,
            url = %request.url,
            size_hint = ?request.body.size_hint(),
            headers = request.headers.len(),
            "Built upload request"
        );

        let start = Instant::now();
        let url = request.url.clone();
        let response = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .body(into_body(request.body))
            .send()
            .await
            .map_err(transport("Unable to perform the upload request"))?;

        let status = response.status();
        let body = response.text().await.map_err(transport(format!(
            "Unable to read the {} response body",
            status.as_u16()
        )))?;

        if !status.is_success() {
            return Err(ArchiveError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(
            identifier = %identifier,
            url = %url,
            status = status.as_u16(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Upload successful"
        );

        Ok(UploadReceipt {
            identifier,
            url: url.to_string(),
            status: status.as_u16(),
        })
    }

    /// Identifier `opts` will be uploaded under.
    ///
    /// With `skip_unique_check` this is [`UploadOptions::derive_identifier`];
    /// otherwise the candidate is sent to the lookup service and the
    /// identifier it returns is used.
    pub async fn resolve_identifier(&self, opts: &UploadOptions) -> ArchiveResult<String> {
        let candidate = opts.derive_identifier();
        if opts.skip_unique_check {
            return Ok(candidate);
        }

        let response = match self.find_identifier(&candidate).await {
            Ok(response) => response,
            Err(e) => {
                return Err(ArchiveError::IdentifierUnresolved {
                    candidate,
                    reason: "the lookup request failed".to_string(),
                    source: Some(Box::new(e)),
                })
            }
        };

        if !response.success {
            return Err(ArchiveError::IdentifierUnresolved {
                candidate,
                reason: "the lookup reported no success".to_string(),
                source: None,
            });
        }
        if response.identifier.is_empty() {
            return Err(ArchiveError::IdentifierUnresolved {
                candidate,
                reason: "the lookup returned an empty identifier".to_string(),
                source: None,
            });
        }

        tracing::debug!(
            candidate = %candidate,
            identifier = %response.identifier,
            "Resolved unique identifier"
        );
        Ok(response.identifier)
    }

    /// Ask archive.org whether `candidate` is available.
    ///
    /// `success = false` is returned as-is; deciding what it means is up to
    /// the caller.
    pub async fn find_identifier(&self, candidate: &str) -> ArchiveResult<IdentifierResponse> {
        let request = build_identifier_lookup(&self.identifier_endpoint, candidate)?;

        let response = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await
            .map_err(transport("Unable to perform the identifier request"))?;

        let body = response
            .bytes()
            .await
            .map_err(transport("Unable to read the identifier response"))?;

        decode_identifier_response(&body)
    }
}
