//! `identifierAvailable` lookup against the archive.org upload API.

use archivedotorg_core::{form_encode, ArchiveError, ArchiveResult, IdentifierResponse};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, Url};

pub const IDENTIFIER_LOOKUP_URL: &str = "https://archive.org/upload/app/upload_api.php";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone)]
pub struct IdentifierLookupRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: String,
}

pub fn build_identifier_lookup(
    endpoint: &str,
    candidate: &str,
) -> ArchiveResult<IdentifierLookupRequest> {
    let url = Url::parse(endpoint).map_err(|e| {
        ArchiveError::InvalidRequest(format!("invalid identifier endpoint {:?}: {}", endpoint, e))
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));

    let body = form_encode([
        ("name", "identifierAvailable"),
        ("identifier", candidate),
        ("findUnique", "true"),
    ]);

    Ok(IdentifierLookupRequest {
        method: Method::POST,
        url,
        headers,
        body,
    })
}

pub fn decode_identifier_response(body: &[u8]) -> ArchiveResult<IdentifierResponse> {
    serde_json::from_slice(body).map_err(ArchiveError::Decode)
}
