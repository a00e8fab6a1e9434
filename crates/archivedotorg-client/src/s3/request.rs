//! IA-S3 upload request construction.
//!
//! Header names follow the archive.org conventions:
//!
//! - `x-archive-meta01-*` for the well-known item fields
//! - `x-amz-meta{NN}-subject` for subject tags, `NN` counting from `00`
//! - `x-amz-meta{NN}-{key}` for each value of a free-form metadata key
//!
//! Free text is sent `uri(...)`-wrapped, see [`archivedotorg_core::uri_encode`].

use archivedotorg_core::{
    uri_encode, ArchiveError, ArchiveResult, Credentials, UploadOptions, UploadSource,
};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Url};

/// Default IA-S3 endpoint.
pub const DEFAULT_URL: &str = "https://s3.us.archive.org";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A fully built upload, ready to be dispatched.
#[derive(Debug)]
pub struct UploadRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: UploadSource,
}

/// `{base_url}/{identifier}/{file_name}`, falling back to [`DEFAULT_URL`].
///
/// Each path segment is percent-escaped; `/` inside `file_name` keeps
/// separating directories within the item.
pub fn upload_url(base_url: Option<&str>, identifier: &str, file_name: &str) -> ArchiveResult<Url> {
    if identifier.is_empty() {
        return Err(ArchiveError::InvalidRequest(
            "identifier must not be empty".to_string(),
        ));
    }
    if file_name.is_empty() {
        return Err(ArchiveError::InvalidRequest(
            "file name must not be empty".to_string(),
        ));
    }

    let base_url = base_url
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_URL)
        .trim_end_matches('/');
    let file_path = file_name
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");
    let raw = format!(
        "{}/{}/{}",
        base_url,
        urlencoding::encode(identifier),
        file_path
    );

    Url::parse(&raw)
        .map_err(|e| ArchiveError::InvalidRequest(format!("invalid upload URL {:?}: {}", raw, e)))
}

fn set_header(headers: &mut HeaderMap, name: &str, value: &str) -> ArchiveResult<()> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|_| ArchiveError::InvalidRequest(format!("invalid header name {:?}", name)))?;
    let header_value = HeaderValue::from_str(value)
        .map_err(|_| ArchiveError::InvalidRequest(format!("invalid value for header {}", name)))?;
    headers.insert(header_name, header_value);
    Ok(())
}

/// Headers for uploading `opts`. Optional fields that are unset produce no header.
pub fn upload_headers(opts: &UploadOptions, credentials: &Credentials) -> ArchiveResult<HeaderMap> {
    let mut headers = HeaderMap::new();

    for (key, values) in opts.metadata.iter() {
        for (i, value) in values.iter().enumerate() {
            set_header(
                &mut headers,
                &format!("x-amz-meta{:02}-{}", i, key),
                &uri_encode(value),
            )?;
        }
    }
    for (i, tag) in opts.subject_tags.iter().enumerate() {
        set_header(
            &mut headers,
            &format!("x-amz-meta{:02}-subject", i),
            &uri_encode(tag),
        )?;
    }

    let mut authorization = HeaderValue::from_str(&credentials.authorization()).map_err(|_| {
        ArchiveError::InvalidRequest("credentials contain invalid header characters".to_string())
    })?;
    authorization.set_sensitive(true);
    headers.insert(reqwest::header::AUTHORIZATION, authorization);

    set_header(
        &mut headers,
        "x-archive-meta01-collection",
        opts.collection().as_str(),
    )?;
    if let Some(title) = opts.title() {
        set_header(&mut headers, "x-archive-meta-title", &uri_encode(title))?;
    }
    if let Some(date) = opts.date {
        set_header(
            &mut headers,
            "x-archive-meta01-date",
            &uri_encode(&date.format(DATE_FORMAT).to_string()),
        )?;
    }
    if let Some(description) = opts.description() {
        set_header(
            &mut headers,
            "x-archive-meta01-description",
            &uri_encode(description),
        )?;
    }
    if let Some(creator) = opts.creator() {
        set_header(&mut headers, "x-archive-meta01-creator", &uri_encode(creator))?;
    }
    set_header(
        &mut headers,
        "x-archive-meta01-scanner",
        &uri_encode(opts.scanner()),
    )?;

    if opts.auto_make_bucket {
        set_header(&mut headers, "x-amz-auto-make-bucket", "1")?;
    }
    if opts.keep_old_version {
        set_header(&mut headers, "x-archive-keep-old-version", "1")?;
    }
    if opts.skip_derive {
        set_header(&mut headers, "x-archive-queue-derive", "0")?;
    }

    if let Some(size) = opts.upload.size_hint().filter(|size| *size > 0) {
        set_header(&mut headers, "x-archive-size-hint", &size.to_string())?;
    }

    set_header(&mut headers, "x-amz-acl", "bucket-owner-full-control")?;

    Ok(headers)
}

/// Build the `PUT` for `opts` under an already resolved `identifier`.
pub fn build_upload_request(
    opts: UploadOptions,
    credentials: &Credentials,
    base_url: Option<&str>,
    identifier: &str,
) -> ArchiveResult<UploadRequest> {
    let url = upload_url(base_url, identifier, &opts.file_name)?;
    let headers = upload_headers(&opts, credentials)?;

    Ok(UploadRequest {
        method: Method::PUT,
        url,
        headers,
        body: opts.upload,
    })
}
