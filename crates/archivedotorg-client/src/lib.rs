//! HTTP client for archive.org.
//!
//! - [`s3::S3Client`] uploads files through the IA-S3 API (`PUT
//!   {base}/{identifier}/{file}` with `x-archive-*` / `x-amz-*` headers) and
//!   resolves unique identifiers.
//! - [`web::WebClient`] asks the Wayback Machine to capture a URL
//!   (Save Page Now).
//!
//! Each call is one request/response cycle. Nothing is retried; dropping the
//! returned future aborts the in-flight request.

pub(crate) mod http;
pub mod s3;
pub mod web;

// Re-export domain types for convenience.
pub use archivedotorg_core::{
    ArchiveConfig, ArchiveError, ArchiveResult, Collection, Credentials, IdentifierResponse,
    Metadata, RemainingLength, SaveOptions, UploadOptions, UploadSource,
};
pub use s3::{S3Client, UploadReceipt};
pub use web::{SaveResult, WebClient};
