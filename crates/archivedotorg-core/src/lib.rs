//! archive.org client core
//!
//! Domain types shared by the HTTP client and the CLI: upload and save options,
//! collections, metadata, upload byte sources, identifier derivation, the
//! `uri(...)` header encoding, configuration and the error type.
//!
//! Nothing in this crate performs network I/O.

pub mod config;
pub mod encoding;
pub mod error;
pub mod identifier;
pub mod models;
pub mod source;

// Re-export commonly used types
pub use config::{ArchiveConfig, Credentials};
pub use encoding::{form_encode, uri_encode};
pub use error::{ArchiveError, ArchiveResult};
pub use models::{Collection, IdentifierResponse, Metadata, SaveOptions, UploadOptions};
pub use source::{RemainingLength, UploadSource};
