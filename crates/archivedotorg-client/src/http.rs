use archivedotorg_core::source::UploadBody;
use archivedotorg_core::{ArchiveError, ArchiveResult, UploadSource};
use reqwest::{Body, Client};
use std::time::Duration;
use tokio_util::io::ReaderStream;

/// Build the default HTTP client. `None` disables the timeout.
pub(crate) fn default_client(timeout: Option<Duration>) -> ArchiveResult<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| ArchiveError::transport("Failed to create HTTP client", e))
}

/// Adapt an upload source into a streamed request body.
pub(crate) fn into_body(source: UploadSource) -> Body {
    match source.into_body() {
        UploadBody::Bytes(bytes) => Body::from(bytes),
        UploadBody::Reader(reader) => Body::wrap_stream(ReaderStream::new(reader)),
    }
}

/// Map a reqwest failure onto the transport error kind.
pub(crate) fn transport(context: impl Into<String>) -> impl FnOnce(reqwest::Error) -> ArchiveError {
    let context = context.into();
    move |e| ArchiveError::transport(context, e)
}
