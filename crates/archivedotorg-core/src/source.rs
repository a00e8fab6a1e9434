//! Upload byte sources.
//!
//! The body of an upload is streamed. A source may additionally know how many
//! bytes it will yield; that length becomes the `x-archive-size-hint` header.
//! The length is only ever taken from a cheap capability ([`RemainingLength`]
//! or file metadata), never by reading the stream.

use crate::error::ArchiveResult;
use bytes::Bytes;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::io::{Cursor, SeekFrom};
use std::path::Path;
use std::pin::Pin;
use tokio::io::{AsyncRead, AsyncSeekExt};

/// Boxed async reader backing a streamed upload.
pub type BoxedReader = Pin<Box<dyn AsyncRead + Send + Sync + 'static>>;

/// Sources that can report how many bytes remain without consuming them.
pub trait RemainingLength {
    fn remaining_len(&self) -> Option<u64>;
}

impl RemainingLength for Bytes {
    fn remaining_len(&self) -> Option<u64> {
        Some(self.len() as u64)
    }
}

impl RemainingLength for Vec<u8> {
    fn remaining_len(&self) -> Option<u64> {
        Some(self.len() as u64)
    }
}

impl RemainingLength for &[u8] {
    fn remaining_len(&self) -> Option<u64> {
        Some(self.len() as u64)
    }
}

impl<T: AsRef<[u8]>> RemainingLength for Cursor<T> {
    fn remaining_len(&self) -> Option<u64> {
        let total = self.get_ref().as_ref().len() as u64;
        Some(total.saturating_sub(self.position()))
    }
}

/// Body handed to the HTTP layer.
pub enum UploadBody {
    /// Fully in memory.
    Bytes(Bytes),
    /// Streamed until EOF.
    Reader(BoxedReader),
}

/// The readable byte source of an upload.
pub struct UploadSource {
    body: UploadBody,
    size_hint: Option<u64>,
}

impl UploadSource {
    /// In-memory content. The length is always known.
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        let data = data.into();
        let size_hint = data.remaining_len();
        Self {
            body: UploadBody::Bytes(data),
            size_hint,
        }
    }

    /// Any async reader. No size hint is sent.
    pub fn from_reader<R>(reader: R) -> Self
    where
        R: AsyncRead + Send + Sync + 'static,
    {
        Self {
            body: UploadBody::Reader(Box::pin(reader)),
            size_hint: None,
        }
    }

    /// An async reader that can report its own remaining length.
    pub fn from_sized_reader<R>(reader: R) -> Self
    where
        R: AsyncRead + RemainingLength + Send + Sync + 'static,
    {
        let size_hint = reader.remaining_len();
        Self {
            body: UploadBody::Reader(Box::pin(reader)),
            size_hint,
        }
    }

    /// An open file, streamed from its current position. The size hint is the
    /// file length minus that position and is omitted when either cannot be
    /// read.
    pub async fn from_file(mut file: tokio::fs::File) -> Self {
        let len = file.metadata().await.ok().map(|meta| meta.len());
        let position = file.seek(SeekFrom::Current(0)).await.ok();
        let size_hint = match (len, position) {
            (Some(len), Some(position)) => Some(len.saturating_sub(position)),
            _ => None,
        };
        Self {
            body: UploadBody::Reader(Box::pin(file)),
            size_hint,
        }
    }

    /// Open `path` for streaming.
    pub async fn open(path: impl AsRef<Path>) -> ArchiveResult<Self> {
        let file = tokio::fs::File::open(path.as_ref()).await?;
        Ok(Self::from_file(file).await)
    }

    /// Known remaining length of the source, if any.
    pub fn size_hint(&self) -> Option<u64> {
        self.size_hint
    }

    pub fn into_body(self) -> UploadBody {
        self.body
    }
}

impl Default for UploadSource {
    fn default() -> Self {
        Self::from_bytes(Bytes::new())
    }
}

impl From<Bytes> for UploadSource {
    fn from(data: Bytes) -> Self {
        Self::from_bytes(data)
    }
}

impl From<Vec<u8>> for UploadSource {
    fn from(data: Vec<u8>) -> Self {
        Self::from_bytes(data)
    }
}

impl From<String> for UploadSource {
    fn from(data: String) -> Self {
        Self::from_bytes(data)
    }
}

impl From<&'static str> for UploadSource {
    fn from(data: &'static str) -> Self {
        Self::from_bytes(data)
    }
}

impl Debug for UploadSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let kind = match self.body {
            UploadBody::Bytes(_) => "bytes",
            UploadBody::Reader(_) => "reader",
        };
        f.debug_struct("UploadSource")
            .field("kind", &kind)
            .field("size_hint", &self.size_hint)
            .finish()
    }
}
