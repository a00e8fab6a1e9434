//! Configuration module
//!
//! Credentials and endpoint overrides are read from the environment (after
//! loading a `.env` file if present):
//!
//! - `IA_S3_ACCESS_KEY` / `IA_S3_SECRET_KEY`: IA-S3 keys, required for uploads
//! - `IA_S3_URL`: upload base URL override
//! - `IA_HTTP_TIMEOUT_SECS`: client timeout, `0` disables it

use crate::error::{ArchiveError, ArchiveResult};
use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};

/// Client timeout used when `IA_HTTP_TIMEOUT_SECS` is unset.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 90;

/// IA-S3 access key pair, sent as `authorization: LOW {key}:{secret}`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub key: String,
    pub secret: String,
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    pub fn authorization(&self) -> String {
        format!("LOW {}:{}", self.key, self.secret)
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveConfig {
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub s3_url: Option<String>,
    pub http_timeout_secs: u64,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            access_key: None,
            secret_key: None,
            s3_url: None,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl ArchiveConfig {
    pub fn from_env() -> ArchiveResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> ArchiveResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let http_timeout_secs = match non_empty("IA_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                ArchiveError::Config(format!(
                    "IA_HTTP_TIMEOUT_SECS must be a whole number of seconds, got {:?}",
                    raw
                ))
            })?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            access_key: non_empty("IA_S3_ACCESS_KEY"),
            secret_key: non_empty("IA_S3_SECRET_KEY"),
            s3_url: non_empty("IA_S3_URL"),
            http_timeout_secs,
        })
    }

    /// Credentials for uploads; both keys must be present.
    pub fn credentials(&self) -> ArchiveResult<Credentials> {
        match (&self.access_key, &self.secret_key) {
            (Some(key), Some(secret)) => Ok(Credentials::new(key.clone(), secret.clone())),
            _ => Err(ArchiveError::missing_credentials()),
        }
    }

    /// `None` means no client-side timeout.
    pub fn http_timeout(&self) -> Option<std::time::Duration> {
        (self.http_timeout_secs > 0).then(|| std::time::Duration::from_secs(self.http_timeout_secs))
    }
}
