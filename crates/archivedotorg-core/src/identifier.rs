//! Identifier derivation.
//!
//! Precedence: an explicit identifier is used verbatim, otherwise one is
//! derived from the title, otherwise from the current UTC time.

use chrono::{DateTime, Utc};

/// chrono layout for timestamp identifiers, e.g. `2021-10-31T140644.123456789Z`.
pub const TIMESTAMP_IDENTIFIER_FORMAT: &str = "%Y-%m-%dT%H%M%S%.fZ";

/// Lower-case `title` then replace every character outside `[a-z0-9]` with `-`.
///
/// Consecutive hyphens are kept as-is.
pub fn identifier_from_title(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '-',
        })
        .collect()
}

pub fn timestamp_identifier(now: DateTime<Utc>) -> String {
    now.format(TIMESTAMP_IDENTIFIER_FORMAT).to_string()
}
