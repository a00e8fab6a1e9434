use anyhow::{anyhow, Context};
use chrono::NaiveDate;

/// Parse a `key=value` metadata argument.
pub fn parse_key_value(raw: &str) -> anyhow::Result<(String, String)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected key=value, got {:?}", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(anyhow!("metadata key must not be empty in {:?}", raw));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("expected a YYYY-MM-DD date, got {:?}", raw))
}


/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
