//! archivedotorg CLI — upload files to archive.org and request Wayback captures.
//!
//! Uploads read IA_S3_ACCESS_KEY, IA_S3_SECRET_KEY and optionally IA_S3_URL
//! (a `.env` file is honoured). Log level via RUST_LOG.

use anyhow::Context;
use archivedotorg_cli::{init_tracing, parse_date, parse_key_value};
use archivedotorg_client::{
    ArchiveConfig, Collection, Metadata, S3Client, SaveOptions, UploadOptions, UploadSource,
    WebClient,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "archivedotorg", about = "archive.org upload and Save Page Now client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a file into an archive.org item
    Upload {
        /// Path to the file to upload
        file: PathBuf,
        /// Name of the file inside the item (defaults to the file's name)
        #[arg(long)]
        file_name: Option<String>,
        /// Explicit item identifier (derived from the title otherwise)
        #[arg(long)]
        identifier: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Subject tag, may be repeated
        #[arg(long = "subject")]
        subjects: Vec<String>,
        #[arg(long)]
        creator: Option<String>,
        /// Item date, YYYY-MM-DD
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        /// Extra metadata as key=value, may be repeated
        #[arg(long = "meta", value_parser = parse_key_value)]
        metadata: Vec<(String, String)>,
        /// Collection, e.g. opensource_media, opensource_movies, test_collection
        #[arg(long)]
        collection: Option<String>,
        #[arg(long)]
        scanner: Option<String>,
        #[arg(long)]
        auto_make_bucket: bool,
        #[arg(long)]
        keep_old_version: bool,
        #[arg(long)]
        skip_derive: bool,
        /// Use the identifier as-is without asking archive.org for a unique one
        #[arg(long)]
        skip_unique_check: bool,
    },
    /// Ask the Wayback Machine to capture a URL
    Save {
        /// URL to capture
        url: String,
        /// Also capture outlinks
        #[arg(long)]
        outlinks: bool,
        /// Capture error pages (HTTP 4xx/5xx)
        #[arg(long)]
        error_pages: bool,
        /// Store a screenshot
        #[arg(long)]
        screenshot: bool,
    },
    /// Check whether an identifier is available
    Identifier {
        /// Candidate identifier
        candidate: String,
    },
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize response")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Upload {
            file,
            file_name,
            identifier,
            title,
            description,
            subjects,
            creator,
            date,
            metadata,
            collection,
            scanner,
            auto_make_bucket,
            keep_old_version,
            skip_derive,
            skip_unique_check,
        } => {
            let config = ArchiveConfig::from_env().context("Failed to load configuration")?;
            config.credentials().context(
                "Failed to create IA-S3 client. Set IA_S3_ACCESS_KEY and IA_S3_SECRET_KEY",
            )?;
            let client = S3Client::from_config(&config).context("Failed to create HTTP client")?;

            let file_name = match file_name {
                Some(name) => name,
                None => file
                    .file_name()
                    .and_then(|n| n.to_str())
                    .map(str::to_string)
                    .with_context(|| format!("Cannot derive a file name from {}", file.display()))?,
            };
            let upload = UploadSource::open(&file)
                .await
                .with_context(|| format!("Failed to open file: {}", file.display()))?;

            let opts = UploadOptions {
                upload,
                file_name,
                identifier,
                title,
                description,
                subject_tags: subjects,
                creator,
                date,
                metadata: metadata.into_iter().collect::<Metadata>(),
                collection: collection.map(Collection::from),
                scanner,
                auto_make_bucket,
                keep_old_version,
                skip_derive,
                skip_unique_check,
            };

            let receipt = client.upload(opts).await.context("Upload failed")?;
            print_json(&receipt)?;
        }
        Commands::Save {
            url,
            outlinks,
            error_pages,
            screenshot,
        } => {
            let client = WebClient::new().context("Failed to create HTTP client")?;
            let options = SaveOptions {
                save_out_links: outlinks,
                save_error_pages: error_pages,
                save_screen_shot: screenshot,
            };
            let result = client.save(&url, options).await.context("Save failed")?;

            let headers: BTreeMap<&str, &str> = result
                .headers
                .iter()
                .filter_map(|(name, value)| Some((name.as_str(), value.to_str().ok()?)))
                .collect();
            print_json(&serde_json::json!({
                "status": result.status.as_u16(),
                "headers": headers,
            }))?;
        }
        Commands::Identifier { candidate } => {
            let config = ArchiveConfig::from_env().context("Failed to load configuration")?;
            let client =
                S3Client::from_config(&config).context("Failed to create HTTP client")?;
            let response = client
                .find_identifier(&candidate)
                .await
                .context("Identifier lookup failed")?;
            print_json(&response)?;
        }
    }

    Ok(())
}
