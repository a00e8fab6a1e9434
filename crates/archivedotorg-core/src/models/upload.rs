use crate::identifier::{identifier_from_title, timestamp_identifier};
use crate::models::{Collection, Metadata};
use crate::source::UploadSource;
use chrono::{NaiveDate, Utc};

/// Default `x-archive-meta01-scanner` value.
pub const DEFAULT_SCANNER: &str = "archivedotorg/s3";

/// Everything needed to upload one file into an archive.org item.
///
/// Empty strings are treated the same as `None` for every optional text field.
#[derive(Debug, Default)]
pub struct UploadOptions {
    pub upload: UploadSource,
    pub file_name: String,
    pub identifier: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub subject_tags: Vec<String>,
    pub creator: Option<String>,
    pub date: Option<NaiveDate>,
    pub metadata: Metadata,
    pub collection: Option<Collection>,
    pub scanner: Option<String>,

    pub auto_make_bucket: bool,
    pub keep_old_version: bool,
    pub skip_derive: bool,
    pub skip_unique_check: bool,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl UploadOptions {
    pub fn new(upload: impl Into<UploadSource>, file_name: impl Into<String>) -> Self {
        Self {
            upload: upload.into(),
            file_name: file_name.into(),
            ..Default::default()
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_subject_tag(mut self, tag: impl Into<String>) -> Self {
        self.subject_tags.push(tag.into());
        self
    }

    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.append(key, value);
        self
    }

    pub fn with_collection(mut self, collection: impl Into<Collection>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    pub fn with_scanner(mut self, scanner: impl Into<String>) -> Self {
        self.scanner = Some(scanner.into());
        self
    }

    pub fn identifier(&self) -> Option<&str> {
        non_empty(&self.identifier)
    }

    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(&self.description)
    }

    pub fn creator(&self) -> Option<&str> {
        non_empty(&self.creator)
    }

    /// Collection to file under, `opensource_media` when unset or empty.
    pub fn collection(&self) -> Collection {
        self.collection
            .clone()
            .filter(|c| !c.is_empty())
            .unwrap_or_default()
    }

    pub fn scanner(&self) -> &str {
        non_empty(&self.scanner).unwrap_or(DEFAULT_SCANNER)
    }

    /// Candidate identifier before any uniqueness check.
    ///
    /// An explicit identifier is returned unmodified; only the title-derived
    /// path is normalised.
    pub fn derive_identifier(&self) -> String {
        if let Some(identifier) = self.identifier() {
            return identifier.to_string();
        }
        if let Some(title) = self.title() {
            return identifier_from_title(title);
        }
        timestamp_identifier(Utc::now())
    }
}
