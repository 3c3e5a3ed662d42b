//! Reference data sources.
//!
//! The reference table is published as CSV with a header row. Sources only
//! fetch and decode it into [`RawRow`]s; validation happens when the table
//! is built.

use async_trait::async_trait;
use ral_palette::RawRow;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::SourceError;

/// Trait for anything that can produce reference rows
#[async_trait]
pub trait RowSource: Send + Sync {
    /// Fetch and decode all rows
    async fn fetch_rows(&self) -> Result<Vec<RawRow>, SourceError>;

    /// Human-readable location, used in logs and status output
    fn describe(&self) -> String;
}

/// One CSV record. Columns are matched by header name; others are ignored.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(rename = "RAL", default)]
    code: Option<String>,
    #[serde(rename = "HEX", default)]
    hex: Option<String>,
    #[serde(rename = "RGB", default)]
    rgb: Option<String>,
    #[serde(rename = "English", default)]
    name: Option<String>,
}

impl From<CsvRecord> for RawRow {
    fn from(record: CsvRecord) -> Self {
        RawRow {
            code: record.code,
            hex: record.hex,
            rgb: record.rgb,
            name: record.name,
        }
    }
}

/// Decode CSV bytes with a header row into raw rows.
///
/// Records that cannot be decoded are skipped. Only an unreadable header
/// is an error.
pub fn parse_csv(data: &[u8]) -> Result<Vec<RawRow>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    // Surface a broken header instead of returning zero rows
    reader.headers()?;

    let mut rows = Vec::new();
    for (line, record) in reader.deserialize::<CsvRecord>().enumerate() {
        match record {
            Ok(record) => rows.push(record.into()),
            Err(e) => {
                tracing::debug!(record = line + 1, %e, "Skipping undecodable CSV record");
            }
        }
    }

    Ok(rows)
}

/// CSV fetched over HTTP(S)
pub struct UrlSource {
    url: String,
    client: reqwest::Client,
}

impl UrlSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RowSource for UrlSource {
    async fn fetch_rows(&self) -> Result<Vec<RawRow>, SourceError> {
        tracing::debug!(url = %self.url, "Fetching reference table");

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.bytes().await?;
        parse_csv(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// CSV read from the local filesystem
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RowSource for FileSource {
    async fn fetch_rows(&self) -> Result<Vec<RawRow>, SourceError> {
        tracing::debug!(path = %self.path.display(), "Reading reference table");
        let data = tokio::fs::read(&self.path).await?;
        parse_csv(&data)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Rows held in memory
pub struct StaticSource {
    rows: Vec<RawRow>,
}

impl StaticSource {
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl RowSource for StaticSource {
    async fn fetch_rows(&self) -> Result<Vec<RawRow>, SourceError> {
        Ok(self.rows.clone())
    }

    fn describe(&self) -> String {
        "in-memory".to_string()
    }
}

/// Pick a source for a configured location: http(s) URLs are fetched,
/// anything else is treated as a file path.
pub fn source_for(location: &str) -> Arc<dyn RowSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Arc::new(UrlSource::new(location))
    } else {
        Arc::new(FileSource::new(location))
    }
}
