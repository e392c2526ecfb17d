// src/pipeline/lookup.rs

//! Lookup pipeline.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::extract::{Page, assemble};
use crate::models::{Config, LookupResult};
use crate::services::LookupService;

/// Identifier scheme for a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupMode {
    /// Product (UPC) code
    Code,
    /// Catalog reference
    Reference,
}

/// Envelope printed for every lookup.
#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    /// Where the data came from
    pub source: String,

    /// Human-readable outcome
    pub message: String,

    pub looked_up_at: DateTime<Utc>,

    /// Detail page inferred but not fetched (offline parsing only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_url: Option<String>,

    pub result: LookupResult,
}

impl LookupReport {
    fn new(source: impl Into<String>, result: LookupResult) -> Self {
        let message = if result.found {
            format!("Found '{}'", result.title)
        } else {
            match &result.error {
                Some(error) => format!("Not found: {error}"),
                None => "Not found".to_string(),
            }
        };

        Self {
            source: source.into(),
            message,
            looked_up_at: Utc::now(),
            detail_url: None,
            result,
        }
    }
}

/// Run a single lookup against the configured catalog site.
pub async fn run_lookup(config: &Config, mode: LookupMode, identifier: &str) -> Result<LookupReport> {
    let service = LookupService::new(config)?;

    let result = match mode {
        LookupMode::Code => service.lookup_by_code(identifier).await,
        LookupMode::Reference => service.lookup_by_reference(identifier).await,
    };

    Ok(LookupReport::new(&config.catalog.base_url, result))
}

/// Assemble a result from a search page saved on disk.
pub async fn run_parse(config: &Config, path: &Path, identifier: &str) -> Result<LookupReport> {
    let html = tokio::fs::read_to_string(path).await?;
    let assembly = assemble(&Page::parse(&html), identifier, &config.catalog);

    let mut report = LookupReport::new(path.display().to_string(), assembly.result);
    report.detail_url = assembly.detail_url;
    Ok(report)
}
