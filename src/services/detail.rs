// src/services/detail.rs

//! Detail page enrichment service.
//!
//! Fetches an item's detail page and layers its fields onto a result.

use std::sync::Arc;

use crate::error::Result;
use crate::extract::{Page, apply_detail_page};
use crate::models::{CatalogConfig, LookupResult};
use crate::utils::http::PageFetcher;

/// Service for enriching a found result from its detail page.
pub struct DetailPageEnricher {
    catalog: CatalogConfig,
    fetcher: Arc<dyn PageFetcher>,
}

impl DetailPageEnricher {
    /// Create an enricher sharing the lookup's fetcher.
    pub fn new(catalog: CatalogConfig, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { catalog, fetcher }
    }

    /// Fetch `detail_url` and apply its fields to `result`.
    ///
    /// On error `result` is left exactly as it was.
    pub async fn enrich(&self, detail_url: &str, result: &mut LookupResult) -> Result<()> {
        let html = self.fetcher.fetch(detail_url).await?;
        let page = Page::parse(&html);
        apply_detail_page(&page, &self.catalog, result);
        log::debug!("Enriched {} from {}", result.identifier, detail_url);
        Ok(())
    }
}
