// src/services/lookup.rs

//! Lookup service.
//!
//! Runs normalization, the search page fetch, result assembly and the
//! optional detail page enrichment for one identifier at a time.

use std::sync::Arc;

use crate::error::Result;
use crate::extract::{Page, assemble, normalize_code};
use crate::models::{CatalogConfig, Config, LookupResult};
use crate::services::DetailPageEnricher;
use crate::utils::http::{HttpFetcher, PageFetcher};

/// Service for looking up catalog metadata by product code or reference.
pub struct LookupService {
    catalog: CatalogConfig,
    fetcher: Arc<dyn PageFetcher>,
    enricher: DetailPageEnricher,
}

impl LookupService {
    /// Create a lookup service backed by HTTP.
    pub fn new(config: &Config) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config.http)?;
        Ok(Self::with_fetcher(config.catalog.clone(), Arc::new(fetcher)))
    }

    /// Create a lookup service with a custom fetcher.
    pub fn with_fetcher(catalog: CatalogConfig, fetcher: Arc<dyn PageFetcher>) -> Self {
        let enricher = DetailPageEnricher::new(catalog.clone(), Arc::clone(&fetcher));
        Self {
            catalog,
            fetcher,
            enricher,
        }
    }

    /// Look up an item by product code.
    ///
    /// Never fails: invalid codes and transport errors are reported through
    /// `result.error` with `found == false`.
    pub async fn lookup_by_code(&self, code: &str) -> LookupResult {
        let Some(clean) = normalize_code(code) else {
            log::info!("Rejected product code {code:?}");
            return LookupResult::failed(code, "Invalid UPC format");
        };

        let url = self.catalog.code_search_url(&clean);
        self.lookup(code, &url).await
    }

    /// Look up an item by catalog reference, bypassing code normalization.
    pub async fn lookup_by_reference(&self, reference: &str) -> LookupResult {
        let token = reference.trim();
        if token.is_empty() {
            log::info!("Rejected empty catalog reference");
            return LookupResult::failed(reference, "Invalid reference format");
        }

        let url = self.catalog.reference_search_url(token);
        self.lookup(reference, &url).await
    }

    async fn lookup(&self, identifier: &str, search_url: &str) -> LookupResult {
        log::info!("Looking up {identifier} at {search_url}");

        let html = match self.fetcher.fetch(search_url).await {
            Ok(html) => html,
            Err(e) => {
                log::warn!("Search fetch failed for {identifier}: {e}");
                return LookupResult::failed(identifier, format!("Failed to fetch data: {e}"));
            }
        };

        let assembly = assemble(&Page::parse(&html), identifier, &self.catalog);
        let mut result = assembly.result;

        if let Some(detail_url) = assembly.detail_url.filter(|_| result.found) {
            if result.lddb_url.is_empty() {
                result.lddb_url = detail_url.clone();
            }
            if let Err(e) = self.enricher.enrich(&detail_url, &mut result).await {
                log::warn!("Detail page {detail_url} skipped for {identifier}: {e}");
            }
        }

        if result.found {
            log::info!("Found '{}' for {}", result.title, identifier);
        } else {
            log::info!("No match for {identifier}");
        }

        result
    }
}
