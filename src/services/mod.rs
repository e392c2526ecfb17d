//! Service layer for the lookup application.
//!
//! This module contains the network-facing orchestration:
//! - Identifier lookups (`LookupService`)
//! - Detail page enrichment (`DetailPageEnricher`)

mod detail;
mod lookup;

pub use detail::DetailPageEnricher;
pub use lookup::LookupService;
