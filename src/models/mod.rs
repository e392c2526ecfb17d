// src/models/mod.rs

//! Domain models for the lookup application.
//!
//! This module contains the lookup record returned to callers and the
//! configuration structures loaded from TOML.

mod config;
mod lookup;

// Re-export all public types
pub use config::{CatalogConfig, Config, HttpConfig};
pub use lookup::LookupResult;
