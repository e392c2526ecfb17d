//! Lookup result data structure.

use serde::{Deserialize, Serialize};

/// Catalog metadata recovered for a single lookup.
///
/// Numeric fields use `0` and string fields use the empty string for
/// "unknown". `found` is only ever set by an extraction pass that recovered
/// a non-empty title.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LookupResult {
    /// Identifier exactly as supplied by the caller
    #[serde(rename = "upc")]
    pub identifier: String,

    pub title: String,

    /// Release year
    pub year: u32,

    pub director: String,

    pub genre: String,

    /// Disc format (CLV, CAV, ...)
    pub format: String,

    /// Number of disc sides
    pub sides: u32,

    /// Runtime in minutes
    pub runtime: u32,

    pub cover_image_url: String,

    /// Catalog detail page for the item
    pub lddb_url: String,

    pub found: bool,

    /// Informational diagnostic, never used for control flow
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LookupResult {
    /// Create an empty, not-found result for the given identifier.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    /// Create a not-found result carrying a diagnostic message.
    pub fn failed(identifier: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::new(identifier)
        }
    }

    /// Mark the result as found if a title has been recovered.
    pub fn mark_found_if_titled(&mut self) -> bool {
        if !self.title.is_empty() {
            self.found = true;
        }
        self.found
    }

    /// Copy fields from `other` into any field of `self` that is still empty.
    ///
    /// Title, `found` and `error` are left untouched.
    pub fn fill_missing_from(&mut self, other: &LookupResult) {
        fill_str(&mut self.director, &other.director);
        fill_str(&mut self.genre, &other.genre);
        fill_str(&mut self.format, &other.format);
        fill_str(&mut self.cover_image_url, &other.cover_image_url);
        fill_str(&mut self.lddb_url, &other.lddb_url);
        fill_num(&mut self.year, other.year);
        fill_num(&mut self.sides, other.sides);
        fill_num(&mut self.runtime, other.runtime);
    }
}

fn fill_str(target: &mut String, value: &str) {
    if target.is_empty() && !value.is_empty() {
        *target = value.to_string();
    }
}

fn fill_num(target: &mut u32, value: u32) {
    if *target == 0 {
        *target = value;
    }
}
