// src/extract/mod.rs

//! Network-free extraction of catalog metadata from fetched markup.
//!
//! - `normalize_code`: canonicalize a product code
//! - `fields`: label routing and year/runtime parsers
//! - `strategies`: the ordered fallback passes over a page
//! - `assemble`: run the passes and discover the detail link
//! - `detail`: layer detail-page fields onto an existing result

pub mod assembler;
pub mod code;
pub mod detail;
pub mod fields;
pub mod page;
pub mod strategies;

pub use assembler::{Assembly, assemble};
pub use code::normalize_code;
pub use detail::apply_detail_page;
pub use page::Page;
