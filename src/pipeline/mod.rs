//! Pipeline entry points for lookup operations.
//!
//! - `run_lookup`: Look up an identifier against the catalog site
//! - `run_parse`: Assemble a result from a saved search page

pub mod lookup;

pub use lookup::{LookupMode, LookupReport, run_lookup, run_parse};
