//! Detail page extraction.
//!
//! Layers director, genre, runtime and cover image from an item's detail
//! page onto a result produced from the search page. Populated fields are
//! never cleared or replaced, with one exception: a labeled runtime in
//! minutes on the detail page replaces whatever runtime was already set.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Selector;

use crate::extract::page::{Page, attr};
use crate::extract::strategies::{from_definition_lists, from_tables, static_selector};
use crate::models::{CatalogConfig, LookupResult};
use crate::utils::url::resolve_image_src;

static IMG: LazyLock<Selector> = LazyLock::new(|| static_selector("img"));

static DIRECTOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)director[:\s]+([^\n]+)").expect("director regex"));
static GENRE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)genre[:\s]+([^\n]+)").expect("genre regex"));
static RUNTIMES: LazyLock<[Regex; 3]> = LazyLock::new(|| {
    ["runtime", "duration", "running time"]
        .map(|label| Regex::new(&format!(r"(?i){label}[:\s]+([0-9]+)\s*min")).expect("runtime regex"))
});

const MAX_DIRECTOR_LEN: usize = 100;
const MAX_GENRE_LEN: usize = 50;

/// Apply everything a detail page offers to `result`.
pub fn apply_detail_page(page: &Page, catalog: &CatalogConfig, result: &mut LookupResult) {
    let text = page.text();

    if result.director.is_empty() {
        if let Some(director) = labeled_value(&DIRECTOR, text, MAX_DIRECTOR_LEN) {
            result.director = director;
        }
    }

    if result.genre.is_empty() {
        if let Some(genre) = labeled_value(&GENRE, text, MAX_GENRE_LEN) {
            result.genre = genre;
        }
    }

    if let Some(runtime) = labeled_runtime(text) {
        if result.runtime != 0 && result.runtime != runtime {
            log::debug!(
                "Detail page runtime {} replaces {} for {}",
                runtime,
                result.runtime,
                result.identifier
            );
        }
        result.runtime = runtime;
    }

    if result.cover_image_url.is_empty() {
        if let Some(cover) = find_cover_image(page, catalog) {
            result.cover_image_url = cover;
        }
    }

    let mut structured = LookupResult::new(result.identifier.as_str());
    from_tables(page, catalog, &mut structured);
    from_definition_lists(page, catalog, &mut structured);
    result.fill_missing_from(&structured);
}

/// Free text after a label up to the end of the line, without trailing
/// punctuation, if its length is in `1..max_len`.
fn labeled_value(pattern: &Regex, text: &str, max_len: usize) -> Option<String> {
    let caps = pattern.captures(text)?;
    let value = caps[1].trim().trim_end_matches([',', '.']).trim_end();
    let len = value.chars().count();
    (len > 0 && len < max_len).then(|| value.to_string())
}

/// Minutes from the first of `runtime`, `duration`, `running time` that
/// carries a `min` suffix.
fn labeled_runtime(text: &str) -> Option<u32> {
    RUNTIMES
        .iter()
        .find_map(|pattern| pattern.captures(text)?[1].parse().ok())
}

/// First image that looks like a cover and has a usable source.
fn find_cover_image(page: &Page, catalog: &CatalogConfig) -> Option<String> {
    let origin = catalog.origin();

    page.find_map(&IMG, |img| {
        let src = attr(&img, "src");
        let alt = attr(&img, "alt").to_lowercase();
        let is_cover = src.to_lowercase().contains("cover")
            || alt.contains("cover")
            || alt.contains("laserdisc");
        if !is_cover {
            return None;
        }
        resolve_image_src(origin.as_deref(), src)
    })
}
