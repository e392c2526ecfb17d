//! Extraction strategies.
//!
//! Each strategy is a self-contained pass over a [`Page`] that writes into a
//! [`LookupResult`] and sets `found` once a title has been recovered. The
//! assembler runs them in [`STRATEGIES`] order and stops at the first one
//! that finds a title.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Selector;

use crate::extract::fields::{parse_label_lines, route_label};
use crate::extract::page::{Page, attr, child_texts, element_text, parse_selector};
use crate::models::{CatalogConfig, LookupResult};

/// One extraction pass.
pub type Strategy = fn(&Page, &CatalogConfig, &mut LookupResult);

/// Extraction passes in fallback order.
pub const STRATEGIES: [(&str, Strategy); 4] = [
    ("table", from_tables),
    ("definition-list", from_definition_lists),
    ("container", from_containers),
    ("text-pattern", from_text_patterns),
];

static TABLE: LazyLock<Selector> = LazyLock::new(|| static_selector("table"));
static ROW: LazyLock<Selector> = LazyLock::new(|| static_selector("tr"));
static CELL: LazyLock<Selector> = LazyLock::new(|| static_selector("td"));
static DL: LazyLock<Selector> = LazyLock::new(|| static_selector("dl"));
static DT: LazyLock<Selector> = LazyLock::new(|| static_selector("dt"));
static DD: LazyLock<Selector> = LazyLock::new(|| static_selector("dd"));
static DIV: LazyLock<Selector> = LazyLock::new(|| static_selector("div"));

/// `<code> <title> (<year>)<format>` on a single line, the format token
/// directly after the closing parenthesis.
static CATALOG_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)(?:^|\s)([A-Z0-9-]*[0-9][A-Z0-9-]*)[ \t]+(\S[^\n]*?)[ \t]*\(([0-9]{4})\)([A-Z][A-Z/]*)(?:[\s,;]|$)",
    )
    .expect("catalog line regex")
});
static TITLE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Title:\s*(.+?)(?:\n|$)").expect("title regex"));
static TITLE_PREFIX_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"TITLE:\s*(.+?)(?:\n|$)").expect("TITLE regex"));
static YEAR_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:Year|Date):\s*([0-9]{4})").expect("year prefix regex"));

pub(crate) fn static_selector(css: &str) -> Selector {
    parse_selector(css).expect("static selector")
}

/// Label/value rows of tables that mention a title or laserdisc.
///
/// Every matching table is visited, so a later table overwrites fields set
/// by an earlier one.
pub fn from_tables(page: &Page, _catalog: &CatalogConfig, result: &mut LookupResult) {
    page.for_each(&TABLE, |table| {
        let text = element_text(&table).to_lowercase();
        if !text.contains("title") && !text.contains("laserdisc") {
            return;
        }

        for row in table.select(&ROW) {
            if let [label, value, ..] = child_texts(&row, &CELL).as_slice() {
                route_label(label, value, result);
            }
        }
    });

    result.mark_found_if_titled();
}

/// `<dt>`/`<dd>` pairs of every definition list.
pub fn from_definition_lists(page: &Page, _catalog: &CatalogConfig, result: &mut LookupResult) {
    page.for_each(&DL, |dl| {
        let terms = child_texts(&dl, &DT);
        let definitions = child_texts(&dl, &DD);

        for (term, definition) in terms.iter().zip(&definitions) {
            route_label(term, definition, result);
        }
    });

    result.mark_found_if_titled();
}

/// `label: value` lines inside containers whose class or id names a disc or title.
pub fn from_containers(page: &Page, _catalog: &CatalogConfig, result: &mut LookupResult) {
    page.find_map(&DIV, |div| {
        let class = attr(&div, "class").to_lowercase();
        let id = attr(&div, "id").to_lowercase();
        let relevant = ["disc", "title"]
            .iter()
            .any(|k| class.contains(k) || id.contains(k));
        if !relevant {
            return None;
        }

        parse_label_lines(&element_text(&div), result);
        result.mark_found_if_titled().then_some(())
    });
}

/// Regex passes over the whole page text.
///
/// A catalog listing line sets title, year and format in one go. Otherwise
/// `Title:` and `Year:`/`Date:` prefixes are tried independently; a prefixed
/// title naming the site itself or a search page is page chrome and skipped.
pub fn from_text_patterns(page: &Page, catalog: &CatalogConfig, result: &mut LookupResult) {
    let text = page.text().replace('\u{a0}', " ");

    if let Some(caps) = CATALOG_LINE.captures(&text) {
        result.title = caps[2].trim().to_string();
        result.year = caps[3].parse().unwrap_or_default();
        result.format = caps[4].to_string();
        result.found = true;
        return;
    }

    let site = catalog.site_name.trim().to_lowercase();
    for pattern in [&*TITLE_PREFIX, &*TITLE_PREFIX_UPPER] {
        let Some(caps) = pattern.captures(&text) else {
            continue;
        };
        let title = caps[1].trim();
        let lower = title.to_lowercase();
        let chrome = (!site.is_empty() && lower.contains(&site)) || lower.contains("search");
        if !title.is_empty() && !chrome {
            result.title = title.to_string();
            break;
        }
    }

    if let Some(year) = YEAR_PREFIX
        .captures(&text)
        .and_then(|caps| caps[1].parse().ok())
    {
        result.year = year;
    }

    result.mark_found_if_titled();
}
