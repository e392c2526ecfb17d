//! Result assembly: run the extraction passes against a search page.

use std::sync::LazyLock;

use regex::Regex;

use crate::extract::page::Page;
use crate::extract::strategies::STRATEGIES;
use crate::models::{CatalogConfig, LookupResult};

/// Phrases a search page uses to report that nothing matched.
const NEGATIVE_SIGNALS: [&str; 3] = ["no results", "not found", "0 results"];

/// `<code> <title> (<year>)` on a single line; the code names the detail page.
static CATALOG_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)(?:^|\s)([A-Z0-9-]*[0-9][A-Z0-9-]*)[ \t]+\S[^\n]*?[ \t]*\([0-9]{4}\)")
        .expect("catalog reference regex")
});

/// Outcome of assembling a search page.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub result: LookupResult,

    /// Detail page inferred from the search page content
    pub detail_url: Option<String>,
}

/// Build a result for `identifier` from a fetched search page.
///
/// An explicit "no results" page short-circuits to not-found without
/// running any strategy or looking for a detail link.
pub fn assemble(page: &Page, identifier: &str, catalog: &CatalogConfig) -> Assembly {
    let mut result = LookupResult::new(identifier);

    let lower = page.text().to_lowercase();
    if let Some(signal) = NEGATIVE_SIGNALS.iter().find(|s| lower.contains(*s)) {
        log::debug!("Search page for {identifier} reports '{signal}'");
        return Assembly {
            result,
            detail_url: None,
        };
    }

    for (name, strategy) in STRATEGIES {
        if result.found {
            break;
        }
        strategy(page, catalog, &mut result);
        log::debug!(
            "Strategy '{}' for {}: {}",
            name,
            identifier,
            if result.found { "title found" } else { "no title" }
        );
    }

    let detail_url = find_catalog_reference(page.text()).map(|reference| {
        let url = catalog.detail_url(&reference);
        log::debug!("Detail page candidate for {identifier}: {url}");
        url
    });

    Assembly { result, detail_url }
}

/// First catalog code followed by a title and a parenthesized year.
pub fn find_catalog_reference(text: &str) -> Option<String> {
    let text = text.replace('\u{a0}', " ");
    CATALOG_REFERENCE
        .captures(&text)
        .map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAR_WARS_TABLE: &str = r#"<html><body>
        <table>
            <tr><td>Title:</td><td>Star Wars</td></tr>
            <tr><td>Year:</td><td>1977</td></tr>
            <tr><td>Director:</td><td>George Lucas</td></tr>
            <tr><td>Runtime:</td><td>121 min</td></tr>
        </table>
        <div class="disc">
Title: Wrong Title
Genre: Western
        </div>
    </body></html>"#;

    fn assemble_html(html: &str) -> Assembly {
        assemble(&Page::parse(html), "0-12345", &CatalogConfig::default())
    }

    #[test]
    fn test_table_strategy_wins_first() {
        let assembly = assemble_html(STAR_WARS_TABLE);
        let result = assembly.result;

        assert!(result.found);
        assert_eq!(result.identifier, "0-12345");
        assert_eq!(result.title, "Star Wars");
        assert_eq!(result.year, 1977);
        assert_eq!(result.director, "George Lucas");
        assert_eq!(result.runtime, 121);
        // later strategies never ran
        assert_eq!(result.genre, "");
        assert!(assembly.detail_url.is_none());
    }

    #[test]
    fn test_falls_through_to_later_strategies() {
        let html = r#"<table><tr><td>Price</td><td>$20</td></tr></table>
            <dl><dt>Genre</dt><dd>Drama</dd></dl>
            <div class="disc-info">
Title: Ran
Year: 1985
            </div>"#;
        let result = assemble_html(html).result;

        assert!(result.found);
        assert_eq!(result.title, "Ran");
        assert_eq!(result.year, 1985);
        assert_eq!(result.genre, "Drama");
    }

    #[test]
    fn test_negative_signal_wins_over_content() {
        let html = format!("{STAR_WARS_TABLE}<p>No results found</p><p>PILF-1234 Star Wars (1977)LD</p>");
        let assembly = assemble_html(&html);

        assert!(!assembly.result.found);
        assert_eq!(assembly.result.title, "");
        assert!(assembly.result.error.is_none());
        assert!(assembly.detail_url.is_none());
    }

    #[test]
    fn test_nothing_recognizable() {
        let assembly = assemble_html("<html><body><p>Welcome to the shop</p></body></html>");
        assert!(!assembly.result.found);
        assert!(assembly.result.error.is_none());
        assert!(assembly.detail_url.is_none());
    }

    #[test]
    fn test_empty_page() {
        let assembly = assemble_html("");
        assert!(!assembly.result.found);
    }

    #[test]
    fn test_detail_url_discovered_from_listing() {
        let html = "<table><tr><td>PILF-1234 Star Wars (1977)</td><td>LD</td></tr></table>";
        let assembly = assemble_html(html);

        assert!(assembly.result.found);
        assert_eq!(assembly.result.title, "Star Wars");
        assert_eq!(assembly.result.format, "LD");
        assert_eq!(
            assembly.detail_url.as_deref(),
            Some("https://www.lddb.com/laserdisc/PILF-1234")
        );
    }

    #[test]
    fn test_detail_url_discovered_even_when_not_found() {
        let assembly = assemble_html("<p>ID1234LI some listing (1984)</p>");

        assert!(!assembly.result.found);
        assert_eq!(
            assembly.detail_url.as_deref(),
            Some("https://www.lddb.com/laserdisc/ID1234LI")
        );
    }

    #[test]
    fn test_find_catalog_reference() {
        assert_eq!(
            find_catalog_reference("Results:\nPILF-1234\u{a0}Star Wars (1977)LD").as_deref(),
            Some("PILF-1234")
        );
        assert_eq!(find_catalog_reference("Star Wars (1977)"), None);
        assert_eq!(find_catalog_reference("pilf-1234 lowercase (1977)"), None);
    }
}
