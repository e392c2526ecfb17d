//! Parsed page wrapper used by every extraction pass.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};

/// A fetched document together with its flattened text.
pub struct Page {
    document: Html,
    text: String,
}

impl Page {
    /// Parse raw markup into a page.
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        let text = element_text(&document.root_element());
        Self { document, text }
    }

    /// Concatenated text of every text node in the document.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Visit every element matching `selector`, in document order.
    pub fn for_each<'a>(&'a self, selector: &Selector, mut visit: impl FnMut(ElementRef<'a>)) {
        for element in self.document.select(selector) {
            visit(element);
        }
    }

    /// Visit matching elements until `visit` returns `Some`.
    pub fn find_map<'a, T>(
        &'a self,
        selector: &Selector,
        visit: impl FnMut(ElementRef<'a>) -> Option<T>,
    ) -> Option<T> {
        self.document.select(selector).find_map(visit)
    }
}

/// Concatenated text of an element's descendants.
pub fn element_text(element: &ElementRef) -> String {
    element.text().collect()
}

/// Trimmed text of each descendant of `element` matching `selector`.
pub fn child_texts(element: &ElementRef, selector: &Selector) -> Vec<String> {
    element
        .select(selector)
        .map(|child| element_text(&child).trim().to_string())
        .collect()
}

/// Attribute value of an element, or the empty string.
pub fn attr<'a>(element: &ElementRef<'a>, name: &str) -> &'a str {
    element.value().attr(name).unwrap_or("")
}

/// Parse a CSS selector.
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}
