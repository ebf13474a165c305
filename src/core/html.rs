// src/core/html.rs
//
// Thin query layer over `scraper::Html`. Page readers in `specs/` go through
// this instead of poking the DOM directly.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::core::sanitize::normalize_ws;
use crate::error::PageError;

pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(markup: &str) -> Self {
        Self { html: Html::parse_document(markup) }
    }

    pub fn select<'a, 'b>(&'a self, sel: &'b Selector) -> scraper::html::Select<'a, 'b> {
        self.html.select(sel)
    }

    pub fn first(&self, sel: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(sel).next()
    }

    /// Href of the first `<a>` whose visible text is exactly `label`.
    /// No trimming or case folding: the site labels its links consistently.
    pub fn link_by_text(&self, label: &str) -> Option<&str> {
        self.html
            .select(selector!("a[href]"))
            .find(|a| a.text().collect::<String>() == label)
            .and_then(|a| a.value().attr("href"))
    }
}

/// Visible text of an element, whitespace collapsed and trimmed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// First `<a href>` inside an element, if any.
pub fn first_href<'a>(el: ElementRef<'a>) -> Option<&'a str> {
    el.select(selector!("a[href]"))
        .next()
        .and_then(|a| a.value().attr("href"))
}

/// Join a (possibly relative) href against the site origin.
pub fn resolve(base: &Url, href: &str) -> Result<Url, PageError> {
    base.join(href.trim()).map_err(|source| PageError::BadHref { href: s!(href), source })
}
