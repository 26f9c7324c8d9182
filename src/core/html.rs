// src/core/html.rs
//! Small helpers over `scraper` shared by the page specs.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

use super::sanitize::clean_text;

/// Compile a selector literal. Selectors in this crate are constants, so a
/// failure here is a programming error, not a page anomaly.
pub fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector `{css}`: {e}"))
}

/// Visible text of an element: entity-decoded, whitespace collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    clean_text(&el.text().collect::<String>())
}

/// Direct element children (text and comment nodes skipped).
pub fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children().filter_map(ElementRef::wrap)
}

/// First match in the document, or a `Parse` error naming what was missing.
pub fn select_one<'a>(doc: &'a Html, css: &str, what: &str, url: &str) -> Result<ElementRef<'a>> {
    doc.select(&sel(css)).next().ok_or_else(|| ScrapeError::parse(what, url))
}

/// First match under `el`, or a `Parse` error.
pub fn select_within<'a>(el: ElementRef<'a>, css: &str, what: &str, url: &str) -> Result<ElementRef<'a>> {
    el.select(&sel(css)).next().ok_or_else(|| ScrapeError::parse(what, url))
}

/// Make `href` absolute against `base` (the site only ever uses root-relative
/// or absolute links).
pub fn absolute_url(base: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    let origin = origin_of(base);
    if href.starts_with('/') {
        join!(origin, href)
    } else {
        join!(base.trim_end_matches('/'), "/", href)
    }
}

fn origin_of(url: &str) -> &str {
    let after_scheme = url.find("://").map(|i| i + 3).unwrap_or(0);
    match url[after_scheme..].find('/') {
        Some(slash) => &url[..after_scheme + slash],
        None => url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_cleaned() {
        let doc = Html::parse_fragment("<div> Bats &amp;#038;\n Balls </div>");
        let div = doc.select(&sel("div")).next().unwrap();
        assert_eq!(text_of(div), "Bats & Balls");
    }

    #[test]
    fn absolute_urls() {
        assert_eq!(absolute_url("https://x.org/", "/event/1/"), "https://x.org/event/1/");
        assert_eq!(absolute_url("https://x.org/a/b", "/c"), "https://x.org/c");
        assert_eq!(absolute_url("https://x.org/a", "c"), "https://x.org/a/c");
        assert_eq!(absolute_url("https://x.org/", "https://y.org/z"), "https://y.org/z");
    }
}
