// ABOUTME: Presence evaluator mapping a parsed document and a checklist to selector -> bool.
// ABOUTME: Defines PresenceMap, the ordered result serialized as the program's output.

//! Selector presence evaluation.
//!
//! Key behaviors:
//! - Selectors are sorted by byte order before evaluation; the map iterates
//!   in that order regardless of the checklist's order.
//! - A selector is present when at least one element matches it.
//! - Duplicate selectors collapse to one entry.
//! - An unparseable selector aborts the whole evaluation with a `Selector` error.

use std::collections::BTreeMap;

use scraper::{Html, Selector};
use serde::Serialize;

use crate::error::GradeError;

/// Selector -> presence, iterated in sorted selector order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PresenceMap(BTreeMap<String, bool>);

impl PresenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the result for `selector`, replacing any earlier value.
    pub fn insert(&mut self, selector: impl Into<String>, present: bool) {
        self.0.insert(selector.into(), present);
    }

    pub fn get(&self, selector: &str) -> Option<bool> {
        self.0.get(selector).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn selectors(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Returns true when `css` matches at least one element of `doc`.
pub fn is_present(doc: &Html, css: &str) -> Result<bool, GradeError> {
    let selector = Selector::parse(css).map_err(|e| {
        GradeError::selector(css, "Evaluate", Some(anyhow::anyhow!("{}", e)))
    })?;
    Ok(doc.select(&selector).next().is_some())
}

/// Evaluates every selector of `checklist` against `doc`.
pub fn evaluate(doc: &Html, checklist: &[String]) -> Result<PresenceMap, GradeError> {
    let mut sorted: Vec<&str> = checklist.iter().map(String::as_str).collect();
    sorted.sort();

    let before = sorted.len();
    sorted.dedup();
    let duplicates = before - sorted.len();
    if duplicates > 0 {
        tracing::warn!(duplicates, "checklist contains duplicate selectors");
    }

    let mut out = PresenceMap::new();
    for css in sorted {
        let present = is_present(doc, css)?;
        tracing::debug!(selector = css, present, "evaluated selector");
        out.insert(css, present);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html>
        <head><title>Test Page</title></head>
        <body>
            <h1>Main Title</h1>
            <ul class="items">
                <li>Item One</li>
                <li class="last">Item Two</li>
            </ul>
            <a href="/about" rel="nofollow">About</a>
        </body>
        </html>
    "#;

    fn parse_html() -> Html {
        Html::parse_document(SAMPLE_HTML)
    }

    fn checklist(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn title_and_heading_present_image_absent() {
        let doc = parse_html();
        let map = evaluate(&doc, &checklist(&["h1", "title", "img"])).unwrap();

        assert_eq!(map.get("h1"), Some(true));
        assert_eq!(map.get("title"), Some(true));
        assert_eq!(map.get("img"), Some(false));
        assert_eq!(map.selectors().collect::<Vec<_>>(), vec!["h1", "img", "title"]);
    }

    #[test]
    fn empty_checklist_yields_empty_map() {
        let doc = parse_html();
        let map = evaluate(&doc, &[]).unwrap();
        assert!(map.is_empty());
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn compound_selectors_are_supported() {
        let doc = parse_html();
        let map = evaluate(
            &doc,
            &checklist(&["ul.items > li.last", "a[rel='nofollow']", "ol li"]),
        )
        .unwrap();

        assert_eq!(map.get("ul.items > li.last"), Some(true));
        assert_eq!(map.get("a[rel='nofollow']"), Some(true));
        assert_eq!(map.get("ol li"), Some(false));
    }

    #[test]
    fn duplicates_collapse_to_one_entry() {
        let doc = parse_html();
        let map = evaluate(&doc, &checklist(&["h1", "img", "h1", "h1"])).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("h1"), Some(true));
    }

    #[test]
    fn permutations_produce_identical_maps() {
        let doc = parse_html();
        let a = evaluate(&doc, &checklist(&["title", "li", "img", "body"])).unwrap();
        let b = evaluate(&doc, &checklist(&["img", "body", "title", "li"])).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            a.selectors().collect::<Vec<_>>(),
            b.selectors().collect::<Vec<_>>()
        );
    }

    #[test]
    fn evaluation_is_idempotent() {
        let doc = parse_html();
        let checks = checklist(&["h1", "p", ".items"]);
        assert_eq!(evaluate(&doc, &checks).unwrap(), evaluate(&doc, &checks).unwrap());
    }

    #[test]
    fn sort_is_case_sensitive_byte_order() {
        let doc = parse_html();
        let map = evaluate(&doc, &checklist(&["li", "UL", "H1", "a"])).unwrap();
        assert_eq!(
            map.selectors().collect::<Vec<_>>(),
            vec!["H1", "UL", "a", "li"]
        );
    }

    #[test]
    fn malformed_selector_is_an_error() {
        let doc = parse_html();
        let err = evaluate(&doc, &checklist(&["h1", "div[", "title"])).unwrap_err();
        assert!(err.is_selector());
        assert_eq!(err.target, "div[");
    }

    #[test]
    fn is_present_on_single_selector() {
        let doc = parse_html();
        assert!(is_present(&doc, "head > title").unwrap());
        assert!(!is_present(&doc, "table").unwrap());
    }
}
