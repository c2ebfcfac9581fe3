//! HTML parser for extracting candidate download links
//!
//! Link extraction is literal: every `<a href>` in document
//! order, turned absolute with the run's prefix, then kept only if it contains
//! the filter substring. Duplicates are not removed.

use crate::url::absolutize;
use scraper::{Html, Selector};

/// Returns the `href` of every anchor element, in document order
///
/// Anchors without an `href`, or whose `href` is blank, are skipped.
/// Surrounding whitespace is trimmed.
///
/// # Example
///
/// ```
/// use link_harvester::harvest::extract_hrefs;
///
/// let html = r#"<a href="/a.csv">A</a><a>no link</a><a href="">empty</a>"#;
/// assert_eq!(extract_hrefs(html), vec!["/a.csv".to_string()]);
/// ```
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut hrefs = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                let href = href.trim();
                if !href.is_empty() {
                    hrefs.push(href.to_string());
                }
            }
        }
    }

    hrefs
}

/// Keeps the links containing `contains` anywhere in the string
pub fn filter_links(links: Vec<String>, contains: &str) -> Vec<String> {
    links
        .into_iter()
        .filter(|link| link.contains(contains))
        .collect()
}

/// Extracts absolute links from a listing page and applies the filter
///
/// # Arguments
///
/// * `html` - The listing page body
/// * `prefix` - Scheme+host (or custom) prefix for relative hrefs
/// * `contains` - Substring every returned link must contain
///
/// # Returns
///
/// Absolute links in document order
pub fn extract_links(html: &str, prefix: &str, contains: &str) -> Vec<String> {
    let links = extract_hrefs(html)
        .iter()
        .map(|href| absolutize(prefix, href))
        .collect();

    filter_links(links, contains)
}
