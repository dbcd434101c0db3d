//! Canonical `<link>` detection in HTML bodies.

use scraper::{Html, Selector};

/// True when the document has a `link` element whose `rel` contains
/// "canonical" (case-insensitive). Broken markup yields whatever the
/// tolerant parser recovers, so this never fails.
pub fn html_has_canonical(html: &str) -> bool {
    let Ok(selector) = Selector::parse("link[rel]") else {
        return false;
    };
    let document = Html::parse_document(html);
    // Bound so the `Select` iterator is dropped before `document`.
    let found = document.select(&selector).any(|el| {
        el.value()
            .attr("rel")
            .is_some_and(|rel| rel.to_ascii_lowercase().contains("canonical"))
    });
    found
}
