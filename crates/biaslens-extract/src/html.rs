//! Visible-text extraction from HTML documents

use scraper::{Html, Selector};

/// Extract the visible text of an HTML document.
///
/// Uses the `<body>` element when one exists, otherwise the whole document.
/// Inline text nodes are trimmed and joined with single spaces, so markup
/// never survives into the result.
pub fn extract_main_text(html_content: &str) -> String {
    let document = Html::parse_document(html_content);

    // "body" is a valid selector, the parse cannot fail
    let body_selector = Selector::parse("body").unwrap();

    if let Some(body) = document.select(&body_selector).next() {
        return join_text_nodes(body.text());
    }

    join_text_nodes(document.root_element().text())
}

fn join_text_nodes<'a>(nodes: impl Iterator<Item = &'a str>) -> String {
    nodes
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
