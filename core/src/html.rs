use lazy_static::lazy_static;
use scraper::{Html, Selector};

lazy_static! {
    static ref ANCHOR: Selector = Selector::parse("a[href]").expect("valid selector");
}

/// Raw `href` values of every anchor in document order, unresolved.
pub fn anchor_hrefs(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    doc.select(&ANCHOR)
        .filter_map(|a| a.value().attr("href"))
        .map(str::to_string)
        .collect()
}

/// All text nodes of the document concatenated as-is, markup dropped.
pub fn extract_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    doc.root_element().text().collect()
}
