use crate::validate::is_eligible;
use url::{Position, Url};
use webscour_core::html::anchor_hrefs;

/// userinfo + host + port, the part of a URL two links must share to be on the same site.
pub fn netloc(url: &Url) -> &str {
    &url[Position::BeforeUsername..Position::AfterPort]
}

/// Turns a fetched page into same-site candidate URLs.
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    seed_netloc: String,
}

impl LinkExtractor {
    pub fn for_seed(seed: &Url) -> Self {
        Self { seed_netloc: netloc(seed).to_string() }
    }

    pub fn seed_netloc(&self) -> &str { &self.seed_netloc }

    /// Resolves every anchor against `base_url` and keeps eligible links on the seed's host.
    /// Anchors are parsed up front; resolution and filtering happen as the iterator is consumed.
    pub fn extract_links<'a>(&'a self, base_url: &'a Url, html: &str) -> impl Iterator<Item = Url> + 'a {
        anchor_hrefs(html).into_iter().filter_map(move |href| self.candidate(base_url, &href))
    }

    fn candidate(&self, base_url: &Url, href: &str) -> Option<Url> {
        let mut resolved = base_url.join(href.trim()).ok()?;
        if !is_eligible(resolved.as_str()) || netloc(&resolved) != self.seed_netloc {
            return None;
        }
        // `page#part` and `page` are one candidate; in-page anchors resolve back to the page itself
        resolved.set_fragment(None);
        Some(resolved)
    }
}
