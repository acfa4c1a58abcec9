//! Page model: index range, per-page URL, and output filename.
//!
//! Pages are 1-based ordinals into a paginated endpoint; page `i` is fetched
//! from `<endpoint>?page=<i>` and saved as `<i>.png`.

use url::Url;

/// Inclusive range of 1-based page indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub first: u32,
    pub last: u32,
}

impl PageRange {
    /// Range covering pages `1..=count`. Empty when `count` is 0.
    pub fn through(count: u32) -> Self {
        Self { first: 1, last: count }
    }

    pub fn len(&self) -> usize {
        if self.last < self.first {
            0
        } else {
            (self.last - self.first + 1) as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.last < self.first
    }

    /// Page indices in strictly increasing order.
    pub fn pages(self) -> impl Iterator<Item = u32> {
        self.first..=self.last
    }
}

/// URL for one page: `endpoint` with its `page` query parameter set to `page`.
/// Any `page` parameter already on the endpoint is replaced; other query
/// parameters are kept as-is.
pub fn page_url(endpoint: &Url, page: u32) -> Url {
    let kept: Vec<(String, String)> = endpoint
        .query_pairs()
        .into_owned()
        .filter(|(k, _)| k.as_str() != "page")
        .collect();

    let mut url = endpoint.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        pairs.extend_pairs(kept);
        pairs.append_pair("page", &page.to_string());
    }
    url
}

/// Output filename for one page (`"<i>.png"`).
pub fn page_filename(page: u32) -> String {
    format!("{}.png", page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_through_count() {
        let pages: Vec<u32> = PageRange::through(3).pages().collect();
        assert_eq!(pages, vec![1, 2, 3]);
        assert_eq!(PageRange::through(3).len(), 3);
    }

    #[test]
    fn range_through_zero_is_empty() {
        let r = PageRange::through(0);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.pages().count(), 0);
    }

    #[test]
    fn range_covers_observed_configuration() {
        let r = PageRange::through(116);
        assert_eq!(r.first, 1);
        assert_eq!(r.last, 116);
        assert_eq!(r.len(), 116);
    }

    #[test]
    fn page_url_appends_query() {
        let endpoint = Url::parse("https://example.com/api/v1/cloud-labs/1/writeup").unwrap();
        let u = page_url(&endpoint, 7);
        assert_eq!(
            u.as_str(),
            "https://example.com/api/v1/cloud-labs/1/writeup?page=7"
        );
    }

    #[test]
    fn page_url_keeps_other_params() {
        let endpoint = Url::parse("https://example.com/writeup?lab=1").unwrap();
        let u = page_url(&endpoint, 2);
        assert_eq!(u.as_str(), "https://example.com/writeup?lab=1&page=2");
    }

    #[test]
    fn page_url_replaces_existing_page_param() {
        let endpoint = Url::parse("https://example.com/writeup?page=99").unwrap();
        let u = page_url(&endpoint, 3);
        assert_eq!(u.as_str(), "https://example.com/writeup?page=3");
    }

    #[test]
    fn filename_is_index_png() {
        assert_eq!(page_filename(1), "1.png");
        assert_eq!(page_filename(116), "116.png");
    }
}
