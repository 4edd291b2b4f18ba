//! Listing endpoints.

/// Which listing to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingRequest {
    /// The default listing (`/.json`).
    FrontPage,
    /// The "hot" listing of a named community. The name is not validated.
    Community(String),
}

impl ListingRequest {
    /// Maps a search term to a request. An empty term means the front page.
    pub fn from_term(term: &str) -> Self {
        if term.is_empty() {
            ListingRequest::FrontPage
        } else {
            ListingRequest::Community(term.to_string())
        }
    }

    /// Full URL under `base_url`. Community names are interpolated verbatim.
    pub fn url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        match self {
            ListingRequest::FrontPage => format!("{}/.json", base),
            ListingRequest::Community(name) => format!("{}/r/{}/hot.json", base, name),
        }
    }

    /// Short label for the header.
    pub fn label(&self) -> String {
        match self {
            ListingRequest::FrontPage => "front page".to_string(),
            ListingRequest::Community(name) => format!("r/{}", name),
        }
    }
}
