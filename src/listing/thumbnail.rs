//! Thumbnail validity filter.
//!
//! A deny-list heuristic: it neither fetches the resource nor checks that it
//! is an image.

use reqwest::Url;

/// Preview host whose links are known not to load outside reddit.
const BROKEN_PREVIEW_PREFIX: &str = "https://external-preview.redd.it";

/// What to show in a post's thumbnail slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Thumbnail {
    Placeholder,
    Image(String),
}

impl Thumbnail {
    pub fn from_url(url: &str) -> Self {
        if is_valid_image(url) {
            Thumbnail::Image(url.to_string())
        } else {
            Thumbnail::Placeholder
        }
    }
}

/// True when `url` is worth showing as a thumbnail.
///
/// Reddit uses tokens like `self`, `default` or `nsfw` in the thumbnail field;
/// those fail to parse and are rejected.
pub fn is_valid_image(url: &str) -> bool {
    if url.starts_with(BROKEN_PREVIEW_PREFIX) {
        return false;
    }
    Url::parse(url).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_external_preview_links() {
        assert!(!is_valid_image("https://external-preview.redd.it/anything"));
    }

    #[test]
    fn rejects_unparseable_strings() {
        assert!(!is_valid_image("not a url"));
        assert!(!is_valid_image(""));
        assert!(!is_valid_image("self"));
        assert!(!is_valid_image("default"));
    }

    #[test]
    fn accepts_absolute_urls() {
        assert!(is_valid_image("https://example.com/a.png"));
        assert!(is_valid_image("https://b.thumbs.redditmedia.com/x.jpg"));
    }

    #[test]
    fn thumbnail_variants() {
        assert_eq!(Thumbnail::from_url("nsfw"), Thumbnail::Placeholder);
        assert_eq!(
            Thumbnail::from_url("https://example.com/a.png"),
            Thumbnail::Image("https://example.com/a.png".to_string())
        );
    }
}
