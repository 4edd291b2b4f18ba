//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_listing;

pub use mock_listing::{listing_json, MockListing, MockResponse};

use reddit_top::config::ApiConfig;
use reddit_top::listing::{Child, ListingData, ListingPayload, PostData};
use reddit_top::ui::app::App;
use std::net::TcpListener;

/// API config pointing at `base_url`.
pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        ..ApiConfig::default()
    }
}

/// Base URL of a port nothing listens on.
pub fn dead_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

pub fn make_app() -> App {
    App::new(ApiConfig::default())
}

/// Decoded listing payload with one post per `(title, ups)` pair.
pub fn listing_payload(posts: &[(&str, i64)]) -> ListingPayload {
    ListingPayload::Listing(ListingData {
        children: posts
            .iter()
            .map(|(title, ups)| Child {
                data: PostData {
                    title: title.to_string(),
                    subreddit: "test".to_string(),
                    thumbnail: "self".to_string(),
                    permalink: format!("/r/test/comments/{}/", title),
                    ups: *ups,
                },
            })
            .collect(),
    })
}
