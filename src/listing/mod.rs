//! Reddit listing access: endpoints, wire types, ranking and the HTTP client.

mod client;
mod endpoint;
mod error;
mod post;
pub mod thumbnail;
mod types;

pub use client::ListingClient;
pub use endpoint::ListingRequest;
pub use error::FetchError;
pub use post::{rank_posts, Post};
pub use thumbnail::{is_valid_image, Thumbnail};
pub use types::{Child, ListingData, ListingPayload, PostData};
