use crate::listing::{FetchError, ListingPayload};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FeedIntent {
    /// A response body decoded. May still carry an API-reported error.
    FetchSucceeded {
        payload: ListingPayload,
        /// Prefix for post hyperlinks.
        link_origin: String,
    },
    /// The request failed or the body did not decode.
    FetchFailed { error: FetchError },
}

impl Intent for FeedIntent {}
