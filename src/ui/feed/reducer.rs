use crate::listing::{rank_posts, FetchError, ListingPayload};
use crate::ui::feed::intent::FeedIntent;
use crate::ui::feed::state::FeedState;
use crate::ui::mvi::Reducer;

pub struct FeedReducer;

impl Reducer for FeedReducer {
    type State = FeedState;
    type Intent = FeedIntent;

    /// Every resolution replaces the state outright; nothing from the
    /// previous listing survives.
    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FeedIntent::FetchSucceeded {
                payload: ListingPayload::Error { code },
                ..
            } => FeedState::Failed {
                error: FetchError::Api { code },
            },
            FeedIntent::FetchSucceeded {
                payload: ListingPayload::Listing(data),
                link_origin,
            } => FeedState::Loaded {
                posts: rank_posts(data.children, &link_origin),
            },
            FeedIntent::FetchFailed { error } => FeedState::Failed { error },
        }
    }
}
