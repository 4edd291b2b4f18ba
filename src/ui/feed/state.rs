//! State for the listing view.

use crate::listing::{FetchError, Post};
use crate::ui::mvi::UiState;

/// Three-way view state. Posts and error never coexist.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FeedState {
    /// Nothing has resolved yet.
    #[default]
    Loading,

    /// Last fetch failed. Stays until the next search resolves.
    Failed { error: FetchError },

    /// Posts sorted by upvotes, highest first.
    Loaded { posts: Vec<Post> },
}

impl UiState for FeedState {}

impl FeedState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn posts(&self) -> Option<&[Post]> {
        match self {
            Self::Loaded { posts } => Some(posts),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed { error } => Some(error),
            _ => None,
        }
    }
}
