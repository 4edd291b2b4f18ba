//! Pure mapping from UI state to display elements.
//!
//! `build` decides *what* is on screen; `render` decides how it is drawn.

use crate::listing::{Post, Thumbnail};
use crate::ui::feed::FeedState;
use crate::ui::search::SearchState;

pub const TITLE: &str = "Top Reddit Posts";
pub const LOADING_NOTICE: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Heading(String),
    Notice(String),
    SearchBar { text: String },
    Post(PostEntry),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostEntry {
    /// Position in the listing.
    pub key: usize,
    pub title: String,
    pub hyperlink: String,
    pub subreddit_label: String,
    pub thumbnail: Thumbnail,
    pub upvotes_label: String,
}

impl PostEntry {
    fn from_post(key: usize, post: &Post) -> Self {
        Self {
            key,
            title: post.title.clone(),
            hyperlink: post.hyperlink.clone(),
            subreddit_label: format!("r/{}", post.subreddit),
            thumbnail: Thumbnail::from_url(&post.thumbnail_url),
            upvotes_label: format!("This post has {} ups", post.upvotes),
        }
    }
}

pub fn build(feed: &FeedState, search: &SearchState) -> Vec<Element> {
    let search_bar = Element::SearchBar {
        text: search.text.clone(),
    };

    match feed {
        FeedState::Failed { error } => {
            vec![Element::Notice(error.user_message().to_string()), search_bar]
        }
        FeedState::Loading => vec![Element::Notice(LOADING_NOTICE.to_string()), search_bar],
        FeedState::Loaded { posts } => {
            let mut elements = Vec::with_capacity(posts.len() + 2);
            elements.push(Element::Heading(TITLE.to_string()));
            elements.push(search_bar);
            elements.extend(
                posts
                    .iter()
                    .enumerate()
                    .map(|(key, post)| Element::Post(PostEntry::from_post(key, post))),
            );
            elements
        }
    }
}
