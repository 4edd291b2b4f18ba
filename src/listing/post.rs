//! Display-ready posts derived from a listing.

use crate::listing::types::{Child, PostData};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Position in the sorted listing. Not stable across reloads.
    pub id: usize,
    pub title: String,
    pub subreddit: String,
    pub thumbnail_url: String,
    pub hyperlink: String,
    pub upvotes: i64,
}

impl Post {
    fn from_data(id: usize, data: PostData, link_origin: &str) -> Self {
        Self {
            id,
            hyperlink: format!("{}{}", link_origin, data.permalink),
            title: data.title,
            subreddit: data.subreddit,
            thumbnail_url: data.thumbnail,
            upvotes: data.ups,
        }
    }
}

/// Sorts children by upvotes, highest first, and projects them to posts.
///
/// The sort is stable, so equal counts keep their API order.
pub fn rank_posts(children: Vec<Child>, link_origin: &str) -> Vec<Post> {
    let mut records: Vec<PostData> = children.into_iter().map(|child| child.data).collect();
    records.sort_by(|a, b| b.ups.cmp(&a.ups));
    records
        .into_iter()
        .enumerate()
        .map(|(id, data)| Post::from_data(id, data, link_origin))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child(title: &str, ups: i64) -> Child {
        Child {
            data: PostData {
                title: title.to_string(),
                subreddit: "test".to_string(),
                thumbnail: String::new(),
                permalink: format!("/r/test/comments/{}/", title),
                ups,
            },
        }
    }

    #[test]
    fn sorts_descending_by_ups() {
        let posts = rank_posts(
            vec![child("low", 5), child("high", 10), child("mid", 7)],
            "http://reddit.com",
        );
        let ups: Vec<i64> = posts.iter().map(|p| p.upvotes).collect();
        assert_eq!(ups, vec![10, 7, 5]);
    }

    #[test]
    fn ties_keep_api_order() {
        let posts = rank_posts(
            vec![child("first", 1), child("second", 1), child("top", 2)],
            "http://reddit.com",
        );
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["top", "first", "second"]);
    }

    #[test]
    fn ids_follow_sorted_position() {
        let posts = rank_posts(vec![child("a", 1), child("b", 2)], "http://reddit.com");
        assert_eq!(posts[0].id, 0);
        assert_eq!(posts[0].title, "b");
        assert_eq!(posts[1].id, 1);
    }

    #[test]
    fn hyperlink_concatenates_origin_and_permalink() {
        let posts = rank_posts(vec![child("x", 1)], "http://reddit.com");
        assert_eq!(posts[0].hyperlink, "http://reddit.com/r/test/comments/x/");
    }

    #[test]
    fn negative_scores_sort_last() {
        let posts = rank_posts(vec![child("neg", -3), child("zero", 0)], "o");
        assert_eq!(posts[0].title, "zero");
        assert_eq!(posts[1].title, "neg");
    }
}
