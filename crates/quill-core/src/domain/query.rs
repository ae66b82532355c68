//! Post listing queries shared by every store backend.

use std::cmp::Reverse;

use super::Post;

/// Which posts a listing admits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostFilter {
    All,
    /// Exact, case-sensitive match on the post's category slug.
    Category(String),
    /// Case-insensitive substring match on title, content or any tag.
    Search(String),
}

/// Sort order of a listing. Both orders are descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOrder {
    Newest,
    MostViewed,
}

/// A post listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuery {
    pub filter: PostFilter,
    pub order: PostOrder,
    pub limit: Option<u64>,
}

impl PostQuery {
    /// Every post, newest first.
    pub fn newest() -> Self {
        Self {
            filter: PostFilter::All,
            order: PostOrder::Newest,
            limit: None,
        }
    }

    /// Every post, most viewed first.
    pub fn most_viewed() -> Self {
        Self {
            order: PostOrder::MostViewed,
            ..Self::newest()
        }
    }

    pub fn in_category(slug: impl Into<String>) -> Self {
        Self {
            filter: PostFilter::Category(slug.into()),
            ..Self::newest()
        }
    }

    pub fn search(term: impl Into<String>) -> Self {
        Self {
            filter: PostFilter::Search(term.into()),
            ..Self::newest()
        }
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether a single post passes the filter.
    pub fn admits(&self, post: &Post) -> bool {
        match &self.filter {
            PostFilter::All => true,
            PostFilter::Category(slug) => post.category == *slug,
            PostFilter::Search(term) => post.matches(term),
        }
    }

    /// Filter, sort and truncate an unordered set of posts.
    pub fn apply(&self, posts: impl IntoIterator<Item = Post>) -> Vec<Post> {
        let mut selected: Vec<Post> = posts.into_iter().filter(|p| self.admits(p)).collect();

        match self.order {
            PostOrder::Newest => selected.sort_by_key(|p| Reverse(p.created_at)),
            PostOrder::MostViewed => {
                selected.sort_by_key(|p| (Reverse(p.views), Reverse(p.created_at)))
            }
        }

        if let Some(limit) = self.limit {
            selected.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }

        selected
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::domain::PostDraft;

    fn post(title: &str, category: &str, views: u64, age_minutes: i64) -> Post {
        let mut post = Post::new(PostDraft {
            title: title.to_string(),
            content: String::new(),
            category: category.to_string(),
            tags: vec![],
            image: None,
        });
        post.views = views;
        post.created_at = Utc::now() - Duration::minutes(age_minutes);
        post
    }

    #[test]
    fn test_newest_orders_by_creation_descending() {
        let posts = vec![post("old", "a", 0, 30), post("new", "a", 0, 1), post("mid", "a", 0, 10)];

        let titles: Vec<String> = PostQuery::newest()
            .apply(posts)
            .into_iter()
            .map(|p| p.title)
            .collect();

        assert_eq!(titles, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_most_viewed_with_limit() {
        let posts = vec![
            post("a", "x", 5, 1),
            post("b", "x", 50, 2),
            post("c", "x", 10, 3),
            post("d", "x", 1, 4),
        ];

        let titles: Vec<String> = PostQuery::most_viewed()
            .limit(3)
            .apply(posts)
            .into_iter()
            .map(|p| p.title)
            .collect();

        assert_eq!(titles, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_category_filter_is_case_sensitive() {
        let posts = vec![post("a", "rust", 0, 1), post("b", "Rust", 0, 2)];

        let found = PostQuery::in_category("rust").apply(posts);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "a");
    }
}
