use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Cover image of a post, tagged by where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PostImage {
    /// Bytes accepted by the media store, served from the uploads directory.
    Uploaded { path: String },
    /// A URL supplied by the editor, stored verbatim.
    External { url: String },
}

impl PostImage {
    /// Pick the image for a submitted form. An upload always wins over a URL;
    /// blank URLs count as absent.
    pub fn resolve(uploaded_path: Option<String>, external_url: Option<&str>) -> Option<Self> {
        if let Some(path) = uploaded_path {
            return Some(Self::Uploaded { path });
        }

        external_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(|url| Self::External {
                url: url.to_string(),
            })
    }
}

/// Editable fields of a post, as submitted by the admin forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub image: Option<PostImage>,
}

/// Post entity - a published blog article.
///
/// `category` holds a category slug by value; nothing keeps it in sync with
/// the categories collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: String,
    pub image: Option<PostImage>,
    pub tags: Vec<String>,
    pub views: u64,
    pub likes: u64,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with zeroed counters.
    pub fn new(draft: PostDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            content: draft.content,
            category: draft.category,
            image: draft.image,
            tags: draft.tags,
            views: 0,
            likes: 0,
            created_at: Utc::now(),
        }
    }

    /// Overwrite the editable fields. Counters and `created_at` are never
    /// touched, and a draft without an image keeps the current one.
    pub fn apply(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.content = draft.content;
        self.category = draft.category;
        self.tags = draft.tags;
        if draft.image.is_some() {
            self.image = draft.image;
        }
    }

    /// Case-insensitive substring match against title, content and tags.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();

        self.title.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}

/// Split a comma-separated tag string, trimming each piece and dropping
/// empty ones.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> PostDraft {
        PostDraft {
            title: title.to_string(),
            content: "Body text".to_string(),
            category: "rust".to_string(),
            tags: vec!["Async".to_string(), "tokio".to_string()],
            image: None,
        }
    }

    #[test]
    fn test_new_post_starts_with_zero_counters() {
        let post = Post::new(draft("Hello"));

        assert_eq!(post.views, 0);
        assert_eq!(post.likes, 0);
        assert_eq!(post.tags, vec!["Async", "tokio"]);
    }

    #[test]
    fn test_parse_tags_trims_and_drops_empty_pieces() {
        assert_eq!(parse_tags(" rust, web ,, actix "), vec!["rust", "web", "actix"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ").is_empty());
    }

    #[test]
    fn test_upload_takes_precedence_over_url() {
        let image = PostImage::resolve(
            Some("/uploads/1-cover.png".to_string()),
            Some("https://example.com/a.png"),
        );

        assert_eq!(
            image,
            Some(PostImage::Uploaded {
                path: "/uploads/1-cover.png".to_string()
            })
        );
    }

    #[test]
    fn test_blank_url_is_no_image() {
        assert_eq!(PostImage::resolve(None, Some("   ")), None);
        assert_eq!(
            PostImage::resolve(None, Some(" https://example.com/a.png ")),
            Some(PostImage::External {
                url: "https://example.com/a.png".to_string()
            })
        );
    }

    #[test]
    fn test_apply_keeps_counters_and_image() {
        let mut post = Post::new(PostDraft {
            image: Some(PostImage::External {
                url: "https://example.com/a.png".to_string(),
            }),
            ..draft("Old")
        });
        post.views = 7;
        post.likes = 3;
        let created_at = post.created_at;

        post.apply(PostDraft {
            tags: vec![],
            ..draft("New")
        });

        assert_eq!(post.title, "New");
        assert!(post.tags.is_empty());
        assert_eq!(post.views, 7);
        assert_eq!(post.likes, 3);
        assert_eq!(post.created_at, created_at);
        assert!(post.image.is_some());
    }

    #[test]
    fn test_matches_title_content_and_tags_case_insensitively() {
        let post = Post::new(draft("Learning Rust"));

        assert!(post.matches("rust"));
        assert!(post.matches("BODY"));
        assert!(post.matches("async"));
        assert!(!post.matches("python"));
    }
}
