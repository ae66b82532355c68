//! Data Transfer Objects - submitted forms and the view model of each page.

use serde::{Deserialize, Serialize};

use quill_core::domain::{Category, Comment, Post};

/// Admin login form. Missing fields read as empty so an incomplete
/// submission is rejected like a wrong password.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Create/edit category form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryForm {
    pub name: String,
}

/// Public comment form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentForm {
    pub name: String,
    pub email: String,
    pub comment: String,
}

/// `GET /search` query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    /// The trimmed search term, if there is one.
    pub fn term(&self) -> Option<&str> {
        self.q.as_deref().map(str::trim).filter(|q| !q.is_empty())
    }
}

/// `GET /post/{id}` query string; `comment` echoes the comment outcome.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostPageParams {
    pub comment: Option<String>,
}

/// `GET /admin/login` query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginPageParams {
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeView {
    pub posts: Vec<Post>,
    pub categories: Vec<Category>,
    pub popular_posts: Vec<Post>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchView {
    pub posts: Vec<Post>,
    pub categories: Vec<Category>,
    /// Empty when no query was given.
    pub search_query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryView {
    pub posts: Vec<Post>,
    pub categories: Vec<Category>,
    pub current_category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostPageView {
    pub post: Post,
    pub comments: Vec<Comment>,
    pub popular_posts: Vec<Post>,
    pub recent_posts: Vec<Post>,
    pub categories: Vec<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginView {
    pub error: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub admin: String,
    pub post_count: u64,
    pub category_count: u64,
    pub comment_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminPostsView {
    pub posts: Vec<Post>,
    pub categories: Vec<Category>,
}

/// New-post (`post` is `None`) and edit-post form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostFormView {
    pub post: Option<Post>,
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCategoriesView {
    pub categories: Vec<Category>,
}

/// New-category (`category` is `None`) and edit-category form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryFormView {
    pub category: Option<Category>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_search_term_is_none() {
        let blank = SearchParams {
            q: Some("   ".to_string()),
        };
        let padded = SearchParams {
            q: Some(" rust ".to_string()),
        };

        assert_eq!(blank.term(), None);
        assert_eq!(SearchParams::default().term(), None);
        assert_eq!(padded.term(), Some("rust"));
    }

    #[test]
    fn test_login_form_tolerates_missing_fields() {
        let form: LoginForm = serde_json::from_str(r#"{"password":"admin123"}"#).unwrap();

        assert_eq!(form.username, "");
        assert_eq!(form.password, "admin123");
    }
}
