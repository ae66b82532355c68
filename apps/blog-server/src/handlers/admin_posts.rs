//! Admin post management.

use actix_multipart::form::{MultipartForm, tempfile::TempFile, text::Text};
use actix_web::{HttpResponse, web};

use quill_core::domain::{Post, PostDraft, PostImage, PostQuery, parse_tags};
use quill_core::error::RepoError;
use quill_core::ports::{MediaError, MediaStore};
use quill_shared::dto::{AdminPostsView, PostFormView};

use super::{parse_id, see_other};
use crate::middleware::{AdminSession, AppResult};
use crate::state::AppState;

const POSTS_PATH: &str = "/admin/posts";

/// Multipart body of the create and edit forms.
#[derive(Debug, MultipartForm)]
pub struct PostUpload {
    title: Text<String>,
    content: Text<String>,
    category: Text<String>,
    tags: Option<Text<String>>,
    image_url: Option<Text<String>>,
    #[multipart(limit = "10MB")]
    image: Option<TempFile>,
}

impl PostUpload {
    /// Resolve the submitted form into a draft, storing the upload first.
    ///
    /// Browsers send an empty file part when nothing was picked; that counts
    /// as no upload.
    async fn into_draft(self, media: &dyn MediaStore) -> Result<PostDraft, MediaError> {
        let uploaded = match self.image.filter(|file| file.size > 0) {
            Some(file) => {
                let bytes = tokio::fs::read(file.file.path())
                    .await
                    .map_err(|e| MediaError::Io(e.to_string()))?;
                let name = file.file_name.unwrap_or_default();
                Some(media.store(&name, bytes).await?)
            }
            None => None,
        };

        let image_url = self.image_url.map(Text::into_inner);

        Ok(PostDraft {
            title: self.title.into_inner(),
            content: self.content.into_inner(),
            category: self.category.into_inner(),
            tags: self
                .tags
                .map(|raw| parse_tags(&raw))
                .unwrap_or_default(),
            image: PostImage::resolve(uploaded, image_url.as_deref()),
        })
    }
}

/// GET /admin/posts
pub async fn list(_admin: AdminSession, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list(PostQuery::newest()).await?;
    let categories = state.categories.list_by_name().await?;

    Ok(HttpResponse::Ok().json(AdminPostsView { posts, categories }))
}

/// GET /admin/posts/new
pub async fn new_form(
    _admin: AdminSession,
    state: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let categories = state.categories.list_by_name().await?;

    Ok(HttpResponse::Ok().json(PostFormView {
        post: None,
        categories,
    }))
}

/// POST /admin/posts
pub async fn create(
    _admin: AdminSession,
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<PostUpload>,
) -> AppResult<HttpResponse> {
    let draft = form.into_draft(state.media.as_ref()).await?;
    let post = state.posts.insert(Post::new(draft)).await?;

    tracing::info!(post_id = %post.id, title = %post.title, "Post created");
    Ok(see_other(POSTS_PATH))
}

/// GET /admin/posts/{id}/edit
pub async fn edit_form(
    _admin: AdminSession,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let Some(id) = parse_id(&path) else {
        tracing::warn!(raw_id = %path, "Edit requested for malformed post id");
        return Ok(see_other(POSTS_PATH));
    };

    let Some(post) = state.posts.find_by_id(id).await? else {
        tracing::warn!(post_id = %id, "Edit requested for missing post");
        return Ok(see_other(POSTS_PATH));
    };
    let categories = state.categories.list_by_name().await?;

    Ok(HttpResponse::Ok().json(PostFormView {
        post: Some(post),
        categories,
    }))
}

/// PUT /admin/posts/{id}
pub async fn update(
    _admin: AdminSession,
    state: web::Data<AppState>,
    path: web::Path<String>,
    MultipartForm(form): MultipartForm<PostUpload>,
) -> AppResult<HttpResponse> {
    let Some(id) = parse_id(&path) else {
        tracing::warn!(raw_id = %path, "Update requested for malformed post id");
        return Ok(see_other(POSTS_PATH));
    };

    // Look first so a stale form never leaves an orphaned upload behind.
    if state.posts.find_by_id(id).await?.is_none() {
        tracing::warn!(post_id = %id, "Update requested for missing post");
        return Ok(see_other(POSTS_PATH));
    }

    let draft = form.into_draft(state.media.as_ref()).await?;
    match state.posts.update(id, draft).await {
        Ok(post) => tracing::info!(post_id = %post.id, "Post updated"),
        Err(RepoError::NotFound) => {
            tracing::warn!(post_id = %id, "Post vanished before update");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(see_other(POSTS_PATH))
}

/// DELETE /admin/posts/{id}
pub async fn delete(
    _admin: AdminSession,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let Some(id) = parse_id(&path) else {
        tracing::warn!(raw_id = %path, "Delete requested for malformed post id");
        return Ok(see_other(POSTS_PATH));
    };

    state.posts.delete(id).await?;
    tracing::info!(post_id = %id, "Post deleted");

    Ok(see_other(POSTS_PATH))
}
