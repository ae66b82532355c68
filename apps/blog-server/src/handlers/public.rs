//! Public pages: listings, post view, likes and comments.

use actix_web::{HttpResponse, web};

use quill_core::domain::{Comment, PostQuery};
use quill_core::error::RepoError;
use quill_core::ports::CommentNotice;
use quill_shared::LikeResponse;
use quill_shared::dto::{
    CategoryView, CommentForm, HomeView, PostPageParams, PostPageView, SearchParams, SearchView,
};

use super::{HOME_POST_LIMIT, SIDEBAR_LIMIT, parse_id, see_other};
use crate::middleware::AppResult;
use crate::state::AppState;

/// Degrade a failed listing to an empty one.
fn fail_soft<T>(result: Result<Vec<T>, RepoError>, what: &str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load {}, rendering an empty list", what);
        Vec::new()
    })
}

/// GET /
pub async fn home(state: web::Data<AppState>) -> HttpResponse {
    let posts = state
        .posts
        .list(PostQuery::newest().limit(HOME_POST_LIMIT))
        .await;
    let categories = state.categories.list_by_name().await;
    let popular = state
        .posts
        .list(PostQuery::most_viewed().limit(SIDEBAR_LIMIT))
        .await;

    HttpResponse::Ok().json(HomeView {
        posts: fail_soft(posts, "recent posts"),
        categories: fail_soft(categories, "categories"),
        popular_posts: fail_soft(popular, "popular posts"),
    })
}

/// GET /search?q=
///
/// Without a term this lists every post, not just the home page's six.
pub async fn search(state: web::Data<AppState>, params: web::Query<SearchParams>) -> HttpResponse {
    let term = params.term().map(String::from);

    let query = match &term {
        Some(term) => PostQuery::search(term.clone()),
        None => PostQuery::newest(),
    };
    let posts = state.posts.list(query).await;
    let categories = state.categories.list_by_name().await;

    HttpResponse::Ok().json(SearchView {
        posts: fail_soft(posts, "search results"),
        categories: fail_soft(categories, "categories"),
        search_query: term.unwrap_or_default(),
    })
}

/// GET /category/{slug}
pub async fn category(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();

    let posts = state.posts.list(PostQuery::in_category(slug.clone())).await?;
    let categories = state.categories.list_by_name().await?;

    Ok(HttpResponse::Ok().json(CategoryView {
        posts,
        categories,
        current_category: slug,
    }))
}

/// GET /post/{id}
///
/// Every request counts as a view. Unknown ids go back to the home page.
pub async fn post_page(
    state: web::Data<AppState>,
    path: web::Path<String>,
    params: web::Query<PostPageParams>,
) -> AppResult<HttpResponse> {
    let Some(id) = parse_id(&path) else {
        return Ok(see_other("/"));
    };

    let post = match state.posts.record_view(id).await {
        Ok(Some(post)) => post,
        Ok(None) => {
            tracing::debug!(post_id = %id, "Post not found, redirecting home");
            return Ok(see_other("/"));
        }
        Err(e) => {
            tracing::warn!(post_id = %id, error = %e, "Post lookup failed, redirecting home");
            return Ok(see_other("/"));
        }
    };

    let comments = state.comments.find_by_post(&post.id.to_string()).await?;
    let popular_posts = state
        .posts
        .list(PostQuery::most_viewed().limit(SIDEBAR_LIMIT))
        .await?;
    let recent_posts = state
        .posts
        .list(PostQuery::newest().limit(SIDEBAR_LIMIT))
        .await?;
    let categories = state.categories.list_by_name().await?;

    Ok(HttpResponse::Ok().json(PostPageView {
        post,
        comments,
        popular_posts,
        recent_posts,
        categories,
        comment_status: params.into_inner().comment,
    }))
}

/// POST /post/{id}/like
pub async fn like_post(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let success = match parse_id(&path) {
        Some(id) => match state.posts.record_like(id).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(post_id = %id, error = %e, "Failed to record like");
                false
            }
        },
        None => false,
    };

    HttpResponse::Ok().json(LikeResponse { success })
}

/// Best-effort notice for a stored comment. Never retried.
async fn notify(state: &AppState, comment: &Comment) -> bool {
    let notice = CommentNotice::from(comment);

    match tokio::time::timeout(state.notify_timeout, state.notifier.notify(&notice)).await {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            tracing::warn!(comment_id = %comment.id, error = %e, "Comment saved but notification failed");
            false
        }
        Err(_) => {
            tracing::warn!(comment_id = %comment.id, "Comment saved but notification timed out");
            false
        }
    }
}

/// POST /post/{id}/comment
///
/// The comment is stored first; a failed notification only changes the
/// `comment=` marker and never removes it.
pub async fn comment_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<CommentForm>,
) -> HttpResponse {
    let raw_id = path.into_inner();
    let post_id = parse_id(&raw_id);
    let form = form.into_inner();

    let comment = Comment::new(
        post_id.map(|id| id.to_string()).unwrap_or(raw_id),
        form.name,
        form.email,
        form.comment,
    );

    let delivered = match state.comments.insert(comment).await {
        Ok(saved) => {
            tracing::info!(comment_id = %saved.id, post_id = %saved.post_id, "Comment stored");
            notify(&state, &saved).await
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to store comment");
            false
        }
    };

    let status = if delivered { "success" } else { "error" };
    match post_id {
        Some(id) => see_other(&format!("/post/{}?comment={}", id, status)),
        None => see_other(&format!("/?comment={}", status)),
    }
}
