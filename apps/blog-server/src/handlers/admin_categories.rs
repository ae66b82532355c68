//! Admin category management. Renames and deletes never touch posts.

use actix_web::{HttpResponse, web};

use quill_core::domain::Category;
use quill_core::error::RepoError;
use quill_shared::dto::{AdminCategoriesView, CategoryForm, CategoryFormView};

use super::{parse_id, see_other};
use crate::middleware::{AdminSession, AppResult};
use crate::state::AppState;

const CATEGORIES_PATH: &str = "/admin/categories";

/// GET /admin/categories
pub async fn list(_admin: AdminSession, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state.categories.list_by_name().await?;
    Ok(HttpResponse::Ok().json(AdminCategoriesView { categories }))
}

/// GET /admin/categories/new
pub async fn new_form(_admin: AdminSession) -> HttpResponse {
    HttpResponse::Ok().json(CategoryFormView { category: None })
}

/// POST /admin/categories
pub async fn create(
    _admin: AdminSession,
    state: web::Data<AppState>,
    form: web::Form<CategoryForm>,
) -> AppResult<HttpResponse> {
    let category = state
        .categories
        .insert(Category::new(form.into_inner().name))
        .await?;

    tracing::info!(category_id = %category.id, slug = %category.slug, "Category created");
    Ok(see_other(CATEGORIES_PATH))
}

/// GET /admin/categories/{id}/edit
pub async fn edit_form(
    _admin: AdminSession,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let Some(id) = parse_id(&path) else {
        tracing::warn!(raw_id = %path, "Edit requested for malformed category id");
        return Ok(see_other(CATEGORIES_PATH));
    };

    match state.categories.find_by_id(id).await? {
        Some(category) => Ok(HttpResponse::Ok().json(CategoryFormView {
            category: Some(category),
        })),
        None => {
            tracing::warn!(category_id = %id, "Edit requested for missing category");
            Ok(see_other(CATEGORIES_PATH))
        }
    }
}

/// PUT /admin/categories/{id}
pub async fn update(
    _admin: AdminSession,
    state: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<CategoryForm>,
) -> AppResult<HttpResponse> {
    let Some(id) = parse_id(&path) else {
        tracing::warn!(raw_id = %path, "Update requested for malformed category id");
        return Ok(see_other(CATEGORIES_PATH));
    };

    match state.categories.rename(id, form.into_inner().name).await {
        Ok(category) => {
            tracing::info!(category_id = %id, slug = %category.slug, "Category renamed");
        }
        Err(RepoError::NotFound) => {
            tracing::warn!(category_id = %id, "Update requested for missing category");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(see_other(CATEGORIES_PATH))
}

/// DELETE /admin/categories/{id}
pub async fn delete(
    _admin: AdminSession,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let Some(id) = parse_id(&path) else {
        tracing::warn!(raw_id = %path, "Delete requested for malformed category id");
        return Ok(see_other(CATEGORIES_PATH));
    };

    state.categories.delete(id).await?;
    tracing::info!(category_id = %id, "Category deleted");

    Ok(see_other(CATEGORIES_PATH))
}
