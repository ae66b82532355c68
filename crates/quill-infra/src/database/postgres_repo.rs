//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set};
use uuid::Uuid;

use quill_core::domain::{Category, Comment, Post, PostDraft, PostFilter, PostOrder, PostQuery, slugify};
use quill_core::error::RepoError;
use quill_core::ports::{CategoryRepository, CommentRepository, PostRepository};

use super::entity::category::{self, Entity as CategoryEntity};
use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, repo_error};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL category repository.
pub type PostgresCategoryRepository = PostgresBaseRepository<CategoryEntity>;

/// PostgreSQL comment repository.
pub type PostgresCommentRepository = PostgresBaseRepository<CommentEntity>;

/// Postgres only binds numbered placeholders inside custom expressions.
const SEARCH_SQL: &str = "(LOWER(title) LIKE $1 OR LOWER(content) LIKE $2 \
     OR EXISTS (SELECT 1 FROM jsonb_array_elements_text(tags) AS tag WHERE LOWER(tag) LIKE $3))";

/// Build a `LIKE` pattern matching `term` anywhere, with wildcards escaped.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

impl PostgresPostRepository {
    /// Add one to a counter column in a single `UPDATE`, returning rows hit.
    async fn increment(&self, id: Uuid, column: post::Column) -> Result<u64, RepoError> {
        let result = PostEntity::update_many()
            .col_expr(column, Expr::col(column).add(1))
            .filter(post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.rows_affected)
    }
}

/// The `SELECT` behind [`PostRepository::list`].
pub(crate) fn list_select(query: &PostQuery) -> Select<PostEntity> {
    let mut select = PostEntity::find();

    select = match &query.filter {
        PostFilter::All => select,
        PostFilter::Category(slug) => select.filter(post::Column::Category.eq(slug.as_str())),
        PostFilter::Search(term) => {
            let pattern = contains_pattern(term);
            select.filter(Expr::cust_with_values(
                SEARCH_SQL,
                [pattern.clone(), pattern.clone(), pattern],
            ))
        }
    };

    select = match query.order {
        PostOrder::Newest => select.order_by_desc(post::Column::CreatedAt),
        PostOrder::MostViewed => select
            .order_by_desc(post::Column::Views)
            .order_by_desc(post::Column::CreatedAt),
    };

    if let Some(limit) = query.limit {
        select = select.limit(limit);
    }

    select
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list(&self, query: PostQuery) -> Result<Vec<Post>, RepoError> {
        let result = list_select(&query)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: Uuid, draft: PostDraft) -> Result<Post, RepoError> {
        let (image_path, image_url) = post::image_columns(draft.image.clone());
        let keep_image = draft.image.is_none();

        let mut active = post::ActiveModel {
            id: Set(id),
            title: Set(draft.title),
            content: Set(draft.content),
            category: Set(draft.category),
            tags: Set(post::tags_column(draft.tags)),
            ..Default::default()
        };
        if !keep_image {
            active.image_path = Set(image_path);
            active.image_url = Set(image_url);
        }

        let model = PostEntity::update(active)
            .exec(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(model.into())
    }

    async fn record_view(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        if self.increment(id, post::Column::Views).await? == 0 {
            return Ok(None);
        }

        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.map(Into::into))
    }

    async fn record_like(&self, id: Uuid) -> Result<(), RepoError> {
        let rows = self.increment(id, post::Column::Likes).await?;
        tracing::debug!(post_id = %id, rows, "Recorded like");
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn list_by_name(&self) -> Result<Vec<Category>, RepoError> {
        let result = CategoryEntity::find()
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn rename(&self, id: Uuid, name: String) -> Result<Category, RepoError> {
        let active = category::ActiveModel {
            id: Set(id),
            slug: Set(slugify(&name)),
            name: Set(name),
            ..Default::default()
        };

        let model = CategoryEntity::update(active)
            .exec(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(model.into())
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn find_by_post(&self, post_id: &str) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_desc(comment::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::contains_pattern;

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("Rust"), "%rust%");
        assert_eq!(contains_pattern("100%_off"), "%100\\%\\_off%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }
}
