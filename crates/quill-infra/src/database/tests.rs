#[cfg(test)]
mod tests {
    use crate::database::entity::{category, post};
    use crate::database::postgres_repo::{
        PostgresCategoryRepository, PostgresPostRepository, list_select,
    };
    use quill_core::domain::{Category, Post, PostImage, PostQuery};
    use quill_core::ports::{BaseRepository, CategoryRepository, PostRepository};
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, QueryTrait, Transaction};

    fn post_model(id: uuid::Uuid, views: i64) -> post::Model {
        post::Model {
            id,
            title: "Test Post".to_owned(),
            content: "Content".to_owned(),
            category: "rust".to_owned(),
            image_path: Some("/uploads/1700000000000-cover.png".to_owned()),
            image_url: None,
            tags: serde_json::json!(["actix", "sea-orm"]),
            views,
            likes: 2,
            created_at: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let post_id = uuid::Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model(post_id, 4)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.id, post_id);
        assert_eq!(post.title, "Test Post");
        assert_eq!(post.tags, vec!["actix", "sea-orm"]);
        assert_eq!(post.views, 4);
        assert_eq!(
            post.image,
            Some(PostImage::Uploaded {
                path: "/uploads/1700000000000-cover.png".to_owned()
            })
        );
    }

    #[tokio::test]
    async fn test_record_view_increments_then_reads() {
        let post_id = uuid::Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .append_query_results(vec![vec![post_model(post_id, 5)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let post = repo.record_view(post_id).await.unwrap().unwrap();
        assert_eq!(post.views, 5);
    }

    #[tokio::test]
    async fn test_record_view_on_missing_post_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo.record_view(uuid::Uuid::new_v4()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_record_like_on_missing_post_is_ok() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        assert!(repo.record_like(uuid::Uuid::new_v4()).await.is_ok());
    }

    #[tokio::test]
    async fn test_rename_category_returns_new_slug() {
        let id = uuid::Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![category::Model {
                id,
                name: "New Name".to_owned(),
                slug: "new-name".to_owned(),
                created_at: chrono::Utc::now().into(),
            }]])
            .into_connection();

        let repo = PostgresCategoryRepository::new(db);

        let category: Category = repo.rename(id, "New Name".to_owned()).await.unwrap();
        assert_eq!(category.slug, "new-name");
    }

    #[test]
    fn test_search_binds_escaped_pattern_for_every_column() {
        let stmt = list_select(&PostQuery::search("50%")).build(DatabaseBackend::Postgres);

        assert!(stmt.sql.contains("LOWER(title) LIKE $1"));
        assert!(stmt.sql.contains("LOWER(content) LIKE $2"));
        assert!(stmt.sql.contains("LOWER(tag) LIKE $3"));
        assert!(!stmt.sql.contains('?'));
        assert!(stmt.sql.ends_with(r#"ORDER BY "posts"."created_at" DESC"#));

        let pattern = Value::from("%50\\%%".to_owned());
        assert_eq!(
            stmt.values.unwrap().0,
            vec![pattern.clone(), pattern.clone(), pattern]
        );
    }

    #[test]
    fn test_category_filter_is_exact_match() {
        let stmt = list_select(&PostQuery::in_category("rust")).build(DatabaseBackend::Postgres);

        assert!(stmt.sql.contains(r#"WHERE "posts"."category" = $1"#));
        assert_eq!(stmt.values.unwrap().0, vec![Value::from("rust")]);
    }

    #[test]
    fn test_most_viewed_orders_by_views_then_age_with_limit() {
        let stmt = list_select(&PostQuery::most_viewed().limit(3)).build(DatabaseBackend::Postgres);

        assert!(!stmt.sql.contains("WHERE"));
        assert!(stmt.sql.contains(
            r#"ORDER BY "posts"."views" DESC, "posts"."created_at" DESC LIMIT $1"#
        ));
        assert_eq!(stmt.values.unwrap().0, vec![Value::from(3u64)]);
    }

    #[tokio::test]
    async fn test_list_sends_search_statement_and_maps_rows() {
        let post_id = uuid::Uuid::new_v4();
        let query = PostQuery::search("Rust").limit(6);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![post_model(post_id, 1)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let posts = repo.list(query.clone()).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, post_id);

        let expected = list_select(&query).build(DatabaseBackend::Postgres);
        assert_eq!(
            repo.db.into_transaction_log(),
            vec![Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                &expected.sql,
                expected.values.unwrap().0,
            )]
        );
    }
}
