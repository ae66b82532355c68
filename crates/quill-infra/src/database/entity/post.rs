//! Post entity for SeaORM.

use quill_core::domain::PostImage;
use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub category: String,
    pub image_path: Option<String>,
    pub image_url: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,
    pub views: i64,
    pub likes: i64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Split a domain image into the `(image_path, image_url)` column pair.
pub(crate) fn image_columns(image: Option<PostImage>) -> (Option<String>, Option<String>) {
    match image {
        Some(PostImage::Uploaded { path }) => (Some(path), None),
        Some(PostImage::External { url }) => (None, Some(url)),
        None => (None, None),
    }
}

pub(crate) fn tags_column(tags: Vec<String>) -> Json {
    Json::from(tags)
}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for quill_core::domain::Post {
    fn from(model: Model) -> Self {
        let image = match (model.image_path, model.image_url) {
            (Some(path), _) => Some(PostImage::Uploaded { path }),
            (None, Some(url)) => Some(PostImage::External { url }),
            (None, None) => None,
        };

        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            category: model.category,
            image,
            tags: serde_json::from_value(model.tags).unwrap_or_default(),
            views: u64::try_from(model.views).unwrap_or(0),
            likes: u64::try_from(model.likes).unwrap_or(0),
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<quill_core::domain::Post> for ActiveModel {
    fn from(post: quill_core::domain::Post) -> Self {
        let (image_path, image_url) = image_columns(post.image);

        Self {
            id: Set(post.id),
            title: Set(post.title),
            content: Set(post.content),
            category: Set(post.category),
            image_path: Set(image_path),
            image_url: Set(image_url),
            tags: Set(tags_column(post.tags)),
            views: Set(i64::try_from(post.views).unwrap_or(i64::MAX)),
            likes: Set(i64::try_from(post.likes).unwrap_or(i64::MAX)),
            created_at: Set(post.created_at.into()),
        }
    }
}
