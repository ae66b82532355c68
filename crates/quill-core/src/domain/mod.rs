//! Domain entities - the core business objects.

mod category;
mod comment;
mod post;
mod query;

pub use category::{Category, slugify};
pub use comment::Comment;
pub use post::{Post, PostDraft, PostImage, parse_tags};
pub use query::{PostFilter, PostOrder, PostQuery};
