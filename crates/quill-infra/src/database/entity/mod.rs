//! SeaORM entities, one per collection.

pub mod category;
pub mod comment;
pub mod post;
