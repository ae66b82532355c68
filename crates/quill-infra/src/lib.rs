//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains the data store backends, session token signing,
//! media storage and comment notifications.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL data store via SeaORM. Without it
//!   only the in-memory store is built.

pub mod auth;
pub mod database;
pub mod media;
pub mod notifier;

pub use auth::{AdminCredentials, Argon2PasswordService, JwtConfig, JwtTokenService};
pub use database::{
    DatabaseConfig, InMemoryCategoryRepository, InMemoryCommentRepository, InMemoryPostRepository,
};
pub use media::{LocalMediaStore, UPLOADS_PREFIX};
pub use notifier::{LogNotifier, MailConfig, MailRelayNotifier};

#[cfg(feature = "postgres")]
pub use database::DatabaseConnections;
