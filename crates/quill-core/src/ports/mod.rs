//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod media;
mod notifier;
mod repository;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use media::{MediaError, MediaStore};
pub use notifier::{CommentNotice, CommentNotifier, NotifyError};
pub use repository::{BaseRepository, CategoryRepository, CommentRepository, PostRepository};
