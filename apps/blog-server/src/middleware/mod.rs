//! Middleware and extractors.

pub mod auth;
pub mod error;
pub mod method_override;

pub use auth::{AdminRequired, AdminSession};
pub use error::{AppError, AppResult};
pub use method_override::MethodOverride;
