//! Application state - shared across all handlers.

use std::sync::Arc;
use std::time::Duration;

use quill_core::ports::{
    AuthError, CategoryRepository, CommentNotifier, CommentRepository, MediaStore,
    PasswordService, PostRepository, TokenService,
};
use quill_infra::database::DatabaseConfig;
use quill_infra::{
    AdminCredentials, Argon2PasswordService, InMemoryCategoryRepository,
    InMemoryCommentRepository, InMemoryPostRepository, JwtTokenService, LocalMediaStore,
    LogNotifier, MailRelayNotifier,
};

#[cfg(feature = "postgres")]
use quill_infra::DatabaseConnections;
#[cfg(feature = "postgres")]
use quill_infra::database::{
    PostgresCategoryRepository, PostgresCommentRepository, PostgresPostRepository,
};

use crate::config::AppConfig;

/// The three collections of the data store.
#[derive(Clone)]
pub struct Stores {
    pub posts: Arc<dyn PostRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub comments: Arc<dyn CommentRepository>,
}

impl Stores {
    /// Process-local store; contents vanish on restart.
    pub fn in_memory() -> Self {
        Self {
            posts: Arc::new(InMemoryPostRepository::new()),
            categories: Arc::new(InMemoryCategoryRepository::new()),
            comments: Arc::new(InMemoryCommentRepository::new()),
        }
    }

    #[cfg(feature = "postgres")]
    pub fn postgres(connections: &DatabaseConnections) -> Self {
        Self {
            posts: Arc::new(PostgresPostRepository::new(connections.main.clone())),
            categories: Arc::new(PostgresCategoryRepository::new(connections.main.clone())),
            comments: Arc::new(PostgresCommentRepository::new(connections.main.clone())),
        }
    }

    /// Connect to the configured database, falling back to the in-memory
    /// store when none is configured or it cannot be reached.
    pub async fn connect(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        {
            if let Some(config) = db_config {
                match DatabaseConnections::init(config).await {
                    Ok(connections) => return Self::postgres(&connections),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        return Self::in_memory();
                    }
                }
            }
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        }

        #[cfg(not(feature = "postgres"))]
        {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repository");
        }

        Self::in_memory()
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub media: Arc<dyn MediaStore>,
    pub notifier: Arc<dyn CommentNotifier>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
    pub admin: Arc<AdminCredentials>,
    pub notify_timeout: Duration,
    pub secure_cookies: bool,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn from_config(config: &AppConfig) -> Result<Self, AuthError> {
        let stores = Stores::connect(config.database.as_ref()).await;

        let notifier: Arc<dyn CommentNotifier> = match &config.mail {
            Some(mail) => {
                tracing::info!(relay = %mail.relay_url, "Mail relay configured");
                Arc::new(MailRelayNotifier::new(mail.clone()))
            }
            None => {
                tracing::warn!("MAIL_RELAY_URL not set. Comment notices will only be logged.");
                Arc::new(LogNotifier)
            }
        };

        let state = Self::new(stores, config, notifier)?;
        tracing::info!("Application state initialized");
        Ok(state)
    }

    /// Assemble state around already-built stores and notifier.
    pub fn new(
        stores: Stores,
        config: &AppConfig,
        notifier: Arc<dyn CommentNotifier>,
    ) -> Result<Self, AuthError> {
        let passwords = Arc::new(Argon2PasswordService::new());
        let admin = AdminCredentials::new(
            config.admin.username.clone(),
            &config.admin.password,
            passwords.as_ref(),
        )?;

        Ok(Self {
            posts: stores.posts,
            categories: stores.categories,
            comments: stores.comments,
            media: Arc::new(LocalMediaStore::new(&config.upload_dir)),
            notifier,
            tokens: Arc::new(JwtTokenService::new(config.jwt.clone())),
            passwords,
            admin: Arc::new(admin),
            notify_timeout: config.notify_timeout,
            secure_cookies: config.production,
        })
    }
}
