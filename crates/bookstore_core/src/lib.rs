//! Core domain logic for the bookstore.
//! This crate is the single source of truth for catalog and account rules.

pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{default_log_level, ConfigError, LogConfig};
pub use logging::{init_logging, logging_status};
pub use model::book::{Book, BookValidationError};
pub use model::user::User;
pub use repo::book_repo::{BookRepository, InMemoryBookRepository};
pub use repo::user_repo::{InMemoryUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult};
pub use service::book_service::BookService;
pub use service::user_service::UserService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
