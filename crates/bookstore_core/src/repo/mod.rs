//! Repository layer abstractions and in-memory implementations.
//!
//! # Responsibility
//! - Define the collection capabilities services depend on.
//! - Keep storage details out of service/business orchestration.
//!
//! # Invariants
//! - Repositories compare books by value, never by identity.
//! - Repository APIs report transport-level failures via `RepoError`;
//!   business-rule outcomes are decided by services.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::PoisonError;

pub mod book_repo;
pub mod user_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for book/user collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A shared repository lock was poisoned by a panicking holder.
    LockPoisoned(&'static str),
    /// Backing store could not serve the request.
    Unavailable(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LockPoisoned(repo) => write!(f, "{repo} repository lock poisoned"),
            Self::Unavailable(message) => write!(f, "repository unavailable: {message}"),
        }
    }
}

impl Error for RepoError {}

pub(crate) fn poisoned<T>(repo: &'static str) -> impl FnOnce(PoisonError<T>) -> RepoError {
    move |_| RepoError::LockPoisoned(repo)
}
