//! User account repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide map-shaped account access keyed by username.
//!
//! # Invariants
//! - Keys are compared exactly; the empty string is a valid key.
//! - `put_user` overwrites and returns the previous entry, if any.

use crate::model::user::User;
use crate::repo::{poisoned, RepoResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Repository interface for user accounts.
pub trait UserRepository {
    fn contains_username(&self, username: &str) -> RepoResult<bool>;
    fn get_user(&self, username: &str) -> RepoResult<Option<User>>;
    fn put_user(&mut self, username: String, user: User) -> RepoResult<Option<User>>;
    fn remove_user(&mut self, username: &str) -> RepoResult<Option<User>>;
}

/// HashMap-backed account store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: HashMap<String, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_users(users: HashMap<String, User>) -> Self {
        Self { users }
    }

    pub fn users(&self) -> &HashMap<String, User> {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn into_inner(self) -> HashMap<String, User> {
        self.users
    }
}

impl UserRepository for InMemoryUserRepository {
    fn contains_username(&self, username: &str) -> RepoResult<bool> {
        Ok(self.users.contains_key(username))
    }

    fn get_user(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self.users.get(username).cloned())
    }

    fn put_user(&mut self, username: String, user: User) -> RepoResult<Option<User>> {
        Ok(self.users.insert(username, user))
    }

    fn remove_user(&mut self, username: &str) -> RepoResult<Option<User>> {
        Ok(self.users.remove(username))
    }
}

/// Shared account store: one repository behind a mutex.
///
/// Same per-call locking as the shared catalog.
impl<R: UserRepository> UserRepository for Arc<Mutex<R>> {
    fn contains_username(&self, username: &str) -> RepoResult<bool> {
        self.lock().map_err(poisoned("user"))?.contains_username(username)
    }

    fn get_user(&self, username: &str) -> RepoResult<Option<User>> {
        self.lock().map_err(poisoned("user"))?.get_user(username)
    }

    fn put_user(&mut self, username: String, user: User) -> RepoResult<Option<User>> {
        self.lock().map_err(poisoned("user"))?.put_user(username, user)
    }

    fn remove_user(&mut self, username: &str) -> RepoResult<Option<User>> {
        self.lock().map_err(poisoned("user"))?.remove_user(username)
    }
}
