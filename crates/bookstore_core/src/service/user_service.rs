//! User account use-case service.
//!
//! # Responsibility
//! - Register accounts, verify credentials, and apply profile updates.
//!
//! # Invariants
//! - The repository key always equals the stored `User::username`.
//! - A profile update whose target username is already a key is rejected,
//!   including when it equals the user's current username.
//! - Credentials, emails and usernames are never logged.

use crate::model::user::User;
use crate::repo::user_repo::UserRepository;
use crate::repo::RepoError;
use log::{debug, error, info};

/// Use-case service over a user account repository.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn into_repo(self) -> R {
        self.repo
    }

    /// Stores `user` under its username unless that key is taken.
    pub fn register_user(&mut self, user: User) -> bool {
        match self.repo.contains_username(&user.username) {
            Ok(true) => {
                debug!(
                    "event=user_register module=service status=rejected reason=username_taken"
                );
                return false;
            }
            Ok(false) => {}
            Err(err) => {
                log_repo_error("user_register", &err);
                return false;
            }
        }

        match self.repo.put_user(user.username.clone(), user) {
            Ok(_) => {
                info!("event=user_register module=service status=ok");
                true
            }
            Err(err) => {
                log_repo_error("user_register", &err);
                false
            }
        }
    }

    /// Returns the stored user when `username` exists and `password` matches exactly.
    pub fn login_user(&self, username: &str, password: &str) -> Option<User> {
        let stored = match self.repo.get_user(username) {
            Ok(stored) => stored,
            Err(err) => {
                log_repo_error("user_login", &err);
                return None;
            }
        };

        match stored {
            Some(user) if user.password == password => {
                info!("event=user_login module=service status=ok");
                Some(user)
            }
            Some(_) => {
                debug!(
                    "event=user_login module=service status=rejected reason=bad_credentials"
                );
                None
            }
            None => {
                debug!("event=user_login module=service status=rejected reason=unknown_user");
                None
            }
        }
    }

    /// Replaces username, password and email of `user` and rekeys its entry.
    ///
    /// # Contract
    /// - Returns `false` with no mutation when `new_username` is already a key.
    /// - On success `user` is updated in place and stored under `new_username`.
    /// - The entry under the previous username is removed when the key changes.
    /// - If that removal fails, the new entry is dropped again, `user` is left
    ///   untouched and the update reports `false`.
    pub fn update_user_profile(
        &mut self,
        user: &mut User,
        new_username: &str,
        new_password: &str,
        new_email: &str,
    ) -> bool {
        match self.repo.contains_username(new_username) {
            Ok(true) => {
                debug!(
                    "event=user_update module=service status=rejected reason=username_taken"
                );
                return false;
            }
            Ok(false) => {}
            Err(err) => {
                log_repo_error("user_update", &err);
                return false;
            }
        }

        let mut updated = user.clone();
        updated.username = new_username.to_string();
        updated.password = new_password.to_string();
        updated.email = new_email.to_string();

        if let Err(err) = self.repo.put_user(updated.username.clone(), updated.clone()) {
            log_repo_error("user_update", &err);
            return false;
        }

        // Equal keys: the entry just written is the only one.
        if user.username != updated.username {
            if let Err(err) = self.repo.remove_user(&user.username) {
                log_repo_error("user_update", &err);
                if let Err(rollback_err) = self.repo.remove_user(&updated.username) {
                    log_repo_error("user_update_rollback", &rollback_err);
                }
                return false;
            }
        }

        *user = updated;
        info!("event=user_update module=service status=ok");
        true
    }
}

fn log_repo_error(event: &str, err: &RepoError) {
    error!("event={event} module=service status=error error={err}");
}
