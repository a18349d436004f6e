//! User account model.
//!
//! # Responsibility
//! - Hold credentials, wallet balance and purchase history for one account.
//!
//! # Invariants
//! - `username` is the unique key used by user repositories.
//! - `purchased_books` only grows through a successful purchase.
//! - `password` is never serialized.

use crate::model::book::Book;
use serde::{Deserialize, Serialize};

/// Account record keyed by `username`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    /// Plaintext in this model. Excluded from serialized output.
    #[serde(skip_serializing, default)]
    pub password: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub purchased_books: Vec<Book>,
}

impl User {
    /// Creates a user with zero balance and no purchases.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: email.into(),
            age: None,
            balance: 0.0,
            purchased_books: Vec::new(),
        }
    }

    /// Creates a user with an opening balance.
    pub fn with_balance(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
        balance: f64,
    ) -> Self {
        let mut user = Self::new(username, password, email);
        user.balance = balance;
        user
    }

    /// Creates a user with an existing purchase history.
    pub fn with_purchased_books(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
        purchased_books: Vec<Book>,
    ) -> Self {
        let mut user = Self::new(username, password, email);
        user.purchased_books = purchased_books;
        user
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn set_balance(&mut self, balance: f64) {
        self.balance = balance;
    }

    /// Returns whether an equal book is in this user's purchase history.
    pub fn has_purchased(&self, book: &Book) -> bool {
        self.purchased_books.contains(book)
    }

    /// Returns whether the balance covers `price`.
    pub fn can_afford(&self, price: f64) -> bool {
        self.balance >= price
    }
}
