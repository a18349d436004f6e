//! Book catalog use-case service.
//!
//! # Responsibility
//! - Search, add and remove catalog entries.
//! - Gate purchases on catalog membership and balance.
//! - Gate reviews on purchase history.
//!
//! # Invariants
//! - Search is an exact, case-sensitive match on title, author, or genre.
//! - Duplicate adds never reach the repository append path.
//! - A failed purchase leaves the user's balance and history untouched.

use crate::model::book::Book;
use crate::model::user::User;
use crate::repo::book_repo::BookRepository;
use crate::repo::RepoError;
use log::{debug, error, info};

/// Use-case service over a book catalog repository.
pub struct BookService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> BookService<R> {
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

    /// Returns every book whose title, author, or genre equals `query`.
    ///
    /// Results keep catalog order. No match yields an empty list.
    pub fn search_book(&self, query: &str) -> Vec<Book> {
        let books = match self.repo.list_books() {
            Ok(books) => books,
            Err(err) => {
                log_repo_error("book_search", &err);
                return Vec::new();
            }
        };

        let hits: Vec<Book> = books
            .into_iter()
            .filter(|book| book.matches_query(query))
            .collect();
        debug!(
            "event=book_search module=service status=ok hits={}",
            hits.len()
        );
        hits
    }

    /// Appends `book` unless an equal book is already in the catalog.
    ///
    /// # Contract
    /// - Returns `false` for duplicates and invalid books, with no append.
    /// - Returns `true` after exactly one append.
    pub fn add_book(&mut self, book: Book) -> bool {
        if let Err(err) = book.validate() {
            debug!("event=book_add module=service status=rejected reason=invalid error={err}");
            return false;
        }

        match self.repo.contains(&book) {
            Ok(true) => {
                debug!("event=book_add module=service status=rejected reason=duplicate");
                return false;
            }
            Ok(false) => {}
            Err(err) => {
                log_repo_error("book_add", &err);
                return false;
            }
        }

        match self.repo.append(book) {
            Ok(()) => {
                info!("event=book_add module=service status=ok");
                true
            }
            Err(err) => {
                log_repo_error("book_add", &err);
                false
            }
        }
    }

    /// Removes one equal book from the catalog.
    ///
    /// `None` returns `false` without touching the repository.
    pub fn remove_book(&mut self, book: Option<&Book>) -> bool {
        let Some(book) = book else {
            debug!("event=book_remove module=service status=rejected reason=missing_book");
            return false;
        };

        match self.repo.remove_by_value(book) {
            Ok(removed) => {
                info!("event=book_remove module=service status=ok removed={removed}");
                removed
            }
            Err(err) => {
                log_repo_error("book_remove", &err);
                false
            }
        }
    }

    /// Purchases `book` for `user` when it is in the catalog and affordable.
    ///
    /// On success the price is debited and a copy of the book is appended to
    /// the user's purchase history.
    pub fn purchase_book(&self, user: &mut User, book: &Book) -> bool {
        if let Err(err) = book.validate() {
            debug!("event=book_purchase module=service status=rejected reason=invalid error={err}");
            return false;
        }

        match self.repo.contains(book) {
            Ok(true) => {}
            Ok(false) => {
                debug!(
                    "event=book_purchase module=service status=rejected reason=not_in_catalog"
                );
                return false;
            }
            Err(err) => {
                log_repo_error("book_purchase", &err);
                return false;
            }
        }

        if !user.can_afford(book.price) {
            debug!(
                "event=book_purchase module=service status=rejected reason=insufficient_funds"
            );
            return false;
        }

        user.balance -= book.price;
        user.purchased_books.push(book.clone());
        info!("event=book_purchase module=service status=ok");
        true
    }

    /// Appends `review` to `book` when `user` has purchased it.
    ///
    /// The review is recorded on the matching catalog entry as well as on the
    /// caller's copy. Empty reviews are rejected.
    pub fn add_book_review(&mut self, user: &User, book: &mut Book, review: &str) -> bool {
        if review.is_empty() {
            debug!("event=book_review module=service status=rejected reason=empty_review");
            return false;
        }
        if !user.has_purchased(book) {
            debug!("event=book_review module=service status=rejected reason=not_purchased");
            return false;
        }

        let in_catalog = match self.repo.append_review(book, review.to_string()) {
            Ok(in_catalog) => in_catalog,
            Err(err) => {
                log_repo_error("book_review", &err);
                return false;
            }
        };

        book.push_review(review);
        info!(
            "event=book_review module=service status=ok in_catalog={in_catalog} review_count={}",
            book.reviews().len()
        );
        true
    }
}

fn log_repo_error(event: &str, err: &RepoError) {
    error!("event={event} module=service status=error error={err}");
}
