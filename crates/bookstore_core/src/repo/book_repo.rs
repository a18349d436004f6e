//! Book catalog repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide list-shaped catalog access: append, remove/contains by value,
//!   ordered iteration.
//!
//! # Invariants
//! - `list_books` preserves insertion order.
//! - `remove_by_value` and `append_review` touch at most one (the first) equal entry.

use crate::model::book::Book;
use crate::repo::{poisoned, RepoResult};
use std::sync::{Arc, Mutex};

/// Repository interface for the book catalog.
pub trait BookRepository {
    /// Appends one book at the end of the catalog.
    fn append(&mut self, book: Book) -> RepoResult<()>;
    /// Removes the first equal book. Returns whether one was removed.
    fn remove_by_value(&mut self, book: &Book) -> RepoResult<bool>;
    /// Returns whether an equal book is present.
    fn contains(&self, book: &Book) -> RepoResult<bool>;
    /// Returns a snapshot of the catalog in iteration order.
    fn list_books(&self) -> RepoResult<Vec<Book>>;
    /// Appends `review` to the first equal catalog entry. Returns whether one matched.
    fn append_review(&mut self, book: &Book, review: String) -> RepoResult<bool>;
}

/// Vec-backed catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookRepository {
    books: Vec<Book>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing ordered collection.
    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn into_inner(self) -> Vec<Book> {
        self.books
    }
}

impl BookRepository for InMemoryBookRepository {
    fn append(&mut self, book: Book) -> RepoResult<()> {
        self.books.push(book);
        Ok(())
    }

    fn remove_by_value(&mut self, book: &Book) -> RepoResult<bool> {
        match self.books.iter().position(|candidate| candidate == book) {
            Some(index) => {
                self.books.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn contains(&self, book: &Book) -> RepoResult<bool> {
        Ok(self.books.contains(book))
    }

    fn list_books(&self) -> RepoResult<Vec<Book>> {
        Ok(self.books.clone())
    }

    fn append_review(&mut self, book: &Book, review: String) -> RepoResult<bool> {
        match self.books.iter_mut().find(|candidate| **candidate == *book) {
            Some(entry) => {
                entry.push_review(review);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// Shared catalog: one repository behind a mutex, usable from many threads.
///
/// Each call takes the lock on its own. A service operation spanning several
/// calls (check then append) is only atomic when the service itself is locked.
impl<R: BookRepository> BookRepository for Arc<Mutex<R>> {
    fn append(&mut self, book: Book) -> RepoResult<()> {
        self.lock().map_err(poisoned("book"))?.append(book)
    }

    fn remove_by_value(&mut self, book: &Book) -> RepoResult<bool> {
        self.lock().map_err(poisoned("book"))?.remove_by_value(book)
    }

    fn contains(&self, book: &Book) -> RepoResult<bool> {
        self.lock().map_err(poisoned("book"))?.contains(book)
    }

    fn list_books(&self) -> RepoResult<Vec<Book>> {
        self.lock().map_err(poisoned("book"))?.list_books()
    }

    fn append_review(&mut self, book: &Book, review: String) -> RepoResult<bool> {
        self.lock()
            .map_err(poisoned("book"))?
            .append_review(book, review)
    }
}
