//! Core use-case services.
//!
//! # Responsibility
//! - Apply bookstore business rules on top of repository capabilities.
//! - Report rule violations as `false`/`None`, never as errors or panics.
//!
//! # Invariants
//! - A rejected operation performs no repository mutation.
//! - Repository failures are logged and surface as the failure value.

pub mod book_service;
pub mod user_service;
