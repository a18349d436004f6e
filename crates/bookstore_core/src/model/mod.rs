//! Bookstore domain model.
//!
//! # Responsibility
//! - Define the catalog (`Book`) and account (`User`) records used by services.
//!
//! # Invariants
//! - Books compare by value, so catalog membership never depends on identity.
//! - Review logs and purchase histories are append-only.

pub mod book;
pub mod user;
