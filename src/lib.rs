//! Terminal client for a personal book-tracking service.
//!
//! The service at `api.base_url` stores the books; this crate only lists
//! them in three reading-state columns and forwards add, move and delete
//! requests, re-fetching the full list after every successful write.

pub mod api;
pub mod books;
pub mod config;
pub mod logging;
pub mod ui;
