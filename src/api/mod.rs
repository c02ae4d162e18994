//! HTTP access to the book service.
//!
//! [`BooksClient`] issues the four requests; [`worker`] runs them off the UI
//! thread and reports each result back as an [`ApiResponse`].

pub mod client;
pub mod error;
pub mod worker;

pub use client::BooksClient;
pub use error::ApiError;
pub use worker::{
    run_worker, ApiCommand, ApiCommandSender, ApiFailure, ApiOutcome, ApiResponse, Operation,
    RequestId,
};
