//! Background executor for book service requests.
//!
//! The UI thread never awaits. It queues an [`ApiCommand`] tagged with a
//! [`RequestId`] and later receives the matching [`ApiResponse`] through the
//! callback handed to [`run_worker`]. Each command runs on its own task, so
//! overlapping requests resolve in whatever order the service answers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::client::BooksClient;
use crate::api::error::ApiError;
use crate::books::{Book, BookId, ReadingState};

/// Token identifying one in-flight request. Monotonic per [`crate::ui::requests::RequestTracker`].
pub type RequestId = u64;

/// The four things the page can ask the service to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Add { title: String },
    Move { id: BookId, to: ReadingState },
    Delete { id: BookId },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Fetch => "fetch",
            Operation::Add { .. } => "add",
            Operation::Move { .. } => "move",
            Operation::Delete { .. } => "delete",
        }
    }

    /// Banner text shown when this operation fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Fetch => "Error fetching books. Please try again.",
            Operation::Add { .. } => "Error adding book. Please try again.",
            Operation::Move { .. } => "Error moving book. Please try again.",
            Operation::Delete { .. } => "Error deleting book. Please try again.",
        }
    }
}

#[derive(Debug)]
pub struct ApiCommand {
    pub id: RequestId,
    pub operation: Operation,
}

pub type ApiCommandSender = mpsc::Sender<ApiCommand>;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome {
    /// Full list returned by `GET /books`.
    Fetched(Vec<Book>),
    /// A write was accepted with a 2xx status.
    Applied,
}

/// Owned, cloneable summary of an [`ApiError`] for the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub kind: &'static str,
    pub status: Option<u16>,
    pub detail: String,
}

impl From<&ApiError> for ApiFailure {
    fn from(err: &ApiError) -> Self {
        Self {
            kind: err.kind(),
            status: err.status(),
            detail: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub id: RequestId,
    pub operation: Operation,
    pub result: Result<ApiOutcome, ApiFailure>,
}

/// Runs one operation against the service.
pub async fn execute(client: &BooksClient, operation: &Operation) -> Result<ApiOutcome, ApiError> {
    match operation {
        Operation::Fetch => client.list_books().await.map(ApiOutcome::Fetched),
        Operation::Add { title } => client.add_book(title).await.map(|()| ApiOutcome::Applied),
        Operation::Move { id, to } => client
            .move_book(*id, *to)
            .await
            .map(|()| ApiOutcome::Applied),
        Operation::Delete { id } => client.delete_book(*id).await.map(|()| ApiOutcome::Applied),
    }
}

/// Drains `commands` until every sender is dropped, spawning a task per command.
///
/// Must be polled inside a tokio runtime.
pub async fn run_worker<F>(client: BooksClient, mut commands: mpsc::Receiver<ApiCommand>, on_response: F)
where
    F: Fn(ApiResponse) + Send + Sync + 'static,
{
    let on_response = Arc::new(on_response);

    while let Some(ApiCommand { id, operation }) = commands.recv().await {
        let client = client.clone();
        let on_response = Arc::clone(&on_response);

        tokio::spawn(async move {
            let result = execute(&client, &operation)
                .await
                .map_err(|err| ApiFailure::from(&err));
            on_response(ApiResponse {
                id,
                operation,
                result,
            });
        });
    }

    tracing::debug!("Request worker stopped: command channel closed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_keeps_status_and_kind() {
        let err = ApiError::Status {
            method: "PUT",
            url: "http://localhost:8000/books/1".to_string(),
            status: 404,
            body: String::new(),
        };
        let failure = ApiFailure::from(&err);
        assert_eq!(failure.kind, "http");
        assert_eq!(failure.status, Some(404));
        assert!(failure.detail.contains("404"));
    }

    #[test]
    fn fetch_failure_message_matches_banner_text() {
        assert_eq!(
            Operation::Fetch.failure_message(),
            "Error fetching books. Please try again."
        );
    }
}
