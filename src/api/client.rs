use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};

use crate::api::error::ApiError;
use crate::books::{Book, BookId, NewBook, ReadingState, StateChange};
use crate::config::ApiConfig;

/// Thin wrapper over the book service endpoints.
///
/// No retries and no auth headers. Write requests carry a JSON body and
/// therefore `Content-Type: application/json`.
#[derive(Clone)]
pub struct BooksClient {
    client: Client,
    base_url: String,
}

impl BooksClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }
        let client = builder.build().map_err(ApiError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /books`
    pub async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        let url = self.collection_url();
        let response = send("GET", &url, self.client.get(&url)).await?;
        let body = response.text().await.map_err(|source| ApiError::Network {
            method: "GET",
            url: url.clone(),
            source,
        })?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode { url, source })
    }

    /// `POST /books` with `{title, state: "to-read"}`
    pub async fn add_book(&self, title: &str) -> Result<(), ApiError> {
        let url = self.collection_url();
        let request = self.client.post(&url).json(&NewBook::to_read(title));
        send("POST", &url, request).await.map(drop)
    }

    /// `PUT /books/{id}` with `{new_state}`
    pub async fn move_book(&self, id: BookId, new_state: ReadingState) -> Result<(), ApiError> {
        let url = self.item_url(id);
        let request = self.client.put(&url).json(&StateChange { new_state });
        send("PUT", &url, request).await.map(drop)
    }

    /// `DELETE /books/{id}`
    pub async fn delete_book(&self, id: BookId) -> Result<(), ApiError> {
        let url = self.item_url(id);
        send("DELETE", &url, self.client.delete(&url)).await.map(drop)
    }

    fn collection_url(&self) -> String {
        format!("{}/books", self.base_url)
    }

    fn item_url(&self, id: BookId) -> String {
        format!("{}/books/{}", self.base_url, id)
    }
}

/// Sends the request and turns any non-2xx answer into [`ApiError::Status`].
async fn send(
    method: &'static str,
    url: &str,
    request: RequestBuilder,
) -> Result<Response, ApiError> {
    tracing::debug!(method, url, "Sending request");

    let response = request.send().await.map_err(|source| ApiError::Network {
        method,
        url: url.to_string(),
        source,
    })?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // Body only feeds the log.
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        method,
        url: url.to_string(),
        status: status.as_u16(),
        body,
    })
}
