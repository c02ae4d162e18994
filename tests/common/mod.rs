//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use bookshelf::api::{run_worker, ApiCommand, ApiResponse, BooksClient};
use bookshelf::books::{Book, BookId, ReadingState};
use bookshelf::config::ApiConfig;
use bookshelf::ui::app::App;
use std::net::TcpListener;
use std::sync::mpsc;
use std::time::Duration;

pub use mock_service::{CapturedRequest, MockBookService, MockResponse};

const RESPONSE_TIMEOUT: Duration = Duration::from_secs(5);

/// Find a port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: Some(5),
    }
}

pub fn client_for(base_url: &str) -> BooksClient {
    BooksClient::new(&api_config(base_url)).expect("client builds")
}

pub fn book(id: BookId, title: &str, state: ReadingState) -> Book {
    Book {
        id,
        title: title.to_string(),
        state,
    }
}

// -- App harness --------------------------------------------------------------

/// An `App` wired to a real request worker. Must be created inside a
/// multi-threaded tokio runtime.
pub struct Harness {
    pub app: App,
    responses: mpsc::Receiver<ApiResponse>,
}

impl Harness {
    pub fn new(base_url: &str) -> Self {
        let (command_tx, command_rx) = tokio::sync::mpsc::channel::<ApiCommand>(16);
        let (response_tx, response_rx) = mpsc::channel();
        tokio::spawn(run_worker(client_for(base_url), command_rx, move |response| {
            let _ = response_tx.send(response);
        }));

        let mut app = App::new();
        app.set_api_sender(command_tx);
        Self {
            app,
            responses: response_rx,
        }
    }

    /// Feed responses into the app until nothing is in flight, including
    /// re-fetches triggered along the way.
    pub fn settle(&mut self) {
        while self.app.is_loading() {
            let response = tokio::task::block_in_place(|| {
                self.responses.recv_timeout(RESPONSE_TIMEOUT)
            })
            .expect("request worker answered");
            self.app.on_api_response(response);
        }
    }

    pub fn titles_in(&self, state: ReadingState) -> Vec<String> {
        self.app
            .shelf()
            .columns()
            .column(state)
            .iter()
            .map(|b| b.title.clone())
            .collect()
    }
}
