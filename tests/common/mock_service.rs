//! In-memory stand-in for the book service.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use bookshelf::books::{Book, ReadingState};
use serde::Deserialize;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }
}

/// A response that overrides the store for the next request.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl MockResponse {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self::json(status, &format!(r#"{{"detail": "{}"}}"#, message))
    }
}

#[derive(Default)]
struct Store {
    books: Vec<Book>,
    next_id: u64,
    requests: Vec<CapturedRequest>,
    scripted: VecDeque<MockResponse>,
}

#[derive(Clone)]
struct MockState {
    store: Arc<Mutex<Store>>,
}

#[derive(Deserialize)]
struct CreateBody {
    title: String,
    state: ReadingState,
}

#[derive(Deserialize)]
struct MoveBody {
    new_state: ReadingState,
}

/// Book service double: real routes over an in-memory list.
pub struct MockBookService {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockBookService {
    /// Start a new mock service on an ephemeral port.
    pub async fn start() -> Self {
        let state = MockState {
            store: Arc::new(Mutex::new(Store {
                next_id: 1,
                ..Store::default()
            })),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock service");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Replace the stored books; ids continue after the highest seeded id.
    pub async fn seed(&self, books: Vec<Book>) {
        let mut store = self.state.store.lock().await;
        store.next_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        store.books = books;
    }

    pub async fn books(&self) -> Vec<Book> {
        self.state.store.lock().await.books.clone()
    }

    /// Answer the next request with `resp` instead of touching the store.
    pub async fn enqueue_response(&self, resp: MockResponse) {
        self.state.store.lock().await.scripted.push_back(resp);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.store.lock().await.requests.clone()
    }

    pub async fn clear_requests(&self) {
        self.state.store.lock().await.requests.clear();
    }
}

impl Drop for MockBookService {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let headers: Vec<(String, String)> = req
        .headers()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
        .collect();
    let body = axum::body::to_bytes(req.into_body(), 1024 * 1024)
        .await
        .unwrap_or_default()
        .to_vec();

    let mut store = state.store.lock().await;
    store.requests.push(CapturedRequest {
        method: method.to_string(),
        path: path.clone(),
        headers,
        body: body.clone(),
    });

    if let Some(scripted) = store.scripted.pop_front() {
        return respond(scripted.status, scripted.body);
    }

    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    match (method.as_str(), segments.as_slice()) {
        ("GET", ["books"]) => {
            let json = serde_json::to_vec(&store.books).unwrap();
            respond(200, json)
        }
        ("POST", ["books"]) => match serde_json::from_slice::<CreateBody>(&body) {
            Ok(create) if !create.title.trim().is_empty() => {
                let book = Book {
                    id: store.next_id,
                    title: create.title,
                    state: create.state,
                };
                store.next_id += 1;
                store.books.push(book.clone());
                respond(201, serde_json::to_vec(&book).unwrap())
            }
            _ => respond(422, br#"{"detail": "invalid book"}"#.to_vec()),
        },
        ("PUT", ["books", id]) => {
            let Ok(id) = id.parse::<u64>() else {
                return respond(404, br#"{"detail": "not found"}"#.to_vec());
            };
            let Ok(change) = serde_json::from_slice::<MoveBody>(&body) else {
                return respond(422, br#"{"detail": "invalid state"}"#.to_vec());
            };
            match store.books.iter_mut().find(|b| b.id == id) {
                Some(book) => {
                    book.state = change.new_state;
                    let json = serde_json::to_vec(&*book).unwrap();
                    respond(200, json)
                }
                None => respond(404, br#"{"detail": "not found"}"#.to_vec()),
            }
        }
        ("DELETE", ["books", id]) => {
            let id = id.parse::<u64>().unwrap_or(0);
            let before = store.books.len();
            store.books.retain(|b| b.id != id);
            if store.books.len() < before {
                respond(200, br#"{"ok": true}"#.to_vec())
            } else {
                respond(404, br#"{"detail": "not found"}"#.to_vec())
            }
        }
        _ => respond(404, br#"{"detail": "not found"}"#.to_vec()),
    }
}

fn respond(status: u16, body: Vec<u8>) -> Response<Body> {
    Response::builder()
        .status(StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR))
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}
