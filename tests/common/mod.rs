// Local stand-in for the SoundCloud token and search endpoints.
#![allow(dead_code)]

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use scsearch::config::Config;
use serde_json::{Value, json};

pub const CLIENT_ID: &str = "test-id";
pub const CLIENT_SECRET: &str = "test-secret";
// base64("test-id:test-secret")
pub const EXPECTED_BASIC: &str = "Basic dGVzdC1pZDp0ZXN0LXNlY3JldA==";

#[derive(Clone)]
pub enum Reply {
    Ok,
    Status(StatusCode),
    Malformed,
}

#[derive(Clone)]
pub struct FakeUpstream {
    pub expires_in: i64,
    pub token_reply: Reply,
    pub search_reply: Reply,
    pub tracks: Value,
    pub token_calls: Arc<AtomicUsize>,
    pub search_calls: Arc<AtomicUsize>,
    pub last_search: Arc<Mutex<Option<HashMap<String, String>>>>,
    pub last_bearer: Arc<Mutex<Option<String>>>,
}

impl Default for FakeUpstream {
    fn default() -> Self {
        FakeUpstream {
            expires_in: 3600,
            token_reply: Reply::Ok,
            search_reply: Reply::Ok,
            tracks: json!([]),
            token_calls: Arc::new(AtomicUsize::new(0)),
            search_calls: Arc::new(AtomicUsize::new(0)),
            last_search: Arc::new(Mutex::new(None)),
            last_bearer: Arc::new(Mutex::new(None)),
        }
    }
}

impl FakeUpstream {
    pub fn with_tracks(tracks: Value) -> Self {
        FakeUpstream {
            tracks,
            ..Default::default()
        }
    }

    pub fn token_calls(&self) -> usize {
        self.token_calls.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn last_search(&self) -> HashMap<String, String> {
        self.last_search
            .lock()
            .unwrap()
            .clone()
            .expect("search endpoint was not called")
    }

    pub fn last_bearer(&self) -> Option<String> {
        self.last_bearer.lock().unwrap().clone()
    }

    /// Serves the fake on an ephemeral port and returns a config pointing at it.
    pub async fn spawn(&self) -> Config {
        let app = Router::new()
            .route("/oauth/token", post(token))
            .route("/tracks", get(tracks))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Config::new(CLIENT_ID, CLIENT_SECRET)
            .with_token_url(format!("http://{}/oauth/token", addr))
            .with_api_url(format!("http://{}", addr))
    }
}

async fn token(
    State(fake): State<FakeUpstream>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let n = fake.token_calls.fetch_add(1, Ordering::SeqCst) + 1;

    let basic = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if basic != Some(EXPECTED_BASIC)
        || form.get("grant_type").map(String::as_str) != Some("client_credentials")
    {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    match fake.token_reply {
        Reply::Ok => Json(json!({
            "access_token": format!("token-{}", n),
            "expires_in": fake.expires_in,
            "token_type": "bearer"
        }))
        .into_response(),
        Reply::Status(status) => status.into_response(),
        Reply::Malformed => Json(json!({ "error": "nope" })).into_response(),
    }
}

async fn tracks(
    State(fake): State<FakeUpstream>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    fake.search_calls.fetch_add(1, Ordering::SeqCst);
    *fake.last_search.lock().unwrap() = Some(params);
    *fake.last_bearer.lock().unwrap() = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    match fake.search_reply {
        Reply::Ok => Json(fake.tracks.clone()).into_response(),
        Reply::Status(status) => status.into_response(),
        Reply::Malformed => "<html>not json</html>".into_response(),
    }
}
