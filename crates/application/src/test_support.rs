//! Shared mock ports for the crate's tests.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, missing_docs)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use base64::Engine;
use chrono::{DateTime, TimeZone, Utc};

use lanyard_domain::config::RETURN_PATH_KEY;
use lanyard_domain::{ApiRequest, ApiResponse, AuthError};

use crate::ports::{Clock, HttpClient, HttpClientError, SessionGateway, TokenExchange, TokenPair};

/// Builds a structurally valid unsigned token carrying the given
/// claims payload.
pub fn token_with_claims(payload: &serde_json::Value) -> String {
    let engine = &base64::engine::general_purpose::URL_SAFE_NO_PAD;
    format!(
        "{}.{}.sig",
        engine.encode(br#"{"alg":"none"}"#),
        engine.encode(payload.to_string().as_bytes())
    )
}

/// Clock pinned to a fixed instant.
pub struct MockClock {
    now: DateTime<Utc>,
}

impl MockClock {
    pub fn at(epoch_secs: i64) -> Self {
        Self {
            now: Utc.timestamp_opt(epoch_secs, 0).single().unwrap(),
        }
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

/// Token exchange stub with a fixed outcome, an optional artificial
/// delay and a call counter.
pub struct StubExchange {
    outcome: Result<TokenPair, AuthError>,
    delay_ms: u64,
    calls: AtomicU32,
}

impl StubExchange {
    pub fn succeeding(access_token: &str, refresh_token: &str) -> Self {
        Self {
            outcome: Ok(TokenPair {
                access_token: access_token.to_string(),
                refresh_token: refresh_token.to_string(),
            }),
            delay_ms: 0,
            calls: AtomicU32::new(0),
        }
    }

    pub fn failing(error: AuthError) -> Self {
        Self {
            outcome: Err(error),
            delay_ms: 0,
            calls: AtomicU32::new(0),
        }
    }

    #[must_use]
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenExchange for StubExchange {
    async fn exchange(&self, _refresh_token: &str) -> Result<TokenPair, AuthError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.delay_ms)).await;
        }
        self.outcome.clone()
    }
}

/// HTTP client stub driven by a scripted queue of outcomes; records
/// every executed request.
pub struct StubHttpClient {
    script: Mutex<VecDeque<Result<ApiResponse, HttpClientError>>>,
    seen: Mutex<Vec<ApiRequest>>,
}

impl StubHttpClient {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn push_status(&self, status: u16) {
        self.script
            .lock()
            .unwrap()
            .push_back(Ok(ApiResponse::new(status, HashMap::new(), Vec::new())));
    }

    pub fn push_error(&self, error: HttpClientError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for StubHttpClient {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, HttpClientError> {
        self.seen.lock().unwrap().push(request.clone());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .expect("script exhausted: unexpected request")
    }
}

/// In-memory session gateway recording navigation side effects.
pub struct TestSession {
    state: Mutex<SessionState>,
}

struct SessionState {
    route: String,
    storage: HashMap<String, String>,
    redirects: u32,
    navigations: Vec<String>,
}

impl TestSession {
    pub fn at_route(route: &str) -> Self {
        Self {
            state: Mutex::new(SessionState {
                route: route.to_string(),
                storage: HashMap::new(),
                redirects: 0,
                navigations: Vec::new(),
            }),
        }
    }

    pub fn redirects(&self) -> u32 {
        self.state.lock().unwrap().redirects
    }

    pub fn navigations(&self) -> Vec<String> {
        self.state.lock().unwrap().navigations.clone()
    }

    pub fn stashed(&self) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .storage
            .get(RETURN_PATH_KEY)
            .cloned()
    }
}

impl SessionGateway for TestSession {
    fn current_route(&self) -> String {
        self.state.lock().unwrap().route.clone()
    }

    fn navigate_to(&self, route: &str) {
        let mut state = self.state.lock().unwrap();
        state.route = route.to_string();
        state.navigations.push(route.to_string());
    }

    fn redirect_to_login(&self) {
        let mut state = self.state.lock().unwrap();
        state.route = "/login".to_string();
        state.redirects += 1;
    }

    fn stash_return_path(&self, route: &str) {
        self.state
            .lock()
            .unwrap()
            .storage
            .insert(RETURN_PATH_KEY.to_string(), route.to_string());
    }

    fn peek_return_path(&self) -> Option<String> {
        self.stashed()
    }

    fn take_return_path(&self) -> Option<String> {
        self.state.lock().unwrap().storage.remove(RETURN_PATH_KEY)
    }
}
