//! Test harness: the full router over an in-memory database and a
//! settable clock, driven with `oneshot`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use foodie_server::availability::{FixedClock, MinuteOfDay};
use foodie_server::api::build_app;
use foodie_server::db::DbService;
use foodie_server::{Config, ServerState};
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use parking_lot::Mutex;
use serde_json::Value;
use tower::ServiceExt;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin-secret";

pub struct TestApp {
    pub app: Router,
    pub state: ServerState,
    pub clock: Arc<FixedClock>,
}

pub fn minute(m: u16) -> MinuteOfDay {
    MinuteOfDay::new(m).expect("minute in range")
}

pub async fn spawn_app(at_minute: u16) -> TestApp {
    let mut config = Config::with_overrides("sqlite::memory:", 0);
    config.environment = "test".into();
    config.seed_demo_data = false;
    config.frontend_url = None;
    config.admin_username = ADMIN_USERNAME.into();
    config.admin_password = ADMIN_PASSWORD.into();
    config.session_ttl_secs = 3600;

    let db = DbService::in_memory().await.expect("in-memory database");
    let clock = Arc::new(FixedClock::new(minute(at_minute)));
    let state = ServerState::with_clock(config, db.pool, clock.clone());
    let app = build_app(&state);

    TestApp { app, state, clock }
}

impl TestApp {
    /// A browser with its own cookie jar
    pub fn client(&self) -> TestClient {
        TestClient {
            app: self.app.clone(),
            cookie: Mutex::new(None),
        }
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

pub struct TestClient {
    app: Router,
    cookie: Mutex<Option<String>>,
}

impl TestClient {
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, body: Option<Value>) -> TestResponse {
        self.send(Method::DELETE, uri, body).await
    }

    pub fn has_session(&self) -> bool {
        self.cookie.lock().is_some()
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = self.cookie.lock().clone() {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("valid request");

        let response = self.app.clone().oneshot(request).await.expect("infallible");
        let status = response.status();

        for value in response.headers().get_all(header::SET_COOKIE) {
            let raw = value.to_str().expect("ascii cookie");
            let pair = raw.split(';').next().unwrap_or_default().trim().to_string();
            if raw.contains("Max-Age=0") {
                *self.cookie.lock() = None;
            } else {
                *self.cookie.lock() = Some(pair);
            }
        }

        let bytes = response.into_body().collect().await.expect("body").to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        TestResponse { status, body }
    }

    pub async fn admin_login(&self) {
        let res = self
            .post(
                "/api/admin/login",
                serde_json::json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD }),
            )
            .await;
        assert_eq!(res.status, StatusCode::OK, "admin login: {}", res.body);
    }

    pub async fn signup(&self, name: &str, email: &str) -> i64 {
        let res = self
            .post(
                "/api/auth/signup",
                serde_json::json!({
                    "name": name,
                    "email": email,
                    "phone": "9876543210",
                    "password": "secret123",
                }),
            )
            .await;
        assert_eq!(res.status, StatusCode::OK, "signup: {}", res.body);
        res.body["user"]["id"].as_i64().expect("user id")
    }
}
