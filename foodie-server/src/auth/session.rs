//! Cookie sessions
//!
//! A session carries the signed-in customer, the admin flag and the cart.
//! State lives in a process-local [`SessionStore`]; the browser only holds
//! an opaque id in the `foodie.sid` cookie.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use dashmap::DashMap;
use http::{HeaderMap, HeaderValue, header};
use parking_lot::Mutex;
use shared::models::{CartItem, SessionUser};

use crate::core::ServerState;

pub const COOKIE_NAME: &str = "foodie.sid";

/// Everything kept server-side for one browser
#[derive(Debug, Clone, Default)]
pub struct SessionData {
    pub user: Option<SessionUser>,
    pub is_admin: bool,
    pub cart: Vec<CartItem>,
}

#[derive(Debug)]
struct Entry {
    data: SessionData,
    expires_at: Instant,
}

/// In-memory session table with a fixed time-to-live
#[derive(Debug, Clone)]
pub struct SessionStore {
    entries: Arc<DashMap<String, Entry>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Live session data; an expired entry is dropped and reads as absent
    pub fn load(&self, id: &str) -> Option<SessionData> {
        let expired = match self.entries.get(id) {
            Some(entry) if entry.expires_at > Instant::now() => return Some(entry.data.clone()),
            Some(_) => true,
            None => false,
        };
        if expired {
            self.entries.remove(id);
        }
        None
    }

    pub fn save(&self, id: &str, data: SessionData) {
        self.entries.insert(
            id.to_string(),
            Entry {
                data,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    pub fn remove(&self, id: &str) {
        self.entries.remove(id);
    }

    /// Drop every expired entry, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.expires_at > now);
        before.saturating_sub(self.entries.len())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug)]
struct SessionInner {
    id: Option<String>,
    data: SessionData,
    dirty: bool,
    destroyed: bool,
}

/// Per-request handle to the caller's session
///
/// Inserted into request extensions by [`session_middleware`]. Mutations are
/// written back to the store once the handler has produced a response.
#[derive(Debug, Clone)]
pub struct Session {
    inner: Arc<Mutex<SessionInner>>,
}

impl Session {
    fn new(id: Option<String>, data: SessionData) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionInner {
                id,
                data,
                dirty: false,
                destroyed: false,
            })),
        }
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.inner.lock().data.user.clone()
    }

    pub fn set_user(&self, user: SessionUser) {
        let mut inner = self.inner.lock();
        inner.data.user = Some(user);
        inner.dirty = true;
    }

    pub fn is_admin(&self) -> bool {
        self.inner.lock().data.is_admin
    }

    pub fn set_admin(&self, is_admin: bool) {
        let mut inner = self.inner.lock();
        inner.data.is_admin = is_admin;
        inner.dirty = true;
    }

    pub fn cart(&self) -> Vec<CartItem> {
        self.inner.lock().data.cart.clone()
    }

    pub fn set_cart(&self, cart: Vec<CartItem>) {
        let mut inner = self.inner.lock();
        inner.data.cart = cart;
        inner.dirty = true;
    }

    /// Forget the whole session, cart included
    pub fn destroy(&self) {
        let mut inner = self.inner.lock();
        inner.data = SessionData::default();
        inner.destroyed = true;
    }

    /// Persist pending changes and emit the matching `Set-Cookie`
    fn commit(&self, store: &SessionStore, secure: bool, headers: &mut HeaderMap) {
        let mut inner = self.inner.lock();

        if inner.destroyed {
            if let Some(id) = inner.id.take() {
                store.remove(&id);
                append_cookie(headers, &clear_cookie(secure));
            }
            return;
        }

        if !inner.dirty {
            return;
        }

        let id = inner
            .id
            .get_or_insert_with(|| uuid::Uuid::new_v4().to_string())
            .clone();
        store.save(&id, inner.data.clone());
        inner.dirty = false;
        append_cookie(headers, &session_cookie(&id, store.ttl(), secure));
    }
}

/// Loads the session named by the request cookie and writes it back afterwards
pub async fn session_middleware(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Response {
    let cookie_id = cookie_value(req.headers(), COOKIE_NAME);
    let (id, data) = match cookie_id {
        Some(id) => match state.sessions.load(&id) {
            Some(data) => (Some(id), data),
            None => (None, SessionData::default()),
        },
        None => (None, SessionData::default()),
    };

    let session = Session::new(id, data);
    req.extensions_mut().insert(session.clone());

    let mut response = next.run(req).await;
    session.commit(
        &state.sessions,
        state.config.is_production(),
        response.headers_mut(),
    );
    response
}

/// First value of the named cookie across all `Cookie` headers
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

fn session_cookie(id: &str, ttl: Duration, secure: bool) -> String {
    let same_site = if secure { "None; Secure" } else { "Lax" };
    format!(
        "{COOKIE_NAME}={id}; HttpOnly; Path=/; Max-Age={}; SameSite={same_site}",
        ttl.as_secs()
    )
}

fn clear_cookie(secure: bool) -> String {
    let same_site = if secure { "None; Secure" } else { "Lax" };
    format!("{COOKIE_NAME}=; HttpOnly; Path=/; Max-Age=0; SameSite={same_site}")
}

fn append_cookie(headers: &mut HeaderMap, cookie: &str) {
    match HeaderValue::from_str(cookie) {
        Ok(value) => {
            headers.append(header::SET_COOKIE, value);
        }
        Err(e) => tracing::warn!(error = %e, "Invalid session cookie header"),
    }
}
