//! Cookie-keyed login sessions.
//!
//! A session is an opaque random token mapped to the identity that logged
//! in with it. Sessions are in memory only and vanish on restart.

use std::collections::HashMap;

use axum::http::{header, HeaderMap};
use uuid::Uuid;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "mediashelf_session";

/// Active sessions by token
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<Uuid, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session for `user` and return its token
    pub fn open(&mut self, user: impl Into<String>) -> Uuid {
        let token = Uuid::new_v4();
        self.sessions.insert(token, user.into());
        token
    }

    /// Identity bound to `token`, if the session is live
    pub fn user(&self, token: &Uuid) -> Option<&str> {
        self.sessions.get(token).map(String::as_str)
    }

    /// End a session. Returns the identity it belonged to.
    pub fn close(&mut self, token: &Uuid) -> Option<String> {
        self.sessions.remove(token)
    }
}

/// Extract the session token from the request's Cookie headers
pub fn token_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// Set-Cookie value that stores `token`
pub fn session_cookie(token: &Uuid) -> String {
    format!("{}={}; HttpOnly; Path=/; SameSite=Lax", SESSION_COOKIE, token)
}

/// Set-Cookie value that clears the session cookie
pub fn expired_cookie() -> String {
    format!("{}=; HttpOnly; Path=/; Max-Age=0", SESSION_COOKIE)
}
