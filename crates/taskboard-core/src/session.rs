//! Session Handling
//!
//! The bearer token is acquired by the external login flow and persisted by the
//! host. This module turns it into an explicit [`Session`] and decides whether
//! the board may start at all.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Persisted credential storage (browser `localStorage`, memory in tests)
pub trait CredentialStore {
    /// Read the stored token, if any
    fn load(&self) -> Option<String>;

    /// Forget the stored token
    fn clear(&self);
}

/// Authenticated session passed to everything that talks to the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Build a session, reading the expiry from the token when it is a JWT
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        let expires_at = jwt_expiry(&token);
        Self { token, expires_at }
    }

    pub fn with_expiry(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self { token: token.into(), expires_at: Some(expires_at) }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Value for the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Outcome of the session gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// Credential present and usable
    Proceed(Session),
    /// Hand over to the external login flow; nothing else may run
    RedirectToLogin,
}

/// Entry check run once when the board is mounted
pub struct SessionGate;

impl SessionGate {
    pub fn open(store: &impl CredentialStore) -> Gate {
        Self::open_at(store, Utc::now())
    }

    pub fn open_at(store: &impl CredentialStore, now: DateTime<Utc>) -> Gate {
        let Some(token) = store.load().filter(|t| !t.trim().is_empty()) else {
            log::info!("no stored credential, redirecting to login");
            return Gate::RedirectToLogin;
        };

        let session = Session::new(token);
        if session.is_expired_at(now) {
            log::info!("stored credential expired, redirecting to login");
            store.clear();
            return Gate::RedirectToLogin;
        }

        Gate::Proceed(session)
    }
}

#[derive(Deserialize)]
struct Claims {
    exp: Option<i64>,
}

/// Read the `exp` claim of a JWT. Opaque tokens have no known expiry.
fn jwt_expiry(token: &str) -> Option<DateTime<Utc>> {
    let mut parts = token.split('.');
    let (_header, payload, _sig) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    DateTime::from_timestamp(claims.exp?, 0)
}
