#![deny(missing_docs)]
//! This crate provides the explicit session object shared between the
//! request client and the console. The token is the only cross-page mutable
//! state in the system; it is created at application start, written only by
//! [`Session::log_in`], [`Session::log_out`] and [`Session::expire`], and
//! read by the request client on every call.

use std::sync::{Arc, RwLock};

use tokio::sync::broadcast;

/// Lifecycle notifications emitted by a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A token was installed via [`Session::log_in`].
    LoggedIn,
    /// The user explicitly logged out.
    LoggedOut,
    /// The backend rejected the token (HTTP 401) and the session was torn
    /// down.
    Expired,
}

/// Holder of the bearer token plus a broadcast channel for lifecycle events.
#[derive(Debug)]
pub struct Session {
    token: RwLock<Option<String>>,
    events: broadcast::Sender<SessionEvent>,
}

impl Session {
    /// Creates an unauthenticated session.
    pub fn new() -> Arc<Self> {
        let (events, _) = broadcast::channel(16);
        Arc::new(Self {
            token: RwLock::new(None),
            events,
        })
    }

    /// Creates a session that already holds a token. Mostly useful in tests
    /// and at application start when a token was restored.
    pub fn with_token(token: impl Into<String>) -> Arc<Self> {
        let session = Self::new();
        *session.token.write().unwrap() = Some(token.into());
        session
    }

    /// Installs a bearer token and announces the login.
    pub fn log_in(&self, token: impl Into<String>) {
        *self.token.write().unwrap() = Some(token.into());
        let _ = self.events.send(SessionEvent::LoggedIn);
    }

    /// Drops the token on explicit user logout.
    pub fn log_out(&self) {
        self.token.write().unwrap().take();
        let _ = self.events.send(SessionEvent::LoggedOut);
    }

    /// Tears the session down after a 401. The `Expired` event fires only if
    /// a token was actually held, so racing 401s from parallel requests
    /// announce the expiry once.
    pub fn expire(&self) {
        let had_token = self.token.write().unwrap().take().is_some();
        if had_token {
            let _ = self.events.send(SessionEvent::Expired);
        }
    }

    /// The current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    /// Whether a token is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.token.read().unwrap().is_some()
    }

    /// Subscribes to lifecycle events. Subscribers that lag simply miss
    /// events; nothing blocks on a slow listener.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }
}
