//! Turns session lifecycle events into user-visible notices. Owns the
//! session-expired toast so pages never emit their own.

use std::sync::Arc;

use auth_session::{Session, SessionEvent};
use tokio::sync::broadcast::error::RecvError;

use crate::notify::Notifier;

/// Spawns the watcher. Runs until the session is dropped.
pub fn spawn(session: Arc<Session>, notifier: Notifier) -> tokio::task::JoinHandle<()> {
    let mut events = session.subscribe();
    tokio::spawn(async move {
        // keep the sender alive for as long as we listen
        let _session = session;
        loop {
            match events.recv().await {
                Ok(SessionEvent::Expired) => {
                    tracing::warn!("session expired, credentials cleared");
                    notifier.error("Session expired", "Please log in again.");
                }
                Ok(SessionEvent::LoggedIn | SessionEvent::LoggedOut) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "session watcher lagged behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
    })
}
