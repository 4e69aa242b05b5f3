//! Typed client for the laundry dashboard backend.
//!
//! One [`LaundryServiceClient`] talks to every resource the dashboard uses;
//! each resource gets its own module of thin, typed calls. All outcomes are
//! `Result<Option<T>, ClientError>`: `Ok(None)` means the backend answered
//! 401 and the session was torn down. Callers must treat it as an aborted
//! call, never as an empty success.

use std::sync::Arc;

use auth_session::Session;
use serde::de::DeserializeOwned;

pub mod analytics;
pub mod bookings;
pub mod categories;
pub mod customers;
pub mod error;
pub mod products;
pub mod profile;
pub mod reference;
pub mod service_areas;

use error::{ClientError, ResponseExt};

pub use reqwest::StatusCode;

/// Production base URL, version-prefixed.
pub const DEFAULT_BASE_URL: &str = "https://api.cleandudsdash.com/v1";

#[derive(Clone)]
pub struct LaundryServiceClient {
    base_url: String,
    http: reqwest::Client,
    session: Arc<Session>,
}

impl LaundryServiceClient {
    /// Builds a client against `base_url`, reading the bearer token from
    /// `session` on every call.
    pub fn new(base_url: impl Into<String>, session: Arc<Session>) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap();

        Self {
            base_url: base_url.into(),
            http,
            session,
        }
    }

    /// The session this client authenticates with.
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Resolves `path` against the base URL; absolute URLs pass through.
    fn endpoint(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}{}", self.base_url, path)
        }
    }

    /// Injects the bearer token, sends, and classifies the outcome. A 401
    /// tears the session down and resolves to `Ok(None)` without logging an
    /// error; every other failure is logged before being returned.
    async fn send(
        &self,
        mut request: reqwest::RequestBuilder,
    ) -> Result<Option<reqwest::Response>, ClientError> {
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|error| {
            tracing::error!(%error, "request to laundry service failed");
            ClientError::Transport(error)
        })?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            self.session.expire();
            return Ok(None);
        }

        Ok(Some(response.map_client_error().await?))
    }
}

pub(crate) async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let url = response.url().clone();
    response.json::<T>().await.map_err(|error| {
        tracing::error!(url=%url, %error, "failed to decode response from laundry service");
        ClientError::Decode(error)
    })
}
