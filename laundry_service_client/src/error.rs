use async_trait::async_trait;
use reqwest::{Response, StatusCode};

/// Failure of a single request, classified once at the client boundary.
/// Everything above only distinguishes "data", "`None` (session ended)" and
/// "error".
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// The backend answered with a non-2xx status (other than 401). The
    /// message is the backend's own `message` field when the error body
    /// carried one.
    #[error("{message}")]
    Http { status: StatusCode, message: String },
    /// The request never produced a response.
    #[error("request to laundry service failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered 2xx but the body was not the expected JSON.
    #[error("failed to decode laundry service response: {0}")]
    Decode(#[source] reqwest::Error),
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[async_trait]
pub trait ResponseExt {
    async fn map_client_error(self) -> Result<Response, ClientError>;
}

#[async_trait]
impl ResponseExt for Response {
    async fn map_client_error(self) -> Result<Response, ClientError> {
        match self.status() {
            StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED | StatusCode::NO_CONTENT => {
                Ok(self)
            }
            status => {
                let body = self.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ErrorBody>(&body)
                    .ok()
                    .and_then(|parsed| parsed.message)
                    .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()));
                tracing::error!(
                    body=%body,
                    status=%status,
                    "unexpected response from laundry service"
                );
                Err(ClientError::Http { status, message })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_bare_message() {
        let error = ClientError::Http {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "name already taken".to_string(),
        };
        assert_eq!(error.to_string(), "name already taken");
    }

    #[test]
    fn fallback_message_format() {
        let error = ClientError::Http {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("HTTP error! status: {}", 500),
        };
        assert_eq!(error.to_string(), "HTTP error! status: 500");
    }
}
