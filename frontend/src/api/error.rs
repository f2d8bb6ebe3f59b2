use serde::Deserialize;
use thiserror::Error;

/// Failure of a call to the articles API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or its body could not be decoded.
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),

    /// The server answered with a non-success status.
    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl ApiError {
    /// Builds a status error, preferring the `message` field of a JSON error
    /// body and falling back to the raw body text.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|parsed| parsed.message)
            .unwrap_or_else(|_| body.trim().to_string());
        ApiError::Status { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_message_is_extracted() {
        let err = ApiError::from_status(422, r#"{"message":"title is required"}"#);
        assert_eq!(err.to_string(), "server responded 422: title is required");
    }

    #[test]
    fn plain_body_is_kept() {
        let err = ApiError::from_status(500, "  internal error\n");
        assert_eq!(err.to_string(), "server responded 500: internal error");
    }
}
