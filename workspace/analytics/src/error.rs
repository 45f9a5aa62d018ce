use thiserror::Error;
use tracing::error;

/// Failures of a whole history fetch.
///
/// Per-record problems (malformed soil JSON, unparsable dates) never show up
/// here; the normalizer absorbs them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// No bearer token is stored for the current user
    #[error("No authentication token found")]
    MissingCredential,

    /// The backend rejected the bearer token
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The request never produced an HTTP response
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status
    #[error("Server error ({status}): {detail}")]
    Server { status: u16, detail: String },

    /// The response body is not a history array
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}

impl FetchError {
    /// Classifies a non-success HTTP status.
    pub fn from_status(status: u16, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let err = match status {
            401 | 403 => FetchError::Unauthorized(detail),
            _ => FetchError::Server { status, detail },
        };
        error!(?err, "History fetch rejected by server");
        err
    }

    /// Whether the stored credential must be discarded and the user sent
    /// back to the login screen.
    pub fn requires_login(&self) -> bool {
        matches!(self, FetchError::MissingCredential | FetchError::Unauthorized(_))
    }

    /// Message shown to the farmer.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::MissingCredential => {
                "No authentication token found. Please log in again.".to_string()
            }
            FetchError::Unauthorized(_) => {
                "Your session has expired. Please log in again.".to_string()
            }
            FetchError::Network(_) | FetchError::Server { .. } | FetchError::InvalidPayload(_) => {
                "Failed to fetch prediction history. Please try again.".to_string()
            }
        }
    }
}

impl From<common::DecodeError> for FetchError {
    fn from(error: common::DecodeError) -> Self {
        let err = FetchError::InvalidPayload(error.to_string());
        error!(?err, "History payload could not be decoded");
        err
    }
}

/// Type alias for Result with FetchError
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert!(matches!(FetchError::from_status(401, "expired"), FetchError::Unauthorized(_)));
        assert!(matches!(FetchError::from_status(403, ""), FetchError::Unauthorized(_)));
        assert_eq!(
            FetchError::from_status(502, "bad gateway"),
            FetchError::Server {
                status: 502,
                detail: "bad gateway".to_string()
            }
        );
    }

    #[test]
    fn test_login_required_only_for_credential_errors() {
        assert!(FetchError::MissingCredential.requires_login());
        assert!(FetchError::Unauthorized(String::new()).requires_login());
        assert!(!FetchError::Network("offline".into()).requires_login());
        assert!(!FetchError::InvalidPayload("object".into()).requires_login());
    }

    #[test]
    fn test_server_failures_share_a_generic_message() {
        let network = FetchError::Network("dns".into()).user_message();
        let server = FetchError::from_status(500, "boom").user_message();
        assert_eq!(network, server);
        assert!(!server.contains("boom"));
    }

    #[test]
    fn test_decode_error_becomes_invalid_payload() {
        let decode = common::history_from_slice(b"{}").unwrap_err();
        assert!(matches!(FetchError::from(decode), FetchError::InvalidPayload(_)));
    }
}
