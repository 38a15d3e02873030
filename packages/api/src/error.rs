//! Error types for backend calls.

use thiserror::Error;

/// Everything that can go wrong talking to the backend.
///
/// `Display` is the user-facing message pages show in their error banner.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No response at all: offline, CORS, server down.
    #[error("Unable to reach the server. Please try again.")]
    Transport { message: String },

    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// A 2xx response whose body does not match the expected shape.
    #[error("Unexpected response from the server: {message}")]
    Decode { message: String },

    /// An enforcing client saw a 401 and tore the session down.
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// HTTP status, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Unauthorized => Some(401),
            Self::Transport { .. } | Self::Decode { .. } => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status() {
        assert_eq!(ApiError::http(404, "Not found").status(), Some(404));
        assert_eq!(ApiError::Unauthorized.status(), Some(401));
        assert_eq!(ApiError::transport("refused").status(), None);
        assert_eq!(ApiError::decode("eof").status(), None);
    }

    #[test]
    fn test_unauthorized_covers_both_paths() {
        assert!(ApiError::http(401, "Not authenticated").is_unauthorized());
        assert!(ApiError::Unauthorized.is_unauthorized());
        assert!(!ApiError::http(403, "Forbidden").is_unauthorized());
    }

    #[test]
    fn test_display_is_user_facing() {
        assert_eq!(
            ApiError::http(400, "Email already registered").to_string(),
            "Email already registered"
        );
        assert!(ApiError::transport("connection refused")
            .to_string()
            .contains("Unable to reach the server"));
    }
}
