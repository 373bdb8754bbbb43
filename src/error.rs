//! Error types for transitctl

use thiserror::Error;

use crate::session::Portal;

/// Result type alias for transitctl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Generic message shown when a login fails without a server explanation
pub const LOGIN_FAILED: &str = "Login failed";

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not logged in. Run `transitctl login` to start a session.")]
    NotLoggedIn,

    #[error("This command needs the {expected} portal (current: {actual}). Pass `--portal {expected}`.")]
    WrongPortal { expected: Portal, actual: Portal },

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Login errors.
///
/// Every variant renders as a message fit for the user. Transport failures
/// collapse to the generic [`LOGIN_FAILED`] text; the detail is kept for logs.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The server refused the credentials (or failed) and said why
    #[error("{0}")]
    Rejected(String),

    #[error("Login failed")]
    Network(String),

    #[error("Invalid login response: {0}")]
    InvalidResponse(String),

    #[error("Failed to persist session: {0}")]
    Storage(String),

    /// A newer login or a logout happened while this login was in flight
    #[error("Login superseded by a newer session change")]
    Superseded,
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        AuthError::Network(err.to_string())
    }
}

/// Errors from authorized API requests
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Session expired or rejected. Run `transitctl login` again.")]
    Unauthorized,

    #[error("Access denied. You don't have permission to access this resource.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Durable credential storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read stored entry '{key}': {detail}")]
    Read { key: String, detail: String },

    #[error("Failed to write stored entry '{key}': {detail}")]
    Write { key: String, detail: String },

    #[error("Failed to remove stored entry '{key}': {detail}")]
    Remove { key: String, detail: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_rejected_shows_server_message() {
        let err = AuthError::Rejected("invalid credentials".to_string());
        assert_eq!(err.to_string(), "invalid credentials");
    }

    #[test]
    fn test_auth_error_network_is_generic() {
        let err = AuthError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), LOGIN_FAILED);
    }

    #[test]
    fn test_auth_error_invalid_response() {
        let err = AuthError::InvalidResponse("missing field `token`".to_string());
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_api_error_unauthorized_message() {
        let err = ApiError::Unauthorized;
        assert!(err.to_string().contains("transitctl login"));
    }

    #[test]
    fn test_api_error_forbidden_message() {
        let err = ApiError::Forbidden;
        assert!(err.to_string().contains("permission"));
    }

    #[test]
    fn test_api_error_not_found() {
        let err = ApiError::NotFound("route 42".to_string());
        assert!(err.to_string().contains("route 42"));
    }

    #[test]
    fn test_api_error_server_error() {
        let err = ApiError::ServerError("database unavailable".to_string());
        assert!(err.to_string().contains("database unavailable"));
    }

    #[test]
    fn test_not_logged_in_points_to_login() {
        assert!(Error::NotLoggedIn.to_string().contains("transitctl login"));
    }

    #[test]
    fn test_wrong_portal_suggests_flag() {
        let err = Error::WrongPortal {
            expected: Portal::Owner,
            actual: Portal::Admin,
        };
        assert!(err.to_string().contains("--portal owner"));
    }

    #[test]
    fn test_storage_error_names_key() {
        let err = StorageError::Write {
            key: "adminToken".to_string(),
            detail: "read-only filesystem".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("adminToken"));
        assert!(msg.contains("read-only"));
    }

    #[test]
    fn test_error_from_auth_error() {
        let err: Error = AuthError::Superseded.into();
        match err {
            Error::Auth(AuthError::Superseded) => (),
            _ => panic!("Expected Error::Auth(AuthError::Superseded)"),
        }
    }

    #[test]
    fn test_error_from_api_error() {
        let err: Error = ApiError::Unauthorized.into();
        match err {
            Error::Api(ApiError::Unauthorized) => (),
            _ => panic!("Expected Error::Api(ApiError::Unauthorized)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
