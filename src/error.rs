use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for Last.fm API operations.
///
/// Every request ends in exactly one of these outcomes when it does not
/// succeed. Transport problems, payloads that do not match any expected
/// shape, and failures reported by Last.fm itself are kept apart so callers
/// can react to each one differently.
///
/// # Error Handling Examples
///
/// ```rust,no_run
/// use lastfm_api::{ArtistTopParams, LastFmClient, LastFmError, ServiceErrorKind};
///
/// # async fn example(client: LastFmClient) {
/// let params = ArtistTopParams::new("Cafe Tacvba");
/// match client.artist_top_tracks(&params).await {
///     Ok(page) => println!("{} tracks", page.items.len()),
///     Err(LastFmError::Service { kind: ServiceErrorKind::InvalidApiKey, .. }) => {
///         eprintln!("Check LASTFM_API_KEY");
///     }
///     Err(LastFmError::Service { kind, message }) => eprintln!("{kind:?}: {message}"),
///     Err(LastFmError::Http(msg)) => eprintln!("Network error: {msg}"),
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// # }
/// ```
#[derive(Error, Debug)]
pub enum LastFmError {
    /// HTTP/network related errors.
    ///
    /// No response was obtained: connection failures, DNS errors, TLS errors
    /// or a body that could not be read. This layer never retries them.
    #[error("HTTP error: {0}")]
    Http(String),

    /// A response arrived but matched neither the success shape nor the
    /// error envelope.
    #[error("Malformed response: {0}")]
    Malformed(#[from] DecodeError),

    /// Last.fm answered with its own error envelope.
    ///
    /// `message` is passed through verbatim from the server.
    #[error("Last.fm service error ({kind:?}): {message}")]
    Service {
        /// Classified error code
        kind: ServiceErrorKind,
        /// Server-supplied, human-readable message
        message: String,
    },

    /// Invalid client configuration (missing API key, unreadable config file).
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system I/O errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LastFmError {
    /// The service error kind, if this is a service error.
    pub fn service_kind(&self) -> Option<ServiceErrorKind> {
        match self {
            LastFmError::Service { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Reasons a payload failed to decode.
///
/// Field names are dotted paths from the document root, e.g.
/// `toptracks.track[1].duration`.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The body was not JSON at all.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing field `{field}`")]
    MissingField { field: String },

    /// The field exists but has the wrong JSON type (e.g. a native number
    /// where Last.fm always sends a string).
    #[error("field `{field}` has unexpected type, expected {expected}")]
    UnexpectedType {
        field: String,
        expected: &'static str,
    },

    #[error("malformed field `{field}`: {value:?} is not {expected}")]
    MalformedField {
        field: String,
        value: String,
        expected: &'static str,
    },

    /// A date object was present but none of its encodings parsed.
    #[error("field `{field}` holds no parseable date")]
    InvalidDate { field: String },

    #[error("missing results container `{0}`")]
    MissingContainer(String),

    #[error("missing items key in `{0}`")]
    MissingItemsKey(String),

    /// More than one candidate items key in a search result.
    #[error("ambiguous items key, candidates: {0:?}")]
    AmbiguousItemsKey(Vec<String>),
}

impl DecodeError {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        DecodeError::MissingField {
            field: field.into(),
        }
    }

    pub(crate) fn unexpected(field: impl Into<String>, expected: &'static str) -> Self {
        DecodeError::UnexpectedType {
            field: field.into(),
            expected,
        }
    }

    pub(crate) fn malformed(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        DecodeError::MalformedField {
            field: field.into(),
            value: value.into(),
            expected,
        }
    }

    /// The field path this error points at, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            DecodeError::MissingField { field }
            | DecodeError::UnexpectedType { field, .. }
            | DecodeError::MalformedField { field, .. }
            | DecodeError::InvalidDate { field } => Some(field),
            DecodeError::MissingContainer(key) | DecodeError::MissingItemsKey(key) => Some(key),
            DecodeError::Json(_) | DecodeError::AmbiguousItemsKey(_) => None,
        }
    }
}

/// Closed set of Last.fm error codes.
///
/// See <https://www.last.fm/api/errorcodes>. Codes this crate does not know
/// about are kept in [`ServiceErrorKind::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceErrorKind {
    InvalidService,
    InvalidMethod,
    AuthenticationFailed,
    InvalidFormat,
    InvalidParameters,
    InvalidResource,
    OperationFailed,
    InvalidSessionKey,
    InvalidApiKey,
    ServiceOffline,
    InvalidMethodSignature,
    TemporaryError,
    SuspendedApiKey,
    RateLimitExceeded,
    Unknown(i64),
}

impl ServiceErrorKind {
    pub fn from_code(code: i64) -> Self {
        match code {
            2 => ServiceErrorKind::InvalidService,
            3 => ServiceErrorKind::InvalidMethod,
            4 => ServiceErrorKind::AuthenticationFailed,
            5 => ServiceErrorKind::InvalidFormat,
            6 => ServiceErrorKind::InvalidParameters,
            7 => ServiceErrorKind::InvalidResource,
            8 => ServiceErrorKind::OperationFailed,
            9 => ServiceErrorKind::InvalidSessionKey,
            10 => ServiceErrorKind::InvalidApiKey,
            11 => ServiceErrorKind::ServiceOffline,
            13 => ServiceErrorKind::InvalidMethodSignature,
            16 => ServiceErrorKind::TemporaryError,
            26 => ServiceErrorKind::SuspendedApiKey,
            29 => ServiceErrorKind::RateLimitExceeded,
            other => ServiceErrorKind::Unknown(other),
        }
    }

    pub fn code(&self) -> i64 {
        match self {
            ServiceErrorKind::InvalidService => 2,
            ServiceErrorKind::InvalidMethod => 3,
            ServiceErrorKind::AuthenticationFailed => 4,
            ServiceErrorKind::InvalidFormat => 5,
            ServiceErrorKind::InvalidParameters => 6,
            ServiceErrorKind::InvalidResource => 7,
            ServiceErrorKind::OperationFailed => 8,
            ServiceErrorKind::InvalidSessionKey => 9,
            ServiceErrorKind::InvalidApiKey => 10,
            ServiceErrorKind::ServiceOffline => 11,
            ServiceErrorKind::InvalidMethodSignature => 13,
            ServiceErrorKind::TemporaryError => 16,
            ServiceErrorKind::SuspendedApiKey => 26,
            ServiceErrorKind::RateLimitExceeded => 29,
            ServiceErrorKind::Unknown(code) => *code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_round_trip() {
        for code in [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 13, 16, 26, 29] {
            let kind = ServiceErrorKind::from_code(code);
            assert!(!matches!(kind, ServiceErrorKind::Unknown(_)), "code {code}");
            assert_eq!(kind.code(), code);
        }
    }

    #[test]
    fn test_unknown_code_is_preserved() {
        assert_eq!(ServiceErrorKind::from_code(42), ServiceErrorKind::Unknown(42));
        assert_eq!(ServiceErrorKind::Unknown(42).code(), 42);
    }

    #[test]
    fn test_decode_error_names_field() {
        let err = DecodeError::malformed("track.duration", "abc", "an unsigned integer");
        assert_eq!(err.field(), Some("track.duration"));
        assert!(err.to_string().contains("track.duration"));
        assert!(err.to_string().contains("abc"));
    }
}
