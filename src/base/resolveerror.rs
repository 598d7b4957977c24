use http::StatusCode;
use thiserror::Error;

/// Classification of a failed lookup.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ErrorKind {
    /// The name is malformed or does not exist in the namespace.
    InvalidDomain,
    /// No response arrived before the resolver timeout.
    Timeout,
    /// A response arrived but held no usable A record.
    NoAnswer,
    /// Anything not covered above.
    Unknown,
}

impl ErrorKind {
    /// HTTP status returned to the caller for this kind of failure.
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::InvalidDomain => StatusCode::BAD_REQUEST,
            ErrorKind::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ErrorKind::NoAnswer => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorKind::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidDomain => "invalid_domain",
            ErrorKind::Timeout => "timeout",
            ErrorKind::NoAnswer => "no_answer",
            ErrorKind::Unknown => "unknown",
        }
    }
}

/// A classified resolution failure.
///
/// The message is what the HTTP layer reports in the `detail` field.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("{message}")]
pub struct ResolveError {
    kind: ErrorKind,
    message: String,
}

impl ResolveError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Failure reported by the system resolver for an unresolvable name.
    pub fn invalid_domain_name() -> Self {
        Self::new(ErrorKind::InvalidDomain, "Invalid domain name")
    }

    /// NXDOMAIN, or a name the DNS layer refuses to encode.
    pub fn domain_does_not_exist() -> Self {
        Self::new(ErrorKind::InvalidDomain, "Domain does not exist")
    }

    pub fn timed_out() -> Self {
        Self::new(ErrorKind::Timeout, "DNS query timed out")
    }

    pub fn no_answer() -> Self {
        Self::new(ErrorKind::NoAnswer, "No valid DNS response")
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unknown, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Shorthand for `self.kind().status_code()`.
    pub fn status_code(&self) -> StatusCode {
        self.kind.status_code()
    }
}
