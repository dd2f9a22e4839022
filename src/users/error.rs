use thiserror::Error;

/// Reasons a base endpoint is rejected.
#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("base endpoint is empty")]
    Empty,
    #[error("invalid base endpoint: {0}")]
    Parse(#[from] url::ParseError),
    #[error("unsupported scheme {0}, expected http or https")]
    UnsupportedScheme(String),
    #[error("base endpoint has no host")]
    MissingHost,
    #[error("base endpoint cannot carry path segments")]
    CannotBeABase,
}

/// Reasons a value cannot be used as a [`super::UserId`].
#[derive(Debug, Error)]
pub enum IdError {
    #[error("user id {0:?} is a dot segment and cannot be addressed")]
    DotSegment(String),
}

/// Errors raised while building a [`super::UsersClient`].
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Endpoint(#[from] EndpointError),
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// The only failure an operation reports: the exchange with the server did
/// not complete. The underlying `reqwest` error is kept untouched.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct TransportError(#[from] reqwest::Error);

impl TransportError {
    #[must_use]
    pub fn is_connect(&self) -> bool {
        self.0.is_connect()
    }

    #[must_use]
    pub fn is_timeout(&self) -> bool {
        self.0.is_timeout()
    }

    /// Status code, when the transport attached one to the error.
    #[must_use]
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        self.0.status()
    }

    #[must_use]
    pub fn into_inner(self) -> reqwest::Error {
        self.0
    }
}
