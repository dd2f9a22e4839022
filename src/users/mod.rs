//! Resource client for the `users` collection.
//!
//! Each operation is a single request/response exchange: no retries, no
//! caching, no body parsing. The response comes back exactly as `reqwest`
//! produced it, whatever its status.

pub mod endpoint;
pub mod error;
pub mod id;

pub use self::endpoint::Endpoint;
pub use self::error::{EndpointError, Error, IdError, TransportError};
pub use self::id::UserId;

use reqwest::{Client, Method, Response};
use tracing::{debug, info_span, Instrument};
use url::Url;

/// Development default; production deployments pass their own base.
pub const DEFAULT_BASE_ENDPOINT: &str = "http://localhost:8080/users";

#[derive(Debug, Clone)]
pub struct UsersClient {
    client: Client,
    endpoint: Endpoint,
}

impl UsersClient {
    /// Build a client with its own connection pool.
    /// # Errors
    /// Returns an error if `base` is not a valid http(s) URL or the HTTP client cannot be built.
    pub fn new(user_agent: &str, base: &str) -> Result<Self, Error> {
        Self::from_endpoint(user_agent, Endpoint::parse(base)?)
    }

    /// Same as [`UsersClient::new`] for an already validated endpoint.
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_endpoint(user_agent: &str, endpoint: Endpoint) -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(Error::Client)?;

        Ok(Self::with_client(client, endpoint))
    }

    /// Reuse a caller-owned `reqwest::Client` (shared pool, custom timeouts).
    #[must_use]
    pub const fn with_client(client: Client, endpoint: Endpoint) -> Self {
        Self { client, endpoint }
    }

    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// `GET {base}`
    /// # Errors
    /// Returns [`TransportError`] if the request could not be completed.
    pub async fn list_all(&self) -> Result<Response, TransportError> {
        let url = self.endpoint.collection();
        let span = info_span!("users.list_all", http.method = "GET", url = %url);

        self.send(Method::GET, url).instrument(span).await
    }

    /// `GET {base}/{id}`
    /// # Errors
    /// Returns [`TransportError`] if the request could not be completed.
    pub async fn get_by_id(&self, id: &UserId) -> Result<Response, TransportError> {
        let url = self.endpoint.member(id);
        let span = info_span!("users.get_by_id", http.method = "GET", url = %url);

        self.send(Method::GET, url).instrument(span).await
    }

    /// `DELETE {base}/delete/{id}`
    ///
    /// Repeating the call repeats the request; the client adds no idempotency.
    /// # Errors
    /// Returns [`TransportError`] if the request could not be completed.
    pub async fn remove(&self, id: &UserId) -> Result<Response, TransportError> {
        let url = self.endpoint.deletion(id);
        let span = info_span!("users.remove", http.method = "DELETE", url = %url);

        self.send(Method::DELETE, url).instrument(span).await
    }

    async fn send(&self, method: Method, url: Url) -> Result<Response, TransportError> {
        match self.client.request(method, url).send().await {
            Ok(response) => {
                debug!(status = %response.status(), "response received");
                Ok(response)
            }
            Err(e) => {
                debug!("transport error: {}", e);
                Err(TransportError::from(e))
            }
        }
    }
}
