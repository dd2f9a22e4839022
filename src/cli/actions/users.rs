use crate::users::{Endpoint, UserId, UsersClient};
use anyhow::{bail, Context, Result};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

#[derive(Debug)]
pub struct Args {
    pub endpoint: Endpoint,
    pub request: Request,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    List,
    Get { id: UserId },
    Delete { id: UserId },
}

impl Request {
    #[must_use]
    pub const fn method(&self) -> &'static str {
        match self {
            Self::List | Self::Get { .. } => "GET",
            Self::Delete { .. } => "DELETE",
        }
    }

    /// The URL this request is sent to under `endpoint`.
    #[must_use]
    pub fn url(&self, endpoint: &Endpoint) -> Url {
        match self {
            Self::List => endpoint.collection(),
            Self::Get { id } => endpoint.member(id),
            Self::Delete { id } => endpoint.deletion(id),
        }
    }
}

/// What came back from the server, body already read.
#[derive(Debug)]
pub struct Outcome {
    pub status: StatusCode,
    pub body: String,
}

/// Issue `request` through `client` and read the whole body.
/// # Errors
/// Returns an error if the exchange fails or the body cannot be read.
pub async fn send(client: &UsersClient, request: &Request) -> Result<Outcome> {
    let response = match request {
        Request::List => client.list_all().await,
        Request::Get { id } => client.get_by_id(id).await,
        Request::Delete { id } => client.remove(id).await,
    }
    .with_context(|| {
        format!(
            "{} request to {} failed",
            request.method(),
            request.url(client.endpoint())
        )
    })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .context("failed to read response body")?;

    debug!(%status, bytes = body.len(), "response body read");

    Ok(Outcome { status, body })
}

/// Pretty-print JSON bodies, leave anything else as sent.
#[must_use]
pub fn render(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| body.to_string())
}

/// Execute the users action: one request, body to stdout.
/// # Errors
/// Returns an error if the request fails or the server answers with a non-success status.
pub async fn execute(args: Args) -> Result<()> {
    let url = args.request.url(&args.endpoint);
    info!(
        "{} {} ({})",
        args.request.method(),
        url,
        crate::APP_USER_AGENT
    );

    let client = UsersClient::from_endpoint(crate::APP_USER_AGENT, args.endpoint.clone())?;
    let outcome = send(&client, &args.request).await?;

    let rendered = render(&outcome.body);
    if !rendered.is_empty() {
        println!("{rendered}");
    }

    if !outcome.status.is_success() {
        bail!("{} {} - {}", args.request.method(), url, outcome.status);
    }

    Ok(())
}
