//! # Libby (users API client)
//!
//! `libby` talks to the Let's Book It `users` resource. The library half is a
//! thin, stateless façade over `reqwest`: it turns three logical operations
//! into HTTP requests and hands the raw response back to the caller.
//!
//! | Operation | Request |
//! |---|---|
//! | [`users::UsersClient::list_all`] | `GET {base}` |
//! | [`users::UsersClient::get_by_id`] | `GET {base}/{id}` |
//! | [`users::UsersClient::remove`] | `DELETE {base}/delete/{id}` |
//!
//! The delete path keeps its `/delete/{id}` shape because that is what the
//! server routes. Identifiers are percent-encoded as a single path segment.
//!
//! Nothing is retried, cached or parsed. Transport failures surface as
//! [`users::TransportError`]; a non-2xx status is still a successful exchange
//! and is returned as-is.
//!
//! The `libby` binary (see [`cli`]) builds one client at startup and drives
//! these operations from the command line.

pub mod cli;
pub mod users;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
