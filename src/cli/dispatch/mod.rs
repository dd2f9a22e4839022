//! Maps parsed CLI arguments to an [`Action`].
//!
//! The base URL is validated here so a malformed `LIBBY_USERS_URL` fails
//! before any network work starts.

use crate::cli::actions::{
    users::{Args, Request},
    Action,
};
use crate::cli::commands::users::{self, ARG_ID, CMD_DELETE, CMD_GET, CMD_LIST};
use crate::users::{Endpoint, UserId};
use anyhow::{bail, Context, Result};

fn id(matches: &clap::ArgMatches) -> Result<UserId> {
    matches
        .get_one::<UserId>(ARG_ID)
        .cloned()
        .context("missing required argument: <id>")
}

/// # Errors
/// Returns an error if the base URL is invalid or no known subcommand was given.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let options = users::Options::parse(matches)?;
    let endpoint = Endpoint::parse(&options.url).context("invalid LIBBY_USERS_URL")?;

    let request = match matches.subcommand() {
        Some((CMD_LIST, _)) => Request::List,
        Some((CMD_GET, sub)) => Request::Get { id: id(sub)? },
        Some((CMD_DELETE, sub)) => Request::Delete { id: id(sub)? },
        Some((other, _)) => bail!("unknown command: {other}"),
        None => bail!("missing command: expected {CMD_LIST}, {CMD_GET} or {CMD_DELETE}"),
    };

    Ok(Action::Users(Args { endpoint, request }))
}
