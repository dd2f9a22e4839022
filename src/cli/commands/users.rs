use crate::users::{UserId, DEFAULT_BASE_ENDPOINT};
use clap::{Arg, ArgMatches, Command};

pub const ARG_URL: &str = "url";
pub const ARG_ID: &str = "id";

pub const CMD_LIST: &str = "list";
pub const CMD_GET: &str = "get";
pub const CMD_DELETE: &str = "delete";

#[derive(Debug, Clone)]
pub struct Options {
    pub url: String,
}

impl Options {
    /// Parse users API arguments from matches.
    ///
    /// # Errors
    /// Returns an error if the base URL is missing or blank.
    pub fn parse(matches: &ArgMatches) -> anyhow::Result<Self> {
        let url = match matches.get_one::<String>(ARG_URL).cloned() {
            Some(value) if !value.trim().is_empty() => value,
            _ => anyhow::bail!("missing required argument: --{ARG_URL}"),
        };

        Ok(Self { url })
    }
}

fn id_arg() -> Arg {
    Arg::new(ARG_ID)
        .help("User identifier, sent as a single path segment")
        .required(true)
        .value_parser(|raw: &str| raw.parse::<UserId>())
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_URL)
                .short('u')
                .long(ARG_URL)
                .help("Base URL of the users collection")
                .default_value(DEFAULT_BASE_ENDPOINT)
                .env("LIBBY_USERS_URL")
                .global(true),
        )
        .subcommand(Command::new(CMD_LIST).about("List all users (GET {url})"))
        .subcommand(
            Command::new(CMD_GET)
                .about("Fetch one user (GET {url}/{id})")
                .arg(id_arg()),
        )
        .subcommand(
            Command::new(CMD_DELETE)
                .about("Delete one user (DELETE {url}/delete/{id})")
                .arg(id_arg()),
        )
}
