//! `libby` command line: `list`, `get <id>` and `delete <id>` against the users API.

pub mod actions;
pub mod commands;
pub mod dispatch;
pub mod telemetry;

mod start;
pub use self::start::start;
