//! Command dispatch: bridges CLI args -> API calls -> output formatting.

pub mod config_cmd;
pub mod events;
pub mod health;
pub mod request;
pub mod stats;
pub mod util;

use natsdash_api::ApiClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a backend-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &ApiClient,
    global: &GlobalOpts,
    locale: &str,
) -> Result<(), CliError> {
    match cmd {
        Command::Stats(args) => stats::handle(client, args, global, locale).await,
        Command::Publish(args) => events::handle(client, args, global).await,
        Command::Health => health::handle(client, global, locale).await,
        Command::Request(args) => request::handle(client, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
