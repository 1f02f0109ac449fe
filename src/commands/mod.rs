use crate::cli::{Cli, Command};

pub async fn dispatch(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Install(args) => install::run(args).await,
        Command::Preview(args) => preview::run(args).await,
        Command::Versions(args) => versions::run(args).await,
        Command::Status(args) => status::run(args).await,
        Command::List(args) => list::run(args).await,
    }
}

pub mod install;
pub mod list;
pub mod preview;
pub mod status;
pub mod versions;
