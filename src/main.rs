mod cli;
mod commands;
mod config;
mod env;
mod error;
mod forge;
mod output;
mod package;
mod path_ext;
mod repo;
mod sync;
mod vcs;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
