mod catalog;
mod cli;
mod commands;
mod config;
mod draft;
mod env;
mod error;
mod http;
mod logging;
mod output;
mod store;
mod tui;

use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    logging::init(cli.global.verbose);

    if let Err(err) = commands::dispatch(cli).await {
        eprintln!("{}", output::error_line(&err));
        std::process::exit(1);
    }
}
