//! Issue roulette CLI entry point.

use clap::Parser;

use issue_roulette::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = issue_roulette::cli::execute(cli).await {
        issue_roulette::cli::handle_error(&err, json);
    }
}
