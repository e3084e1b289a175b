use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    shelfmark::logging::init().context("init logging")?;

    let cli = shelfmark::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        shelfmark::cli::Command::Sync(args) => {
            shelfmark::sync::run(args).await.context("sync")?;
        }
        shelfmark::cli::Command::Lookup(args) => {
            shelfmark::lookup::run(args).await.context("lookup")?;
        }
    }

    Ok(())
}
