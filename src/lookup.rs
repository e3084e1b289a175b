use std::time::Duration;

use anyhow::Context as _;

use crate::catalog::GoogleBooksCatalog;
use crate::cli::LookupArgs;
use crate::enrich;

/// Enriches a single identifier and prints the record as pretty JSON.
/// Unlike `sync`, a failed lookup fails the process: there is no batch to
/// keep going for.
pub async fn run(args: LookupArgs) -> anyhow::Result<()> {
    let catalog =
        GoogleBooksCatalog::with_endpoint(&args.endpoint, Duration::from_secs(args.timeout_secs))
            .context("build catalog client")?;

    let record = enrich::enrich(&catalog, &args.isbn).await?;

    let json = serde_json::to_string_pretty(&record).context("serialize record")?;
    println!("{json}");

    Ok(())
}
