use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;

use crate::catalog::GoogleBooksCatalog;
use crate::cli::SyncArgs;
use crate::{library, merge};

/// Reads the identifier list, merges new identifiers into the persisted
/// collection, and rewrites the collection file once at the end.
///
/// A missing input list is fatal and aborts before any fetching. Individual
/// lookup failures are absorbed inside the merge.
pub async fn run(args: SyncArgs) -> anyhow::Result<()> {
    let input_path = PathBuf::from(&args.input);
    let library_path = PathBuf::from(&args.library);

    let candidates = read_identifier_list(&input_path)
        .with_context(|| format!("read identifier list: {}", input_path.display()))?;

    let mut records = library::load(&library_path).context("load library")?;
    let existing = records.len();

    let catalog =
        GoogleBooksCatalog::with_endpoint(&args.endpoint, Duration::from_secs(args.timeout_secs))
            .context("build catalog client")?;

    let stats = merge::merge_new(&catalog, &mut records, &candidates).await;

    library::save(&library_path, &records).context("save library")?;

    tracing::info!(
        existing,
        added = stats.added,
        skipped_existing = stats.skipped_existing,
        not_found = stats.not_found,
        failed = stats.failed,
        library = %library_path.display(),
        "sync complete"
    );

    Ok(())
}

fn read_identifier_list(path: &Path) -> anyhow::Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)?;
    let candidates = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();
    Ok(candidates)
}
