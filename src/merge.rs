use std::collections::HashSet;

use crate::catalog::CatalogLookup;
use crate::enrich::{self, EnrichError};
use crate::formats::BookRecord;
use crate::isbn;

/// Outcome counts for one merge run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeStats {
    pub added: usize,
    pub skipped_existing: usize,
    pub not_found: usize,
    pub failed: usize,
}

/// Appends records for genuinely new candidate identifiers to `records`.
///
/// Candidates are enriched one at a time, in list order, so new records land
/// in candidate order after the untouched existing ones. Identifiers already
/// present (compared by canonical form) are skipped without a catalog call,
/// as are in-batch duplicates. Per-identifier failures are logged and
/// skipped; they never abort the batch. Re-running with the same inputs and
/// stable catalog responses adds nothing.
pub async fn merge_new(
    catalog: &dyn CatalogLookup,
    records: &mut Vec<BookRecord>,
    candidates: &[String],
) -> MergeStats {
    // Re-normalize persisted identifiers in case older data predates the
    // current normalization.
    let mut seen: HashSet<String> = records
        .iter()
        .map(|record| isbn::normalize(&record.isbn))
        .collect();

    let mut stats = MergeStats::default();

    for raw in candidates {
        let canonical = isbn::normalize(raw);
        if seen.contains(&canonical) {
            tracing::debug!(isbn = %canonical, "already in collection; skipping");
            stats.skipped_existing += 1;
            continue;
        }

        match enrich::enrich(catalog, raw).await {
            Ok(record) => {
                tracing::info!(
                    isbn = %record.isbn,
                    cutter = %record.cutter,
                    title = %record.title,
                    "added to collection"
                );
                seen.insert(record.isbn.clone());
                records.push(record);
                stats.added += 1;
            }
            Err(EnrichError::NotFound { isbn }) => {
                tracing::info!(isbn = %isbn, "no catalog match; skipping");
                stats.not_found += 1;
            }
            Err(err @ EnrichError::Fetch { .. }) => {
                tracing::warn!("{err}");
                stats.failed += 1;
            }
        }
    }

    stats
}
