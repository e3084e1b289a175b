use crate::catalog::{CatalogLookup, VolumeMetadata};
use crate::formats::BookRecord;
use crate::{isbn, shelf};

/// Per-identifier enrichment failure. Neither variant aborts a batch: the
/// merge loop logs and moves on to the next candidate.
#[derive(Debug, thiserror::Error)]
pub enum EnrichError {
    #[error("no catalog match for {isbn}")]
    NotFound { isbn: String },
    #[error("catalog lookup failed for {isbn}: {cause}")]
    Fetch { isbn: String, cause: String },
}

/// Normalizes `raw_isbn`, queries the catalog, and maps the volume metadata
/// into a [`BookRecord`] whose identifier is the canonical input.
pub async fn enrich(
    catalog: &dyn CatalogLookup,
    raw_isbn: &str,
) -> Result<BookRecord, EnrichError> {
    let isbn = isbn::normalize(raw_isbn);
    if isbn.is_empty() {
        return Err(EnrichError::NotFound {
            isbn: raw_isbn.trim().to_owned(),
        });
    }

    let metadata = match catalog.lookup(&isbn).await {
        Ok(Some(metadata)) => metadata,
        Ok(None) => return Err(EnrichError::NotFound { isbn }),
        Err(err) => {
            return Err(EnrichError::Fetch {
                isbn,
                cause: format!("{err:#}"),
            });
        }
    };

    record_from_metadata(isbn, metadata)
}

fn record_from_metadata(
    isbn: String,
    metadata: VolumeMetadata,
) -> Result<BookRecord, EnrichError> {
    let title = non_blank(metadata.title).unwrap_or_else(|| "Unknown".to_owned());
    let author =
        non_blank(metadata.authors.into_iter().next()).unwrap_or_else(|| "Unknown".to_owned());
    let category =
        non_blank(metadata.categories.into_iter().next()).unwrap_or_else(|| "General".to_owned());
    let thumbnail = metadata.thumbnail.map(secure_url).unwrap_or_default();

    // Surname is the final whitespace-delimited token of the author string.
    let surname = author.split_whitespace().last().unwrap_or(author.as_str());
    let cutter = shelf::shelf_code(surname, &title).ok_or_else(|| EnrichError::Fetch {
        isbn: isbn.clone(),
        cause: "catalog metadata has blank author or title".to_owned(),
    })?;

    Ok(BookRecord {
        isbn,
        title,
        author,
        cutter,
        thumbnail,
        category,
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_owned())
}

fn secure_url(url: String) -> String {
    match url.strip_prefix("http://") {
        Some(rest) => format!("https://{rest}"),
        None => url,
    }
}
