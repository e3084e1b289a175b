use std::time::Duration;

use anyhow::Context as _;
use serde::Deserialize;
use url::Url;

/// Volume metadata reduced to the fields the enricher keeps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolumeMetadata {
    pub title: Option<String>,
    pub authors: Vec<String>,
    pub categories: Vec<String>,
    pub thumbnail: Option<String>,
}

/// External catalog lookup, keyed by canonical identifier.
///
/// `Ok(None)` means the catalog has no matching volume; `Err` means a
/// transport failure, a non-success status, or a malformed payload.
#[async_trait::async_trait]
pub trait CatalogLookup: Send + Sync {
    async fn lookup(&self, isbn: &str) -> anyhow::Result<Option<VolumeMetadata>>;
}

#[derive(Debug, Deserialize)]
struct VolumesResponse {
    items: Option<Vec<Volume>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Volume {
    volume_info: Option<VolumeInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
    categories: Option<Vec<String>>,
    image_links: Option<ImageLinks>,
}

#[derive(Debug, Deserialize)]
struct ImageLinks {
    thumbnail: Option<String>,
}

/// Google Books volumes API client.
pub struct GoogleBooksCatalog {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleBooksCatalog {
    /// Builds a client for `endpoint` (must be http/https) with a bounded
    /// per-request timeout.
    pub fn with_endpoint(endpoint: &str, timeout: Duration) -> anyhow::Result<Self> {
        let endpoint_url = Url::parse(endpoint).context("parse catalog endpoint")?;
        if endpoint_url.scheme() != "http" && endpoint_url.scheme() != "https" {
            anyhow::bail!("catalog endpoint must be http/https: {endpoint_url}");
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("build catalog http client")?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_owned(),
        })
    }
}

#[async_trait::async_trait]
impl CatalogLookup for GoogleBooksCatalog {
    async fn lookup(&self, isbn: &str) -> anyhow::Result<Option<VolumeMetadata>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", format!("isbn:{isbn}"))])
            .send()
            .await
            .with_context(|| format!("GET {}", self.endpoint))?;

        let status = response.status();
        let raw = response.text().await.context("read catalog response body")?;
        if !status.is_success() {
            anyhow::bail!("catalog error ({status}): {}", summarize_body(&raw));
        }

        let parsed: VolumesResponse =
            serde_json::from_str(&raw).context("parse catalog response")?;
        let Some(items) = parsed.items else {
            return Ok(None);
        };
        let Some(volume) = items.into_iter().next() else {
            return Ok(None);
        };
        let info = volume.volume_info.unwrap_or_default();

        Ok(Some(VolumeMetadata {
            title: info.title,
            authors: info.authors.unwrap_or_default(),
            categories: info.categories.unwrap_or_default(),
            thumbnail: info.image_links.and_then(|links| links.thumbnail),
        }))
    }
}

fn summarize_body(raw: &str) -> String {
    if let Some(message) = parse_error_message(raw) {
        return message;
    }

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "empty response body".to_owned();
    }
    trimmed.chars().take(200).collect()
}

fn parse_error_message(raw_json: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(raw_json).ok()?;
    let message = value.get("error")?.get("message")?.as_str()?.to_owned();
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_with_items_maps_volume_info() -> anyhow::Result<()> {
        let raw = r#"{
            "totalItems": 1,
            "items": [{
                "volumeInfo": {
                    "title": "Dune",
                    "authors": ["Frank Herbert"],
                    "categories": ["Fiction"],
                    "imageLinks": {"thumbnail": "http://example.com/dune.jpg"}
                }
            }]
        }"#;

        let parsed: VolumesResponse = serde_json::from_str(raw)?;
        let volume = parsed.items.unwrap().into_iter().next().unwrap();
        let info = volume.volume_info.unwrap();
        assert_eq!(info.title.as_deref(), Some("Dune"));
        assert_eq!(info.authors.unwrap(), vec!["Frank Herbert"]);
        assert_eq!(info.categories.unwrap(), vec!["Fiction"]);
        assert_eq!(
            info.image_links.unwrap().thumbnail.as_deref(),
            Some("http://example.com/dune.jpg")
        );

        Ok(())
    }

    #[test]
    fn response_without_items_parses() -> anyhow::Result<()> {
        let parsed: VolumesResponse = serde_json::from_str(r#"{"totalItems": 0}"#)?;
        assert!(parsed.items.is_none());
        Ok(())
    }

    #[test]
    fn error_body_message_is_extracted() {
        let raw = r#"{"error": {"code": 429, "message": "rate limit exceeded"}}"#;
        assert_eq!(summarize_body(raw), "rate limit exceeded");
        assert_eq!(summarize_body("  "), "empty response body");
        assert_eq!(summarize_body("oops"), "oops");
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let result = GoogleBooksCatalog::with_endpoint("ftp://catalog", Duration::from_secs(1));
        assert!(result.is_err());
    }
}
