use std::path::Path;

use anyhow::Context as _;

use crate::formats::BookRecord;

/// Loads the persisted collection. An absent file is an empty collection;
/// an unreadable or malformed file is an error.
pub fn load(path: &Path) -> anyhow::Result<Vec<BookRecord>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read library: {}", path.display()))?;
    let records: Vec<BookRecord> =
        serde_json::from_str(&raw).with_context(|| format!("parse library: {}", path.display()))?;
    Ok(records)
}

/// Rewrites the whole collection file as a pretty-printed JSON array.
/// Callers write once, after a run has processed every candidate.
pub fn save(path: &Path, records: &[BookRecord]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create library parent dir: {}", parent.display()))?;
    }

    let mut json = serde_json::to_string_pretty(records).context("serialize library")?;
    json.push('\n');
    std::fs::write(path, json).with_context(|| format!("write library: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_file_is_empty_collection() -> anyhow::Result<()> {
        let temp = tempfile::TempDir::new()?;
        let records = load(&temp.path().join("library.json"))?;
        assert!(records.is_empty());
        Ok(())
    }

    #[test]
    fn save_then_load_round_trips() -> anyhow::Result<()> {
        let temp = tempfile::TempDir::new()?;
        let path = temp.path().join("library.json");

        let records = vec![
            BookRecord {
                isbn: "9780134685991".to_owned(),
                title: "Effective Java".to_owned(),
                author: "Joshua Bloch".to_owned(),
                cutter: "B250e".to_owned(),
                thumbnail: "https://books.example.com/ej.jpg".to_owned(),
                category: "Computers".to_owned(),
            },
            BookRecord {
                isbn: "9780307474278".to_owned(),
                title: "Unknown".to_owned(),
                author: "Unknown".to_owned(),
                cutter: "U250u".to_owned(),
                thumbnail: String::new(),
                category: "General".to_owned(),
            },
        ];

        save(&path, &records)?;
        assert_eq!(load(&path)?, records);

        Ok(())
    }

    #[test]
    fn malformed_file_is_an_error() -> anyhow::Result<()> {
        let temp = tempfile::TempDir::new()?;
        let path = temp.path().join("library.json");
        std::fs::write(&path, "not json")?;
        assert!(load(&path).is_err());
        Ok(())
    }
}
