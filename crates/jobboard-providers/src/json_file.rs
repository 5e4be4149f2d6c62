use futures::future::{BoxFuture, FutureExt};
use jobboard_types::{Posting, PostingId};
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::traits::PostingSource;
use crate::{Error, Result};

/// Reads postings from a JSON file on every call.
///
/// Accepted shapes:
/// - a bare array of postings
/// - an object with a `postings` or `records` array (platform query dumps)
/// - `{"content": {"postings": [...]}}`, as written by `jobboard --format json list`
///
/// Records are decoded one at a time so a bad record is reported by position
/// and id instead of failing the whole file with a generic shape error.
pub struct JsonFileSource {
    path: PathBuf,
}

/// Locate the posting array inside a parsed file
fn posting_array(value: Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(records) => Some(records),
        Value::Object(mut object) => {
            let records = object
                .remove("postings")
                .or_else(|| object.remove("records"))
                .or_else(|| {
                    object
                        .remove("content")
                        .and_then(|mut content| content.get_mut("postings").map(Value::take))
                })?;
            match records {
                Value::Array(records) => Some(records),
                _ => None,
            }
        }
        _ => None,
    }
}

fn decode_record(index: usize, record: Value) -> Result<Posting> {
    let id = record
        .get("id")
        .or_else(|| record.get("Id"))
        .and_then(Value::as_str)
        .map(String::from);
    Posting::deserialize(record).map_err(|source| Error::InvalidRecord { index, id, source })
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<Posting>> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Err(Error::SourceMissing(self.path.clone()));
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        let value: Value = serde_json::from_str(&content)?;
        let postings = posting_array(value)
            .ok_or_else(|| Error::UnrecognizedShape(self.path.clone()))?
            .into_iter()
            .enumerate()
            .map(|(index, record)| decode_record(index, record))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            path = %self.path.display(),
            count = postings.len(),
            "loaded postings"
        );

        Ok(postings)
    }
}

impl PostingSource for JsonFileSource {
    fn id(&self) -> &'static str {
        "json-file"
    }

    fn list_postings(&self) -> BoxFuture<'_, Result<Vec<Posting>>> {
        async move {
            let postings = self.read_all().await?;
            Ok(postings.into_iter().filter(|p| p.active).collect())
        }
        .boxed()
    }

    fn get_detail<'a>(&'a self, id: &'a PostingId) -> BoxFuture<'a, Result<Posting>> {
        async move {
            self.read_all()
                .await?
                .into_iter()
                .find(|p| &p.id == id)
                .ok_or_else(|| Error::NotFound(id.clone()))
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_bare_array() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = write(
            &dir,
            "postings.json",
            r#"[{"id": "1", "title": "Engineer"}, {"id": "2", "title": "Analyst"}]"#,
        );

        let source = JsonFileSource::new(path);
        let postings = source.list_postings().await?;
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].title.as_deref(), Some("Engineer"));
        Ok(())
    }

    #[tokio::test]
    async fn test_wrapped_records() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = write(
            &dir,
            "export.json",
            r#"{"records": [{"Id": "a01", "Job_Title__c": "Engineer"}]}"#,
        );

        let source = JsonFileSource::new(path);
        let postings = source.list_postings().await?;
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].id.as_str(), "a01");
        Ok(())
    }

    #[tokio::test]
    async fn test_list_skips_inactive_but_detail_finds_them() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = write(
            &dir,
            "postings.json",
            r#"[{"id": "1", "active": false}, {"id": "2"}]"#,
        );

        let source = JsonFileSource::new(path);
        let postings = source.list_postings().await?;
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].id.as_str(), "2");

        let detail = source.get_detail(&PostingId::new("1")).await?;
        assert!(!detail.active);
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_file() {
        let source = JsonFileSource::new("/nonexistent/postings.json");
        let err = source.list_postings().await.unwrap_err();
        assert!(matches!(err, Error::SourceMissing(_)));
    }

    #[tokio::test]
    async fn test_unknown_detail_id() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = write(&dir, "postings.json", r#"[{"id": "1"}]"#);

        let source = JsonFileSource::new(path);
        let err = source
            .get_detail(&PostingId::new("404"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(ref id) if id.as_str() == "404"));
        Ok(())
    }

    #[tokio::test]
    async fn test_whole_decimal_counts_from_platform_export() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = write(
            &dir,
            "export.json",
            r#"{"records": [
                {"Id": "a01", "Job_Title__c": "Engineer", "Total_Open_Positions__c": 12.0},
                {"Id": "a02", "Job_Title__c": "Analyst", "Total_Open_Positions__c": 3}
            ]}"#,
        );

        let source = JsonFileSource::new(path);
        let postings = source.list_postings().await?;
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].open_positions, Some(12));
        assert_eq!(postings[1].open_positions, Some(3));
        Ok(())
    }

    #[tokio::test]
    async fn test_bad_record_is_named() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = write(
            &dir,
            "postings.json",
            r#"[{"id": "ok"}, {"id": "a0B9", "open_positions": "many"}]"#,
        );

        let source = JsonFileSource::new(path);
        let err = source.list_postings().await.unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidRecord { index: 1, ref id, .. } if id.as_deref() == Some("a0B9")
        ));
        assert!(err.to_string().starts_with("Invalid posting #1 (a0B9):"));
        Ok(())
    }

    #[tokio::test]
    async fn test_cli_json_export_is_readable() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = write(
            &dir,
            "list.json",
            r#"{"content": {
                "postings": [{
                    "id": "a0B001",
                    "title": "Senior Software Engineer",
                    "department": "Engineering",
                    "location": null,
                    "open_positions": 12,
                    "posting_date": "2024-03-01",
                    "priority_class": "high-priority"
                }],
                "total_count": 1,
                "filter": {"department": null, "search": null},
                "sort": null
            }}"#,
        );

        let source = JsonFileSource::new(path);
        let postings = source.list_postings().await?;
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].id.as_str(), "a0B001");
        assert_eq!(postings[0].location, None);
        assert_eq!(postings[0].open_positions, Some(12));
        Ok(())
    }

    #[tokio::test]
    async fn test_object_without_postings_is_unrecognized() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = write(&dir, "postings.json", r#"{"content": {"facets": []}}"#);

        let source = JsonFileSource::new(path);
        let err = source.list_postings().await.unwrap_err();
        assert!(matches!(err, Error::UnrecognizedShape(_)));
        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_json() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let path = write(&dir, "postings.json", "{ not json");

        let source = JsonFileSource::new(path);
        let err = source.list_postings().await.unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        Ok(())
    }
}
