//! Loads the shared sample file through the JSON source.

use jobboard_providers::{Error, JsonFileSource, PostingSource};
use jobboard_types::PostingId;
use std::path::PathBuf;

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/samples/postings.json")
}

#[tokio::test]
async fn test_sample_lists_only_active_postings() -> anyhow::Result<()> {
    let source = JsonFileSource::new(sample_path());
    let postings = source.list_postings().await?;

    assert_eq!(postings.len(), 7);
    assert!(postings.iter().all(|p| p.active));
    assert!(postings.iter().all(|p| p.id.as_str() != "a0B007"));
    Ok(())
}

#[tokio::test]
async fn test_sample_preserves_file_order() -> anyhow::Result<()> {
    let source = JsonFileSource::new(sample_path());
    let ids: Vec<String> = source
        .list_postings()
        .await?
        .into_iter()
        .map(|p| p.id.to_string())
        .collect();

    assert_eq!(
        ids,
        vec!["a0B001", "a0B002", "a0B003", "a0B004", "a0B005", "a0B006", "a0B008"]
    );
    Ok(())
}

#[tokio::test]
async fn test_sample_detail_carries_description() -> anyhow::Result<()> {
    let source = JsonFileSource::new(sample_path());
    let detail = source.get_detail(&PostingId::new("a0B003")).await?;

    assert_eq!(detail.title.as_deref(), Some("Product Designer"));
    assert_eq!(
        detail.description.as_deref(),
        Some("Design the candidate-facing application flow.")
    );
    Ok(())
}

#[tokio::test]
async fn test_sample_posting_without_department() -> anyhow::Result<()> {
    let source = JsonFileSource::new(sample_path());
    let detail = source.get_detail(&PostingId::new("a0B006")).await?;
    assert_eq!(detail.department, None);
    Ok(())
}

#[tokio::test]
async fn test_sample_unknown_id() {
    let source = JsonFileSource::new(sample_path());
    let result = source.get_detail(&PostingId::new("zzz")).await;
    assert!(matches!(result, Err(Error::NotFound(_))));
}
