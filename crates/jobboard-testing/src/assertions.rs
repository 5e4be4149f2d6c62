//! Assertions over `jobboard --format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

fn postings(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["postings"]
        .as_array()
        .context("Expected 'content.postings' array in JSON")
}

/// Assert that JSON output contains the expected number of visible postings.
pub fn assert_posting_count(json: &Value, expected: usize) -> Result<()> {
    let postings = postings(json)?;
    if postings.len() != expected {
        anyhow::bail!("Expected {} postings, got {}", expected, postings.len());
    }
    Ok(())
}

/// Assert the visible postings' ids, in order.
pub fn assert_posting_ids(json: &Value, expected: &[&str]) -> Result<()> {
    let ids = posting_ids(json)?;
    if ids != expected {
        anyhow::bail!("Expected postings {:?}, got {:?}", expected, ids);
    }
    Ok(())
}

pub fn posting_ids(json: &Value) -> Result<Vec<String>> {
    postings(json)?
        .iter()
        .enumerate()
        .map(|(i, p)| {
            p["id"]
                .as_str()
                .map(String::from)
                .with_context(|| format!("Posting {} missing id", i))
        })
        .collect()
}

/// Assert that all visible postings belong to the given department.
pub fn assert_all_in_department(json: &Value, department: &str) -> Result<()> {
    for (i, posting) in postings(json)?.iter().enumerate() {
        let actual = posting["department"].as_str();
        if actual != Some(department) {
            anyhow::bail!(
                "Posting {} is in {:?} but expected {}",
                i,
                actual,
                department
            );
        }
    }
    Ok(())
}

/// Assert the facet labels of `departments --format json`, in order.
pub fn assert_facet_labels(json: &Value, expected: &[&str]) -> Result<()> {
    let labels: Vec<&str> = json["content"]["facets"]
        .as_array()
        .context("Expected 'content.facets' array in JSON")?
        .iter()
        .filter_map(|f| f["label"].as_str())
        .collect();
    if labels != expected {
        anyhow::bail!("Expected facets {:?}, got {:?}", expected, labels);
    }
    Ok(())
}
