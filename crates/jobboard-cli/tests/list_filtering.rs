//! List & Filtering Tests
//!
//! Verifies `jobboard list` filtering and sorting against the sample postings
//! (seven active, one inactive).

use anyhow::Result;
use jobboard_testing::{TestWorld, assertions};

#[test]
fn test_list_shows_active_postings_in_fetch_order() -> Result<()> {
    let world = TestWorld::new().with_sample_postings();

    let json = world.run_json(&["list"])?;

    assertions::assert_posting_ids(
        &json,
        &["a0B001", "a0B002", "a0B003", "a0B004", "a0B005", "a0B006", "a0B008"],
    )?;
    assert_eq!(json["content"]["total_count"], 7);
    assert!(json["content"]["sort"].is_null());
    Ok(())
}

#[test]
fn test_list_carries_priority_classes() -> Result<()> {
    let world = TestWorld::new().with_sample_postings();

    let json = world.run_json(&["list"])?;
    let postings = json["content"]["postings"].as_array().unwrap();

    let class_of = |id: &str| {
        postings
            .iter()
            .find(|p| p["id"] == id)
            .and_then(|p| p["priority_class"].as_str())
            .map(String::from)
    };
    assert_eq!(class_of("a0B001").as_deref(), Some("high-priority"));
    assert_eq!(class_of("a0B004").as_deref(), Some("medium-priority"));
    assert_eq!(class_of("a0B003").as_deref(), Some("medium-priority"));
    assert_eq!(class_of("a0B002").as_deref(), Some("low-priority"));
    assert_eq!(class_of("a0B008").as_deref(), Some("low-priority"));
    Ok(())
}

#[test]
fn test_list_filter_by_department() -> Result<()> {
    let world = TestWorld::new().with_sample_postings();

    let json = world.run_json(&["list", "--department", "Engineering"])?;

    assertions::assert_all_in_department(&json, "Engineering")?;
    assertions::assert_posting_ids(&json, &["a0B001", "a0B005"])?;
    assert_eq!(json["content"]["filter"]["department"], "Engineering");
    Ok(())
}

#[test]
fn test_department_match_is_case_sensitive() -> Result<()> {
    let world = TestWorld::new().with_sample_postings();

    let json = world.run_json(&["list", "--department", "engineering"])?;

    assertions::assert_posting_count(&json, 0)?;
    Ok(())
}

#[test]
fn test_search_is_case_insensitive_across_fields() -> Result<()> {
    let world = TestWorld::new().with_sample_postings();

    // location
    let json = world.run_json(&["list", "--search", "NEW YORK"])?;
    assertions::assert_posting_ids(&json, &["a0B001", "a0B004"])?;

    // title and department both contain "engineer"
    let json = world.run_json(&["list", "--search", "engineer"])?;
    assertions::assert_posting_ids(&json, &["a0B001", "a0B005"])?;
    Ok(())
}

#[test]
fn test_department_and_search_combine() -> Result<()> {
    let world = TestWorld::new().with_sample_postings();

    let json = world.run_json(&["list", "--department", "Sales", "--search", "boston"])?;

    assertions::assert_posting_ids(&json, &["a0B002"])?;
    Ok(())
}

#[test]
fn test_sort_by_open_positions_descending() -> Result<()> {
    let world = TestWorld::new().with_sample_postings();

    let json = world.run_json(&["list", "--sort", "open-positions", "--direction", "desc"])?;

    assertions::assert_posting_ids(
        &json,
        &["a0B001", "a0B004", "a0B003", "a0B002", "a0B005", "a0B006", "a0B008"],
    )?;
    assert_eq!(json["content"]["sort"]["field"], "open-positions");
    assert_eq!(json["content"]["sort"]["direction"], "desc");
    Ok(())
}

#[test]
fn test_sort_by_title_ascending() -> Result<()> {
    let world = TestWorld::new().with_sample_postings();

    let json = world.run_json(&["list", "--sort", "title", "--direction", "asc"])?;

    assertions::assert_posting_ids(
        &json,
        &["a0B004", "a0B006", "a0B003", "a0B008", "a0B002", "a0B001", "a0B005"],
    )?;
    Ok(())
}

#[test]
fn test_missing_department_sorts_first_ascending() -> Result<()> {
    let world = TestWorld::new().with_sample_postings();

    let json = world.run_json(&["list", "--sort", "department", "--direction", "asc"])?;

    let ids = assertions::posting_ids(&json)?;
    assert_eq!(ids.first().map(String::as_str), Some("a0B006"));
    Ok(())
}

#[test]
fn test_sort_applies_to_filtered_list() -> Result<()> {
    let world = TestWorld::new().with_sample_postings();

    let json = world.run_json(&[
        "list",
        "--department",
        "Sales",
        "--sort",
        "posting-date",
        "--direction",
        "asc",
    ])?;

    assertions::assert_posting_ids(&json, &["a0B004", "a0B002"])?;
    Ok(())
}

#[test]
fn test_direction_alone_uses_configured_field() -> Result<()> {
    let world = TestWorld::new()
        .with_sample_postings()
        .with_config("[view]\nsort_field = \"open-positions\"\nsort_direction = \"desc\"\n");

    let json = world.run_json(&["list", "--direction", "asc"])?;

    let ids = assertions::posting_ids(&json)?;
    assert_eq!(ids.first().map(String::as_str), Some("a0B008"));
    assert_eq!(ids.last().map(String::as_str), Some("a0B001"));
    assert_eq!(json["content"]["sort"]["field"], "open-positions");
    Ok(())
}

#[test]
fn test_no_match_is_empty_success() -> Result<()> {
    let world = TestWorld::new().with_sample_postings();

    let result = world.run(&["--format", "json", "list", "--search", "astronaut"])?;

    assert!(result.success(), "An empty result is not an error");
    let json = result.json()?;
    assertions::assert_posting_count(&json, 0)?;
    assert_eq!(json["notice"]["reason"], "filters-exclude-all");
    assert_eq!(json["notice"]["message"], "No postings match \"astronaut\"");
    Ok(())
}

#[test]
fn test_empty_department_suggests_departments_command() -> Result<()> {
    let world = TestWorld::new().with_sample_postings();

    let result = world.run(&["list", "--department", "Legal"])?;

    assert!(result.success());
    assert!(result.stdout().contains("No postings in Legal"));
    assert!(result.stdout().contains("jobboard departments"));
    Ok(())
}

#[test]
fn test_json_export_reads_back_as_source() -> Result<()> {
    let world = TestWorld::new().with_sample_postings();
    let exported = world.run(&["--format", "json", "list", "--department", "Sales"])?;
    assert!(exported.success());

    let world = world.with_postings_json(exported.stdout());
    let json = world.run_json(&["list"])?;

    assertions::assert_posting_ids(&json, &["a0B002", "a0B004"])?;
    assert_eq!(json["content"]["postings"][1]["priority_class"], "medium-priority");
    Ok(())
}

#[test]
fn test_quiet_mode_prints_ids_only() -> Result<()> {
    let world = TestWorld::new().with_sample_postings();

    let result = world.run(&["list", "--department", "Sales", "--quiet"])?;

    assert!(result.success());
    assert_eq!(result.stdout(), "a0B002\na0B004\n");
    Ok(())
}

#[test]
fn test_plain_table_shows_column_headers() -> Result<()> {
    let world = TestWorld::new().with_sample_postings();

    let result = world.run(&["list"])?;

    assert!(result.success());
    for header in ["JOB TITLE", "DEPARTMENT", "LOCATION", "OPEN POSITIONS", "POSTING DATE"] {
        assert!(
            result.stdout().contains(header),
            "missing header {header}:\n{}",
            result.stdout()
        );
    }
    assert!(result.stdout().contains("Showing 7 of 7 postings"));
    Ok(())
}
