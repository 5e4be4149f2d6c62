//! Department facet tests

use anyhow::Result;
use jobboard_testing::{TestWorld, assertions};

#[test]
fn test_departments_lists_all_first_then_first_seen_order() -> Result<()> {
    let world = TestWorld::new().with_sample_postings();

    let json = world.run_json(&["departments"])?;

    // a0B006 has no department and inactive a0B007 is not in the list feed
    assertions::assert_facet_labels(
        &json,
        &["All Departments", "Engineering", "Sales", "Design", "People"],
    )?;
    Ok(())
}

#[test]
fn test_department_counts() -> Result<()> {
    let world = TestWorld::new().with_sample_postings();

    let json = world.run_json(&["departments"])?;
    let facets = json["content"]["facets"].as_array().unwrap();

    assert_eq!(facets[0]["value"], "");
    assert_eq!(facets[0]["count"], 7);
    assert_eq!(facets[1]["count"], 2);
    assert_eq!(facets[2]["count"], 2);
    assert_eq!(facets[3]["count"], 1);
    Ok(())
}

#[test]
fn test_empty_source_has_only_all_departments() -> Result<()> {
    let world = TestWorld::new().with_postings_json("[]");

    let json = world.run_json(&["departments"])?;

    assertions::assert_facet_labels(&json, &["All Departments"])?;
    Ok(())
}

#[test]
fn test_departments_quiet_prints_labels() -> Result<()> {
    let world = TestWorld::new().with_sample_postings();

    let result = world.run(&["departments", "--quiet"])?;

    assert!(result.success());
    let lines: Vec<&str> = result.stdout().lines().collect();
    assert_eq!(lines.first(), Some(&"All Departments"));
    assert!(lines.contains(&"People"));
    Ok(())
}
