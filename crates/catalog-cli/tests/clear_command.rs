use catalog_testing::{TestWorld, fixtures};
use predicates::prelude::*;

#[test]
fn test_clear_empty_catalog_does_not_prompt() {
    let world = TestWorld::new();

    let result = world.run(&["clear"]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("Catalog is already empty"));
    assert!(!result.stderr().contains("[y/N]"));
}

#[test]
fn test_clear_requires_confirmation() {
    let world = TestWorld::new().with_products(&fixtures::sample_products());

    let result = world.run_with_stdin(&["clear"], "no\n").unwrap();
    assert!(result.success());
    assert!(
        predicate::str::contains("Delete ALL products? This cannot be undone.")
            .eval(result.stderr())
    );
    assert_eq!(world.stored_products().unwrap().len(), 3);

    let result = world.run_with_stdin(&["clear"], "yes\n").unwrap();
    assert!(result.success());
    assert!(world.stored_products().unwrap().is_empty());
    assert!(world.stored_raw().unwrap().is_none());
}

#[test]
fn test_clear_json_output() {
    let world = TestWorld::new().with_products(&fixtures::sample_products());

    let result = world.run_json(&["clear", "--yes"]).unwrap();
    let json = result.json().unwrap();

    assert_eq!(json["content"]["status"], "removed");
    assert_eq!(json["content"]["removed"], 3);
    assert_eq!(json["badge"]["level"], "success");
}
