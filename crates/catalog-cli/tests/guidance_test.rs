use assert_cmd::cargo::cargo_bin_cmd;
use catalog_testing::{TestWorld, fixtures};
use predicates::prelude::*;

#[test]
fn test_no_subcommand_prints_guidance() {
    let world = TestWorld::new();

    let mut cmd = cargo_bin_cmd!("catalog");
    world.configure_command(&mut cmd);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No catalog yet."))
        .stdout(predicate::str::contains("catalog add --name <NAME> --price <PRICE>"));

    assert!(!world.database_path().exists());
}

#[test]
fn test_guidance_counts_products() {
    let world = TestWorld::new().with_products(&fixtures::sample_products());

    let result = world.run(&[]).unwrap();

    assert!(result.success());
    assert!(result.stdout().contains("Products: 3"));
    assert!(result.stdout().contains("catalog list"));
}

#[test]
fn test_catalog_path_env_selects_data_dir() {
    let world = TestWorld::new();
    let other = world.temp_dir().join("elsewhere");

    let mut cmd = cargo_bin_cmd!("catalog");
    cmd.env("CATALOG_PATH", &other)
        .args(["add", "--name", "Mug", "--price", "1"]);
    cmd.assert().success();

    assert!(other.join("catalog.db").exists());
}

#[test]
fn test_ui_requires_terminal() {
    let world = TestWorld::new();

    let result = world.run(&["ui"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("needs an interactive terminal"));
}
