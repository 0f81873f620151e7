#![allow(clippy::unwrap_used, clippy::expect_used)]

use clap::Parser;
use docgen::cli::{run, Cli};
use std::fs;
use std::path::Path;

const OPERATIONS: &str = r#"
- requestType: Widget
  verbs: [GET, POST]
  routeTemplates: ["/widgets/{id}"]
  contentTypes: [application/json]
  properties:
    - name: id
      typeName: i32
      required: true
    - name: name
      typeName: String
"#;

const CONFIG: &str = r#"
title = "Widget API"
api_version = "1.0"
api_base_url = "https://api.example.com"
contact = "api@example.com"
description = "Widgets over HTTP"

[fallback]
default_status_codes = [429]
"#;

const OVERRIDES: &str = r#"
Widget:
  title: Widgets
  category: Inventory
  tags: [Store]
"#;

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

fn run_args(args: &[&str]) -> anyhow::Result<()> {
    run(Cli::try_parse_from(args.iter().copied()).unwrap())
}

#[test]
fn test_generate_writes_documentation_json() {
    let dir = tempfile::tempdir().unwrap();
    let ops = write(dir.path(), "ops.yaml", OPERATIONS);
    let config = write(dir.path(), "docgen.toml", CONFIG);
    let overrides = write(dir.path(), "specs.yaml", OVERRIDES);
    let output = dir.path().join("api.json");

    run_args(&[
        "docgen",
        "generate",
        "--operations",
        &ops,
        "--config",
        &config,
        "--overrides",
        &overrides,
        "--output",
        &output.to_string_lossy(),
    ])
    .unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["title"], "Widget API");
    assert_eq!(value["resources"][0]["title"], "Widgets");
    assert_eq!(value["resources"][0]["category"], "Inventory");
    assert_eq!(value["resources"][0]["statusCodes"]["GET"][0]["code"], 429);
}

#[test]
fn test_generate_filter_flags_narrow_the_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let ops = write(dir.path(), "ops.yaml", OPERATIONS);
    let config = write(dir.path(), "docgen.toml", CONFIG);
    let overrides = write(dir.path(), "specs.yaml", OVERRIDES);
    let output = dir.path().join("api.json");

    run_args(&[
        "docgen",
        "generate",
        "--operations",
        &ops,
        "--config",
        &config,
        "--overrides",
        &overrides,
        "--tag",
        "NoSuchTag",
        "--output",
        &output.to_string_lossy(),
    ])
    .unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["resources"].as_array().unwrap().len(), 0);
}

#[test]
fn test_postman_writes_collection_json() {
    let dir = tempfile::tempdir().unwrap();
    let ops = write(dir.path(), "ops.yaml", OPERATIONS);
    let config = write(dir.path(), "docgen.toml", CONFIG);
    let output = dir.path().join("collection.json");

    run_args(&[
        "docgen",
        "postman",
        "--operations",
        &ops,
        "--config",
        &config,
        "--output",
        &output.to_string_lossy(),
    ])
    .unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["name"], "Widget API");
    assert_eq!(value["folders"].as_array().unwrap().len(), 1);
    assert_eq!(value["requests"].as_array().unwrap().len(), 2);
    let request = &value["requests"][0];
    assert!(request["url"].as_str().unwrap().contains("/widgets/:id"));
    assert_eq!(request["pathVariables"]["id"], "42");
}

#[test]
fn test_generate_fails_on_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let ops = write(dir.path(), "ops.yaml", OPERATIONS);
    let config = write(
        dir.path(),
        "docgen.toml",
        "title = \"X\"\napi_version = \"1\"\napi_base_url = \"\"\ncontact = \"c\"\ndescription = \"d\"\n",
    );

    let err = run_args(&[
        "docgen",
        "generate",
        "--operations",
        &ops,
        "--config",
        &config,
    ])
    .unwrap_err();
    assert!(err.to_string().contains("api_base_url"), "{err}");
}

#[test]
fn test_lint_fail_on_error() {
    let dir = tempfile::tempdir().unwrap();
    let ops = write(
        dir.path(),
        "ops.yaml",
        "- requestType: Widget\n  verbs: []\n  routeTemplates: []\n  contentTypes: []\n",
    );

    // without the flag, lint reports but succeeds
    run_args(&["docgen", "lint", "--operations", &ops]).unwrap();

    let err = run_args(&["docgen", "lint", "--operations", &ops, "--fail-on-error"]).unwrap_err();
    assert!(err.to_string().contains("lint"), "{err}");
}
