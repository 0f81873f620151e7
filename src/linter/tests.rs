#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Unit tests for the operation linter

use crate::linter::{has_errors, lint_operations, LintSeverity};
use crate::operation::{Operation, PropertyDescriptor};

fn operation(request_type: &str) -> Operation {
    Operation {
        request_type: request_type.to_string(),
        response_type: None,
        verbs: vec!["GET".to_string()],
        route_templates: vec!["/things".to_string()],
        content_types: vec!["application/json".to_string()],
        properties: vec![],
    }
}

#[test]
fn test_clean_operation_has_no_issues() {
    let issues = lint_operations(&[operation("Widget")]);
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");
}

#[test]
fn test_missing_verbs_is_an_error() {
    let mut op = operation("Widget");
    op.verbs.clear();
    let issues = lint_operations(&[op]);
    assert!(issues.iter().any(|i| i.kind == "missing_verbs"));
    assert!(has_errors(&issues));
}

#[test]
fn test_unknown_verb_is_a_warning() {
    let mut op = operation("Widget");
    op.verbs.push("not a verb".to_string());
    let issues = lint_operations(&[op]);
    let unknown: Vec<_> = issues.iter().filter(|i| i.kind == "unknown_verb").collect();
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].severity, LintSeverity::Warning);
    // the valid GET verb keeps this from being a missing_verbs error
    assert!(!has_errors(&issues));
}

#[test]
fn test_missing_content_types_is_an_error() {
    let mut op = operation("Widget");
    op.content_types.clear();
    let issues = lint_operations(&[op]);
    assert!(issues.iter().any(|i| i.kind == "missing_content_types"));
}

#[test]
fn test_duplicate_request_type_is_an_error() {
    let issues = lint_operations(&[operation("Widget"), operation("Widget")]);
    assert!(issues.iter().any(|i| i.kind == "duplicate_request_type"));
}

#[test]
fn test_unmatched_path_param_is_a_warning() {
    let mut op = operation("Widget");
    op.route_templates = vec!["/widgets/{id}".to_string()];
    let issues = lint_operations(&[op.clone()]);
    assert!(issues.iter().any(|i| i.kind == "unmatched_path_param"));

    // matching is case-insensitive
    op.properties.push(PropertyDescriptor {
        name: "Id".to_string(),
        type_name: "i32".to_string(),
        required: true,
        allow_multiple: false,
    });
    let issues = lint_operations(&[op]);
    assert!(!issues.iter().any(|i| i.kind == "unmatched_path_param"));
}

#[test]
fn test_duplicate_property_is_a_warning() {
    let mut op = operation("Widget");
    let descriptor = PropertyDescriptor {
        name: "id".to_string(),
        type_name: "i32".to_string(),
        required: false,
        allow_multiple: false,
    };
    op.properties = vec![descriptor.clone(), descriptor];
    let issues = lint_operations(&[op]);
    assert!(issues.iter().any(|i| i.kind == "duplicate_property"));
}
