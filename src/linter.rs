//! # Operation Descriptor Linter
//!
//! Checks an operation list for issues that would degrade or break a
//! documentation pass before any generation runs:
//!
//! 1. **Missing verbs** - operations with no parseable HTTP verb produce no
//!    collection requests
//! 2. **Missing routes** - operations without route templates cannot be
//!    exported
//! 3. **Missing content types** - collection generation hard-fails for the
//!    resource
//! 4. **Duplicate request types** - later operations shadow earlier ones in
//!    filters and override lookups
//! 5. **Unmatched path parameters** - `{name}` placeholders with no matching
//!    property descriptor
//! 6. **Duplicate properties** - repeated member declarations within one
//!    operation

use crate::operation::{parse_verb, Operation};
use crate::postman::path_param_names;
use std::collections::HashSet;
use std::fmt;

#[cfg(test)]
mod tests;

/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Error - generation would fail or silently lose the operation
    Error,
    /// Warning - may cause degraded output but won't block generation
    Warning,
    /// Info - best practice suggestion
    Info,
}

impl fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintSeverity::Error => write!(f, "Error"),
            LintSeverity::Warning => write!(f, "Warning"),
            LintSeverity::Info => write!(f, "Info"),
        }
    }
}

/// A lint issue found in an operation list
#[derive(Debug, Clone)]
pub struct LintIssue {
    /// Where the issue occurred (e.g., "operation:Widget")
    pub location: String,
    /// Severity of the issue
    pub severity: LintSeverity,
    /// Type of lint issue (e.g., "missing_verbs", "unmatched_path_param")
    pub kind: String,
    /// Human-readable description of the problem
    pub message: String,
    /// Optional suggestion for how to fix it
    pub suggestion: Option<String>,
}

impl LintIssue {
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Lint an operation list.
pub fn lint_operations(operations: &[Operation]) -> Vec<LintIssue> {
    let mut issues = Vec::new();
    let mut seen_types: HashSet<String> = HashSet::new();

    for op in operations {
        let location = format!("operation:{}", op.request_type);

        if !seen_types.insert(op.request_type.clone()) {
            issues.push(
                LintIssue::new(
                    &location,
                    LintSeverity::Error,
                    "duplicate_request_type",
                    format!("Request type '{}' is declared more than once", op.request_type),
                )
                .with_suggestion("Merge the duplicate operations or rename one request type"),
            );
        }

        for verb in &op.verbs {
            if parse_verb(verb).is_err() {
                issues.push(LintIssue::new(
                    &location,
                    LintSeverity::Warning,
                    "unknown_verb",
                    format!("Verb '{verb}' is not a valid HTTP method and will be skipped"),
                ));
            }
        }
        if op.methods().is_empty() {
            issues.push(
                LintIssue::new(
                    &location,
                    LintSeverity::Error,
                    "missing_verbs",
                    "Operation declares no usable HTTP verbs",
                )
                .with_suggestion("Declare at least one verb, e.g. verbs: [GET]"),
            );
        }

        if op.route_templates.is_empty() {
            issues.push(LintIssue::new(
                &location,
                LintSeverity::Error,
                "missing_routes",
                "Operation declares no route templates",
            ));
        }

        if op.content_types.is_empty() {
            issues.push(
                LintIssue::new(
                    &location,
                    LintSeverity::Error,
                    "missing_content_types",
                    "Operation declares no content types; collection generation will skip it \
                    unless an override spec supplies them",
                )
                .with_suggestion("Declare contentTypes: [application/json]"),
            );
        }

        let mut seen_properties: HashSet<&str> = HashSet::new();
        for property in &op.properties {
            if !seen_properties.insert(property.name.as_str()) {
                issues.push(LintIssue::new(
                    format!("{location}/{}", property.name),
                    LintSeverity::Warning,
                    "duplicate_property",
                    format!("Property '{}' is declared more than once", property.name),
                ));
            }
        }

        for template in &op.route_templates {
            for param in path_param_names(template) {
                let matched = op
                    .properties
                    .iter()
                    .any(|p| p.name.eq_ignore_ascii_case(&param));
                if !matched {
                    issues.push(LintIssue::new(
                        format!("{location}{template}"),
                        LintSeverity::Warning,
                        "unmatched_path_param",
                        format!("Path parameter '{{{param}}}' has no matching property"),
                    ));
                }
            }
        }
    }

    issues
}

/// Check whether any error-level issues are present.
pub fn has_errors(issues: &[LintIssue]) -> bool {
    issues.iter().any(|i| i.severity == LintSeverity::Error)
}

/// Print lint issues grouped by severity.
pub fn print_lint_issues(issues: &[LintIssue]) {
    let errors: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Error)
        .collect();
    let warnings: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Warning)
        .collect();
    let infos: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Info)
        .collect();

    println!("\n📋 Lint Results:");
    println!(
        "   {} error(s), {} warning(s), {} info(s)\n",
        errors.len(),
        warnings.len(),
        infos.len()
    );

    if !errors.is_empty() {
        println!("❌ Errors (must fix):");
        print_group(&errors);
    }

    if !warnings.is_empty() {
        println!("⚠️  Warnings (should fix):");
        print_group(&warnings);
    }

    if !infos.is_empty() {
        println!("ℹ️  Info (best practices):");
        print_group(&infos);
    }
}

fn print_group(issues: &[&LintIssue]) {
    for issue in issues {
        println!("   [{}] {}", issue.kind, issue.location);
        println!("      {}", issue.message);
        if let Some(suggestion) = &issue.suggestion {
            println!("      💡 Suggestion: {}", suggestion);
        }
    }
    println!();
}
