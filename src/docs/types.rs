use crate::spec::{PropertyConstraint, StatusCode};
use serde::Serialize;
use std::collections::BTreeMap;

/// The fully-merged documentation record for one operation.
///
/// Verb-scoped maps are keyed by method name; `BTreeMap` keeps field order
/// stable across snapshots for the same operation set.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResourceDocumentation {
    /// Name of the documented request type (what DtoName filters match).
    pub type_name: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub tags: Vec<String>,
    /// Relative paths with `{name}` parameter placeholders.
    pub relative_paths: Vec<String>,
    pub verbs: Vec<String>,
    pub content_types: BTreeMap<String, Vec<String>>,
    pub status_codes: BTreeMap<String, Vec<StatusCode>>,
    pub route_notes: BTreeMap<String, String>,
    pub properties: Vec<PropertyDocumentation>,
}

/// Merged documentation for one declared property.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDocumentation {
    pub name: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The underlying declared type name.
    pub type_name: String,
    pub required: bool,
    pub allow_multiple: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<PropertyConstraint>,
}

/// The complete documentation set for one generation pass.
///
/// Rebuilt per request; freely replaceable as a whole. Never returned
/// partially populated: configuration preconditions fail before any
/// resource is produced.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDocumentation {
    pub title: String,
    pub api_version: String,
    pub api_base_url: String,
    pub contact: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub licence_url: Option<String>,
    pub description: String,
    pub resources: Vec<ApiResourceDocumentation>,
}
