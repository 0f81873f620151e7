use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Structured-comment lookup collaborator.
///
/// Keyed by declared type and member names, producing the free-text summary
/// and remarks the hosting toolchain extracted ahead of time. Lookups for
/// unknown keys return `None`, never an error.
pub trait StructuredComments: Send + Sync {
    fn type_summary(&self, type_name: &str) -> Option<String>;

    fn type_remarks(&self, type_name: &str) -> Option<String>;

    fn member_summary(&self, type_name: &str, member: &str) -> Option<String>;
}

/// In-memory comment store, loadable from a YAML/JSON file keyed by type
/// name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CommentStore {
    types: HashMap<String, TypeComments>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TypeComments {
    pub summary: Option<String>,
    pub remarks: Option<String>,
    #[serde(default)]
    pub members: HashMap<String, String>,
}

impl CommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, type_name: impl Into<String>, comments: TypeComments) {
        self.types.insert(type_name.into(), comments);
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read comments file {path:?}"))?;
        let store = if path.extension().map(|e| e == "json").unwrap_or(false) {
            serde_json::from_str(&content)
                .with_context(|| format!("failed to parse comments file {path:?}"))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("failed to parse comments file {path:?}"))?
        };
        Ok(store)
    }
}

impl StructuredComments for CommentStore {
    fn type_summary(&self, type_name: &str) -> Option<String> {
        self.types.get(type_name)?.summary.clone()
    }

    fn type_remarks(&self, type_name: &str) -> Option<String> {
        self.types.get(type_name)?.remarks.clone()
    }

    fn member_summary(&self, type_name: &str, member: &str) -> Option<String> {
        self.types.get(type_name)?.members.get(member).cloned()
    }
}

/// Comment source for hosts that supply none.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoComments;

impl StructuredComments for NoComments {
    fn type_summary(&self, _type_name: &str) -> Option<String> {
        None
    }

    fn type_remarks(&self, _type_name: &str) -> Option<String> {
        None
    }

    fn member_summary(&self, _type_name: &str, _member: &str) -> Option<String> {
        None
    }
}
