use super::types::{ApiDocumentation, ApiResourceDocumentation};
use serde::Deserialize;

/// Filter criteria for narrowing a documentation snapshot.
///
/// Composition is conjunctive and criterion-skipping: each non-empty list
/// adds an any-match clause (case-insensitive) over the corresponding
/// resource field, and empty lists are skipped entirely rather than
/// matching nothing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRequest {
    #[serde(default)]
    pub dto_names: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl FilterRequest {
    pub fn is_empty(&self) -> bool {
        self.dto_names.is_empty() && self.categories.is_empty() && self.tags.is_empty()
    }

    pub fn matches(&self, resource: &ApiResourceDocumentation) -> bool {
        if !self.dto_names.is_empty() && !any_match(&self.dto_names, &resource.type_name) {
            return false;
        }
        if !self.categories.is_empty() {
            let category = resource.category.as_deref().unwrap_or("");
            if !any_match(&self.categories, category) {
                return false;
            }
        }
        if !self.tags.is_empty()
            && !resource
                .tags
                .iter()
                .any(|tag| any_match(&self.tags, tag))
        {
            return false;
        }
        true
    }
}

fn any_match(wanted: &[String], value: &str) -> bool {
    wanted.iter().any(|w| w.eq_ignore_ascii_case(value))
}

/// Apply `request` to `documentation`, producing a narrowed snapshot with
/// the same top-level metadata. The input is never mutated; when no
/// criteria are supplied the snapshot is returned whole (no-op fast path).
pub fn filter(documentation: &ApiDocumentation, request: &FilterRequest) -> ApiDocumentation {
    if request.is_empty() {
        return documentation.clone();
    }
    ApiDocumentation {
        resources: documentation
            .resources
            .iter()
            .filter(|r| request.matches(r))
            .cloned()
            .collect(),
        ..documentation.clone()
    }
}
