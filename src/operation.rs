use anyhow::Context;
use http::Method;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// One exposed operation, as supplied by the hosting runtime.
///
/// Operations carry the facts a reflecting host would otherwise discover at
/// runtime (declared verbs, route templates, member descriptors) as
/// explicit data, so the enrichment pipeline needs no type scanning.
/// Immutable per generation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Name of the documented request type. Keys spec-registry and
    /// comment-store lookups, and is what DtoName filters match against.
    pub request_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_type: Option<String>,
    /// Declared verbs, in declaration order (e.g. `["GET", "POST"]`).
    #[serde(default)]
    pub verbs: Vec<String>,
    /// Declared route templates with `{name}` placeholders.
    #[serde(default)]
    pub route_templates: Vec<String>,
    /// Content types the host negotiates for this operation.
    #[serde(default)]
    pub content_types: Vec<String>,
    /// Declared members of the request type, in declaration order.
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
}

impl Operation {
    /// Declared verbs parsed into methods. Tokens that are not valid HTTP
    /// methods are skipped with a warning (the linter reports them as
    /// warnings too); they never abort a generation pass.
    pub fn methods(&self) -> Vec<Method> {
        self.verbs
            .iter()
            .filter_map(|v| match parse_verb(v) {
                Ok(m) => Some(m),
                Err(_) => {
                    warn!(operation = %self.request_type, verb = %v, "skipping unknown verb");
                    None
                }
            })
            .collect()
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// One declared member of a documented request type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    pub name: String,
    /// Declared type name (`i32`, `String`, `Vec<String>`, …).
    pub type_name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub allow_multiple: bool,
}

pub fn parse_verb(verb: &str) -> anyhow::Result<Method> {
    Method::from_bytes(verb.trim().to_ascii_uppercase().as_bytes())
        .with_context(|| format!("invalid HTTP verb '{verb}'"))
}

/// Load an operation list from a YAML or JSON file; format is chosen by
/// extension, YAML unless the path ends in `.json`.
pub fn load_operations(path: &Path) -> anyhow::Result<Vec<Operation>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read operations file {path:?}"))?;
    let operations: Vec<Operation> = if path.extension().map(|e| e == "json").unwrap_or(false) {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse operations file {path:?}"))?
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse operations file {path:?}"))?
    };
    Ok(operations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_verb_is_case_insensitive() {
        assert_eq!(parse_verb("get").unwrap(), Method::GET);
        assert_eq!(parse_verb("Patch").unwrap(), Method::PATCH);
        assert!(parse_verb("not a verb").is_err());
    }

    #[test]
    fn test_methods_skips_unknown_verbs() {
        let op = Operation {
            request_type: "Widget".to_string(),
            response_type: None,
            verbs: vec!["GET".to_string(), "bogus verb".to_string()],
            route_templates: vec![],
            content_types: vec![],
            properties: vec![],
        };
        assert_eq!(op.methods(), vec![Method::GET]);
    }

    #[test]
    fn test_operations_deserialize_from_yaml() {
        let yaml = r#"
- requestType: Widget
  responseType: WidgetResponse
  verbs: [GET, POST]
  routeTemplates: ["/widgets/{id}"]
  contentTypes: [application/json]
  properties:
    - name: id
      typeName: i32
      required: true
"#;
        let ops: Vec<Operation> = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].properties[0].name, "id");
        assert!(ops[0].properties[0].required);
        assert!(!ops[0].properties[0].allow_multiple);
    }
}
