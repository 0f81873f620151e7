use super::types::{Collection, DataEntry, Folder, Request};
use crate::docs::{ApiDocumentation, ApiResourceDocumentation};
use crate::ids::ArtifactId;
use http::Method;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{error, warn};

static PATH_PARAM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^{}/]+)\}").expect("path parameter regex should be valid"));

/// Synthesize a Postman-style collection from a finished documentation
/// snapshot.
///
/// A resource that declares no content types is fatal for that resource's
/// entry only: it is logged and skipped, and the rest of the collection
/// still generates. A resource with zero verbs yields a folder with zero
/// requests.
pub fn generate(documentation: &ApiDocumentation) -> Collection {
    let collection_id = ArtifactId::new();
    let timestamp = unix_millis();

    let mut folders = Vec::with_capacity(documentation.resources.len());
    let mut requests = Vec::new();

    for resource in &documentation.resources {
        match build_resource(resource, documentation, collection_id, timestamp) {
            Ok((folder, mut resource_requests)) => {
                folders.push(folder);
                requests.append(&mut resource_requests);
            }
            Err(err) => {
                error!(resource = %resource.title, %err, "skipping resource in collection");
            }
        }
    }

    Collection {
        id: collection_id,
        name: documentation.title.clone(),
        description: documentation.description.clone(),
        timestamp,
        order: folders.iter().map(|f| f.id).collect(),
        folders,
        requests,
    }
}

fn build_resource(
    resource: &ApiResourceDocumentation,
    documentation: &ApiDocumentation,
    collection_id: ArtifactId,
    timestamp: u64,
) -> anyhow::Result<(Folder, Vec<Request>)> {
    let mut folder = Folder {
        id: ArtifactId::new(),
        name: resource.title.clone(),
        description: resource.description.clone().unwrap_or_default(),
        request_ids: Vec::new(),
    };

    let methods = resource_methods(resource);
    if methods.is_empty() {
        return Ok((folder, Vec::new()));
    }

    let content_type = negotiate_content_type(resource)?;
    let data_entries: Vec<DataEntry> = resource
        .properties
        .iter()
        .map(|p| DataEntry {
            key: p.title.clone(),
            value: placeholder_value(&p.type_name),
            entry_type: friendly_type_alias(&p.type_name).to_string(),
        })
        .collect();

    let base_url = documentation.api_base_url.trim_end_matches('/');
    let mut requests = Vec::new();

    for template in &resource.relative_paths {
        let params = path_param_names(template);
        let rewritten = rewrite_path(template);

        // Path parameters are always supplied as path variables, whatever
        // the verb.
        let mut path_variables = BTreeMap::new();
        for param in &params {
            let value = resource
                .properties
                .iter()
                .find(|p| p.name.eq_ignore_ascii_case(param))
                .map(|p| placeholder_value(&p.type_name))
                .unwrap_or_else(|| {
                    warn!(resource = %resource.title, %param, "no property matches path parameter");
                    "value".to_string()
                });
            path_variables.insert(param.clone(), value);
        }

        let non_path_entries: Vec<&DataEntry> = resource
            .properties
            .iter()
            .zip(&data_entries)
            .filter(|(p, _)| !params.iter().any(|m| m.eq_ignore_ascii_case(&p.name)))
            .map(|(_, entry)| entry)
            .collect();

        for method in &methods {
            let id = ArtifactId::new();
            let (url, data, data_mode) = if carries_body(method) {
                let data: Vec<DataEntry> = non_path_entries.iter().map(|e| (*e).clone()).collect();
                let mode = (!data.is_empty()).then(|| "params".to_string());
                (format!("{base_url}{rewritten}"), data, mode)
            } else {
                let query = query_string(&non_path_entries);
                let url = if query.is_empty() {
                    format!("{base_url}{rewritten}")
                } else {
                    format!("{base_url}{rewritten}?{query}")
                };
                (url, Vec::new(), None)
            };

            let description = resource
                .route_notes
                .get(method.as_str())
                .cloned()
                .or_else(|| resource.description.clone())
                .unwrap_or_default();

            folder.request_ids.push(id);
            requests.push(Request {
                id,
                url,
                method: method.to_string(),
                headers: format!("Content-Type: {content_type}"),
                path_variables: path_variables.clone(),
                data,
                data_mode,
                time: timestamp,
                name: format!("{method} {template}"),
                description,
                collection_id,
                folder_id: folder.id,
            });
        }
    }

    Ok((folder, requests))
}

fn resource_methods(resource: &ApiResourceDocumentation) -> Vec<Method> {
    resource
        .verbs
        .iter()
        .filter_map(|v| Method::from_bytes(v.as_bytes()).ok())
        .collect()
}

/// Verbs that conventionally carry a request body; everything else folds
/// its data entries into the query string.
fn carries_body(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::PATCH)
}

/// Advertised content type: JSON when the resource declares it anywhere,
/// else the first declared content type. No declared content types is an
/// error.
fn negotiate_content_type(resource: &ApiResourceDocumentation) -> anyhow::Result<String> {
    let declared: Vec<&String> = resource.content_types.values().flatten().collect();
    if let Some(json) = declared
        .iter()
        .find(|ct| ct.eq_ignore_ascii_case("application/json"))
    {
        return Ok((**json).clone());
    }
    declared
        .first()
        .map(|ct| (**ct).clone())
        .ok_or_else(|| anyhow::anyhow!("resource '{}' declares no content types", resource.title))
}

/// Rewrite `{name}` route placeholders into Postman's `:name` syntax.
fn rewrite_path(template: &str) -> String {
    PATH_PARAM_REGEX.replace_all(template, ":$1").into_owned()
}

pub(crate) fn path_param_names(template: &str) -> Vec<String> {
    PATH_PARAM_REGEX
        .captures_iter(template)
        .map(|c| c[1].to_string())
        .collect()
}

fn query_string(entries: &[&DataEntry]) -> String {
    entries
        .iter()
        .map(|e| {
            format!(
                "{}={}",
                urlencoding::encode(&e.key),
                urlencoding::encode(&e.value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Human-friendly alias for a declared type name, used as the advertised
/// entry type (`i32` → `int`, `Vec<String>` → `string`).
fn friendly_type_alias(type_name: &str) -> &'static str {
    let inner = unwrap_generic(type_name);
    match inner {
        "i8" | "i16" | "i32" | "u8" | "u16" | "u32" | "int" | "Int32" | "integer" => "int",
        "i64" | "u64" | "isize" | "usize" | "long" | "Int64" => "long",
        "f32" | "float" | "Single" => "float",
        "f64" | "double" | "Double" | "number" => "double",
        "bool" | "Boolean" | "boolean" => "bool",
        "Decimal" | "decimal" => "decimal",
        "String" | "str" | "string" | "char" => "string",
        _ => "object",
    }
}

/// Type-derived placeholder value for synthetic data entries.
fn placeholder_value(type_name: &str) -> String {
    match friendly_type_alias(type_name) {
        "int" | "long" => "42".to_string(),
        "float" | "double" => "3.14".to_string(),
        "decimal" => "123.45".to_string(),
        "bool" => "true".to_string(),
        "string" => "example".to_string(),
        _ => "value".to_string(),
    }
}

/// Strip `Option<…>` / `Vec<…>` wrappers so the alias reflects the element
/// type.
fn unwrap_generic(type_name: &str) -> &str {
    let mut inner = type_name.trim();
    loop {
        let next = inner
            .strip_prefix("Option<")
            .or_else(|| inner.strip_prefix("Vec<"))
            .and_then(|s| s.strip_suffix('>'));
        match next {
            Some(stripped) => inner = stripped.trim(),
            None => return inner,
        }
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_path() {
        assert_eq!(rewrite_path("/widgets/{id}"), "/widgets/:id");
        assert_eq!(
            rewrite_path("/users/{user_id}/posts/{post_id}"),
            "/users/:user_id/posts/:post_id"
        );
        assert_eq!(rewrite_path("/widgets"), "/widgets");
    }

    #[test]
    fn test_path_param_names() {
        assert_eq!(
            path_param_names("/users/{user_id}/posts/{post_id}"),
            vec!["user_id", "post_id"]
        );
        assert!(path_param_names("/users").is_empty());
    }

    #[test]
    fn test_friendly_type_alias() {
        assert_eq!(friendly_type_alias("i32"), "int");
        assert_eq!(friendly_type_alias("Int32"), "int");
        assert_eq!(friendly_type_alias("i64"), "long");
        assert_eq!(friendly_type_alias("String"), "string");
        assert_eq!(friendly_type_alias("Vec<String>"), "string");
        assert_eq!(friendly_type_alias("Option<f64>"), "double");
        assert_eq!(friendly_type_alias("Widget"), "object");
    }

    #[test]
    fn test_placeholder_value() {
        assert_eq!(placeholder_value("i32"), "42");
        assert_eq!(placeholder_value("String"), "example");
        assert_eq!(placeholder_value("bool"), "true");
        assert_eq!(placeholder_value("Widget"), "value");
    }

    #[test]
    fn test_body_verbs() {
        assert!(carries_body(&Method::POST));
        assert!(carries_body(&Method::PUT));
        assert!(carries_body(&Method::PATCH));
        assert!(!carries_body(&Method::GET));
        assert!(!carries_body(&Method::DELETE));
    }

    #[test]
    fn test_query_string_is_percent_encoded() {
        let entry = DataEntry {
            key: "display name".to_string(),
            value: "a&b".to_string(),
            entry_type: "string".to_string(),
        };
        assert_eq!(query_string(&[&entry]), "display%20name=a%26b");
    }
}
