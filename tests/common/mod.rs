#![allow(dead_code)]

use docgen::config::{DocumentationConfig, FallbackConfig};
use docgen::operation::{Operation, PropertyDescriptor};
use docgen::spec::StatusCode;

/// Operation fixture matching the canonical widget scenario: GET/POST on
/// `/widgets/{id}` with an `id` path parameter and a `name` body field.
pub fn widget_operation() -> Operation {
    Operation {
        request_type: "Widget".to_string(),
        response_type: Some("WidgetResponse".to_string()),
        verbs: vec!["GET".to_string(), "POST".to_string()],
        route_templates: vec!["/widgets/{id}".to_string()],
        content_types: vec!["application/json".to_string()],
        properties: vec![
            PropertyDescriptor {
                name: "id".to_string(),
                type_name: "i32".to_string(),
                required: true,
                allow_multiple: false,
            },
            PropertyDescriptor {
                name: "name".to_string(),
                type_name: "String".to_string(),
                required: false,
                allow_multiple: false,
            },
        ],
    }
}

pub fn config() -> DocumentationConfig {
    DocumentationConfig {
        title: "Widget API".to_string(),
        api_version: "1.0".to_string(),
        api_base_url: "https://api.example.com".to_string(),
        contact: "api@example.com".to_string(),
        licence_url: None,
        description: "Widgets over HTTP".to_string(),
        fallback: FallbackConfig::default(),
    }
}

/// Same as [`config`] but with the global default status code `429`
/// configured.
pub fn config_with_default_429() -> DocumentationConfig {
    let mut config = config();
    config.fallback.default_status_codes = vec![StatusCode::new(429)];
    config
}
