#![allow(clippy::unwrap_used, clippy::expect_used)]

use docgen::spec::{
    PropertyConstraint, ResourceSpec, SpecError, StatusCode, VerbScope,
};
use http::Method;

#[test]
fn test_builder_sets_type_level_fields() {
    let spec = ResourceSpec::builder()
        .title("Widgets")
        .description("All about widgets")
        .notes("Stocked nightly")
        .category("Inventory")
        .tags(["Store", "Public"])
        .build()
        .unwrap();

    assert_eq!(spec.title.as_deref(), Some("Widgets"));
    assert_eq!(spec.description.as_deref(), Some("All about widgets"));
    assert_eq!(spec.notes.as_deref(), Some("Stocked nightly"));
    assert_eq!(spec.category.as_deref(), Some("Inventory"));
    assert_eq!(spec.tags, vec!["Store", "Public"]);
}

#[test]
fn test_property_fields_set_exactly_as_declared() {
    let spec = ResourceSpec::builder()
        .property("id", |p| p.title("Identifier").required(true))
        .property("name", |p| p.description("Display name"))
        .build()
        .unwrap();

    let id = spec.property("id").unwrap();
    assert_eq!(id.title.as_deref(), Some("Identifier"));
    assert_eq!(id.required, Some(true));
    // fields not set stay at their zero value
    assert!(id.description.is_none());
    assert!(id.allow_multiple.is_none());
    assert!(id.constraint.is_none());

    // nothing is inherited from the previous registration
    let name = spec.property("name").unwrap();
    assert_eq!(name.description.as_deref(), Some("Display name"));
    assert!(name.title.is_none());
    assert!(name.required.is_none());
}

#[test]
fn test_duplicate_property_is_signalled() {
    let err = ResourceSpec::builder()
        .property("id", |p| p.title("first"))
        .property("id", |p| p.title("second"))
        .build()
        .unwrap_err();

    assert_eq!(
        err,
        SpecError::DuplicateProperty {
            member: "id".to_string()
        }
    );
}

#[test]
fn test_list_setters_append_across_calls() {
    let spec = ResourceSpec::builder()
        .tags(["A"])
        .tags(["B"])
        .status_codes(VerbScope::All, [StatusCode::new(401)])
        .status_codes(VerbScope::All, [StatusCode::new(403)])
        .content_types(VerbScope::All, ["application/json"])
        .content_types(VerbScope::verb(Method::POST), ["text/csv"])
        .build()
        .unwrap();

    assert_eq!(spec.tags, vec!["A", "B"]);
    let codes: Vec<u16> = spec
        .status_codes_for(&Method::GET)
        .iter()
        .map(|c| c.code)
        .collect();
    assert_eq!(codes, vec![401, 403]);
    assert_eq!(
        spec.content_types_for(&Method::POST),
        vec!["application/json", "text/csv"]
    );
    assert_eq!(
        spec.content_types_for(&Method::GET),
        vec!["application/json"]
    );
}

#[test]
fn test_effective_verb_sets_union_star_bucket_first() {
    let spec = ResourceSpec::builder()
        .status_codes(VerbScope::All, [StatusCode::new(429), StatusCode::new(401)])
        .status_codes(
            VerbScope::verb(Method::POST),
            [StatusCode::new(201), StatusCode::new(429)],
        )
        .build()
        .unwrap();

    // "*" entries first, insertion order preserved within each bucket,
    // duplicate 429 collapsed onto its first occurrence
    let codes: Vec<u16> = spec
        .status_codes_for(&Method::POST)
        .iter()
        .map(|c| c.code)
        .collect();
    assert_eq!(codes, vec![429, 401, 201]);
}

#[test]
fn test_status_code_equality_is_code_only() {
    let a = StatusCode::new(201).with_description("A");
    let b = StatusCode::new(201).with_description("B");
    assert_eq!(a, b);
    assert_ne!(StatusCode::new(204), StatusCode::new(201));
}

#[test]
fn test_range_constraint_construction() {
    let ok = PropertyConstraint::range("Age", Some(0.0), Some(120.0)).unwrap();
    match ok {
        PropertyConstraint::Range { name, min, max } => {
            assert_eq!(name, "Age");
            assert_eq!(min, Some(0.0));
            assert_eq!(max, Some(120.0));
        }
        _ => panic!("expected range"),
    }

    assert!(PropertyConstraint::range("X", None, None).is_err());
    assert!(PropertyConstraint::range("X", Some(10.0), Some(9.0)).is_err());
}

#[test]
fn test_list_constraint_construction() {
    assert!(PropertyConstraint::list("X", vec![]).is_err());

    let ok = PropertyConstraint::list("X", vec!["a".to_string(), "b".to_string()]).unwrap();
    match ok {
        PropertyConstraint::List { values, .. } => assert_eq!(values, vec!["a", "b"]),
        _ => panic!("expected list"),
    }
}

#[test]
fn test_route_notes_scalar_verb_wins() {
    let spec = ResourceSpec::builder()
        .route_note(VerbScope::All, "all verbs")
        .route_note(VerbScope::verb(Method::DELETE), "gone forever")
        .build()
        .unwrap();

    assert_eq!(spec.route_note_for(&Method::DELETE), Some("gone forever"));
    assert_eq!(spec.route_note_for(&Method::GET), Some("all verbs"));
}
