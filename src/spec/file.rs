//! Override bundles loaded from YAML/JSON files.
//!
//! File entries are plain serde DTOs; conversion into [`ResourceSpec`] runs
//! through the fluent builder and the validated constraint constructors, so
//! a file can never smuggle in state that code-authored specs could not
//! express (duplicate members, inverted ranges, empty value lists).

use super::constraint::PropertyConstraint;
use super::registry::SpecSource;
use super::status::StatusCode;
use super::types::{ResourceSpec, VerbScope};
use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SpecEntry {
    title: Option<String>,
    description: Option<String>,
    notes: Option<String>,
    category: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    status_codes: BTreeMap<String, Vec<StatusCode>>,
    #[serde(default)]
    content_types: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    route_notes: BTreeMap<String, String>,
    #[serde(default)]
    properties: BTreeMap<String, PropertyEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct PropertyEntry {
    title: Option<String>,
    description: Option<String>,
    required: Option<bool>,
    allow_multiple: Option<bool>,
    constraint: Option<ConstraintEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ConstraintEntry {
    kind: String,
    /// Defaults to the owning property name when omitted.
    name: Option<String>,
    min: Option<f64>,
    max: Option<f64>,
    #[serde(default)]
    values: Vec<String>,
}

impl SpecEntry {
    fn into_spec(self, type_name: &str) -> anyhow::Result<ResourceSpec> {
        let mut builder = ResourceSpec::builder().tags(self.tags);
        if let Some(title) = self.title {
            builder = builder.title(title);
        }
        if let Some(description) = self.description {
            builder = builder.description(description);
        }
        if let Some(notes) = self.notes {
            builder = builder.notes(notes);
        }
        if let Some(category) = self.category {
            builder = builder.category(category);
        }
        for (scope, codes) in self.status_codes {
            builder = builder.status_codes(parse_scope(&scope, type_name)?, codes);
        }
        for (scope, types) in self.content_types {
            builder = builder.content_types(parse_scope(&scope, type_name)?, types);
        }
        for (scope, note) in self.route_notes {
            builder = builder.route_note(parse_scope(&scope, type_name)?, note);
        }
        for (member, entry) in self.properties {
            let PropertyEntry {
                title,
                description,
                required,
                allow_multiple,
                constraint,
            } = entry;
            let constraint = constraint
                .map(|c| c.into_constraint(&member))
                .transpose()
                .with_context(|| format!("invalid constraint for {type_name}.{member}"))?;
            builder = builder.property(member, |mut p| {
                if let Some(v) = title {
                    p = p.title(v);
                }
                if let Some(v) = description {
                    p = p.description(v);
                }
                if let Some(v) = required {
                    p = p.required(v);
                }
                if let Some(v) = allow_multiple {
                    p = p.allow_multiple(v);
                }
                if let Some(v) = constraint {
                    p = p.constraint(v);
                }
                p
            });
        }
        builder
            .build()
            .with_context(|| format!("invalid spec for {type_name}"))
    }
}

impl ConstraintEntry {
    fn into_constraint(self, member: &str) -> anyhow::Result<PropertyConstraint> {
        let name = self.name.unwrap_or_else(|| member.to_string());
        match self.kind.as_str() {
            "range" => Ok(PropertyConstraint::range(name, self.min, self.max)?),
            "list" => Ok(PropertyConstraint::list(name, self.values)?),
            other => anyhow::bail!("unknown constraint kind '{other}' (expected range or list)"),
        }
    }
}

fn parse_scope(raw: &str, type_name: &str) -> anyhow::Result<VerbScope> {
    raw.parse::<VerbScope>()
        .map_err(|_| anyhow::anyhow!("invalid verb '{raw}' in spec for {type_name}"))
}

/// [`SpecSource`] backed by a YAML or JSON override file.
///
/// The file is a map of documented type name → spec entry. Format is chosen
/// by extension, YAML unless the path ends in `.json`.
#[derive(Debug)]
pub struct FileSpecSource {
    path: PathBuf,
}

impl FileSpecSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSpecSource { path: path.into() }
    }
}

impl SpecSource for FileSpecSource {
    fn name(&self) -> &str {
        self.path.to_str().unwrap_or("override file")
    }

    fn specs(&self) -> anyhow::Result<Vec<(String, ResourceSpec)>> {
        load_spec_file(&self.path)
    }
}

fn load_spec_file(path: &Path) -> anyhow::Result<Vec<(String, ResourceSpec)>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read override file {path:?}"))?;
    let entries: BTreeMap<String, SpecEntry> =
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            serde_json::from_str(&content)
                .with_context(|| format!("failed to parse override file {path:?}"))?
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("failed to parse override file {path:?}"))?
        };

    entries
        .into_iter()
        .map(|(type_name, entry)| {
            let spec = entry.into_spec(&type_name)?;
            Ok((type_name, spec))
        })
        .collect()
}
