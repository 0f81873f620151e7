use super::constraint::PropertyConstraint;
use super::status::StatusCode;
use super::types::{PropertyOverride, ResourceSpec, VerbScope};
use std::collections::HashMap;
use std::fmt;

/// Fluent builder for [`ResourceSpec`].
///
/// Declares type-level fields, verb-scoped buckets, and per-member overrides.
/// All list-valued setters append; calling them repeatedly for the same
/// bucket accumulates entries rather than replacing them.
///
/// # Example
///
/// ```rust,ignore
/// use docgen::spec::{PropertyConstraint, ResourceSpec, StatusCode, VerbScope};
/// use http::Method;
///
/// let spec = ResourceSpec::builder()
///     .title("Widgets")
///     .category("Inventory")
///     .tags(["Store"])
///     .status_codes(VerbScope::All, [StatusCode::new(429)])
///     .status_codes(VerbScope::verb(Method::POST), [StatusCode::new(201)])
///     .content_types(VerbScope::All, ["application/json"])
///     .property("id", |p| p.title("Identifier").required(true))
///     .build()?;
/// ```
#[derive(Debug, Default)]
pub struct ResourceSpecBuilder {
    title: Option<String>,
    description: Option<String>,
    notes: Option<String>,
    category: Option<String>,
    tags: Vec<String>,
    // Declarations kept in call order so duplicates are reported for the
    // member the caller actually repeated.
    properties: Vec<(String, PropertyOverride)>,
    status_codes: HashMap<VerbScope, Vec<StatusCode>>,
    content_types: HashMap<VerbScope, Vec<String>>,
    route_notes: HashMap<VerbScope, String>,
}

impl ResourceSpecBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Append tags in declaration order.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Append status codes into the given verb bucket.
    pub fn status_codes<I>(mut self, scope: VerbScope, codes: I) -> Self
    where
        I: IntoIterator<Item = StatusCode>,
    {
        self.status_codes.entry(scope).or_default().extend(codes);
        self
    }

    /// Append content types into the given verb bucket.
    pub fn content_types<I, S>(mut self, scope: VerbScope, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content_types
            .entry(scope)
            .or_default()
            .extend(types.into_iter().map(Into::into));
        self
    }

    /// Set the route note for the given verb bucket (last write wins within
    /// one bucket; the note is a scalar, not a list).
    pub fn route_note(mut self, scope: VerbScope, note: impl Into<String>) -> Self {
        self.route_notes.insert(scope, note.into());
        self
    }

    /// Declare an override for one member of the documented type.
    ///
    /// Declaring the same member twice is a [`SpecError::DuplicateProperty`]
    /// at [`build`](Self::build) time, never a silent merge.
    pub fn property<F>(mut self, member: impl Into<String>, configure: F) -> Self
    where
        F: FnOnce(PropertyOverrideBuilder) -> PropertyOverrideBuilder,
    {
        let member = member.into();
        let over = configure(PropertyOverrideBuilder::default()).finish();
        self.properties.push((member, over));
        self
    }

    pub fn build(self) -> Result<ResourceSpec, SpecError> {
        let mut property_overrides = HashMap::with_capacity(self.properties.len());
        for (member, over) in self.properties {
            if property_overrides.contains_key(&member) {
                return Err(SpecError::DuplicateProperty { member });
            }
            property_overrides.insert(member, over);
        }
        Ok(ResourceSpec {
            title: self.title,
            description: self.description,
            notes: self.notes,
            category: self.category,
            tags: self.tags,
            property_overrides,
            status_codes: self.status_codes,
            content_types: self.content_types,
            route_notes: self.route_notes,
        })
    }
}

/// Per-member override declaration, used inside
/// [`ResourceSpecBuilder::property`] closures. Each setter writes exactly one
/// field.
#[derive(Debug, Default)]
pub struct PropertyOverrideBuilder {
    over: PropertyOverride,
}

impl PropertyOverrideBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.over.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.over.description = Some(description.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.over.required = Some(required);
        self
    }

    pub fn allow_multiple(mut self, allow_multiple: bool) -> Self {
        self.over.allow_multiple = Some(allow_multiple);
        self
    }

    pub fn constraint(mut self, constraint: PropertyConstraint) -> Self {
        self.over.constraint = Some(constraint);
        self
    }

    fn finish(self) -> PropertyOverride {
        self.over
    }
}

/// Validation error raised by [`ResourceSpecBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// The same member was declared more than once on one spec. Silently
    /// overwriting would discard the first declaration.
    DuplicateProperty { member: String },
}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecError::DuplicateProperty { member } => {
                write!(
                    f,
                    "Property '{member}' is declared more than once on this spec; \
                    combine the declarations into a single property() call"
                )
            }
        }
    }
}

impl std::error::Error for SpecError {}
