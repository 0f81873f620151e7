use super::constraint::PropertyConstraint;
use super::status::StatusCode;
use http::Method;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Key for verb-scoped override maps.
///
/// `All` is the `"*"` sentinel: it applies to every verb of the documented
/// type and is always consulted **in addition to** the verb-specific bucket,
/// never instead of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VerbScope {
    All,
    Verb(Method),
}

impl VerbScope {
    pub fn verb(method: Method) -> Self {
        VerbScope::Verb(method)
    }
}

impl fmt::Display for VerbScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerbScope::All => write!(f, "*"),
            VerbScope::Verb(m) => write!(f, "{m}"),
        }
    }
}

impl FromStr for VerbScope {
    type Err = http::method::InvalidMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "*" {
            return Ok(VerbScope::All);
        }
        Method::from_bytes(s.to_ascii_uppercase().as_bytes()).map(VerbScope::Verb)
    }
}

/// Explicit metadata override for one declared member of a documented type.
///
/// Every field is optional; a field left unset stays at its zero value in the
/// merged documentation rather than inheriting from any other registration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyOverride {
    pub title: Option<String>,
    pub description: Option<String>,
    pub required: Option<bool>,
    pub allow_multiple: Option<bool>,
    pub constraint: Option<PropertyConstraint>,
}

/// Developer-authored override bundle for one documented type.
///
/// Constructed through [`ResourceSpec::builder`] and immutable afterwards.
/// Verb-scoped maps hold a `"*"` bucket plus per-verb buckets; the
/// `*_for` lookups return the union with `"*"` entries first.
#[derive(Debug, Clone, Default)]
pub struct ResourceSpec {
    pub title: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub property_overrides: HashMap<String, PropertyOverride>,
    pub status_codes: HashMap<VerbScope, Vec<StatusCode>>,
    pub content_types: HashMap<VerbScope, Vec<String>>,
    pub route_notes: HashMap<VerbScope, String>,
}

impl ResourceSpec {
    pub fn builder() -> super::builder::ResourceSpecBuilder {
        super::builder::ResourceSpecBuilder::new()
    }

    pub fn property(&self, member: &str) -> Option<&PropertyOverride> {
        self.property_overrides.get(member)
    }

    /// Effective status codes for `verb`: the `"*"` bucket followed by the
    /// verb bucket, duplicate codes removed (first occurrence wins).
    pub fn status_codes_for(&self, verb: &Method) -> Vec<StatusCode> {
        let mut out: Vec<StatusCode> = Vec::new();
        for bucket in self.buckets(&self.status_codes, verb) {
            for code in bucket {
                if !out.contains(code) {
                    out.push(code.clone());
                }
            }
        }
        out
    }

    /// Effective content types for `verb`: `"*"` bucket first, then the verb
    /// bucket, exact duplicates removed.
    pub fn content_types_for(&self, verb: &Method) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for bucket in self.buckets(&self.content_types, verb) {
            for ct in bucket {
                if !out.contains(ct) {
                    out.push(ct.clone());
                }
            }
        }
        out
    }

    /// Route note for `verb`. Scalar field: the verb-specific entry wins over
    /// the `"*"` entry.
    pub fn route_note_for(&self, verb: &Method) -> Option<&str> {
        self.route_notes
            .get(&VerbScope::Verb(verb.clone()))
            .or_else(|| self.route_notes.get(&VerbScope::All))
            .map(String::as_str)
    }

    fn buckets<'a, T>(
        &self,
        map: &'a HashMap<VerbScope, Vec<T>>,
        verb: &Method,
    ) -> impl Iterator<Item = &'a Vec<T>> {
        map.get(&VerbScope::All)
            .into_iter()
            .chain(map.get(&VerbScope::Verb(verb.clone())))
    }
}
