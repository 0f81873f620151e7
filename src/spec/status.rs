use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A documented HTTP status code.
///
/// The `name` is auto-derived from the canonical HTTP reason phrase when not
/// supplied (`503` → `"Service Unavailable"`); the description is never
/// auto-derived.
///
/// Equality and hashing are determined **solely by the numeric code**: two
/// status codes with the same number but different descriptions compare
/// equal. Verb-bucket unions rely on this to collapse duplicate codes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCode {
    pub code: u16,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl StatusCode {
    /// Build from a bare status number, deriving the name.
    pub fn new(code: u16) -> Self {
        StatusCode {
            code,
            name: canonical_name(code),
            description: None,
        }
    }

    /// Build with an explicit name, for non-standard or vendor codes.
    pub fn named(code: u16, name: impl Into<String>) -> Self {
        StatusCode {
            code,
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        StatusCode::new(code)
    }
}

impl PartialEq for StatusCode {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for StatusCode {}

impl Hash for StatusCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.name)
    }
}

fn canonical_name(code: u16) -> String {
    http::StatusCode::from_u16(code)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Status {code}"))
}

/// Accepts either a bare number (`429`) or a full object
/// (`{ code: 429, name: "...", description: "..." }`) so override files and
/// fallback configuration can use whichever form reads better.
impl<'de> Deserialize<'de> for StatusCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Full {
            code: u16,
            name: Option<String>,
            description: Option<String>,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Code(u16),
            Full(Full),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Code(code) => StatusCode::new(code),
            Repr::Full(full) => StatusCode {
                name: full.name.unwrap_or_else(|| canonical_name(full.code)),
                code: full.code,
                description: full.description,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::StatusCode;

    #[test]
    fn test_name_derived_from_code() {
        assert_eq!(StatusCode::new(403).name, "Forbidden");
        assert_eq!(StatusCode::new(504).name, "Gateway Timeout");
    }

    #[test]
    fn test_unknown_code_gets_placeholder_name() {
        assert_eq!(StatusCode::new(799).name, "Status 799");
    }

    #[test]
    fn test_description_never_derived() {
        assert!(StatusCode::new(201).description.is_none());
    }

    #[test]
    fn test_equality_is_by_code_only() {
        let a = StatusCode::new(201).with_description("A");
        let b = StatusCode::named(201, "Created!").with_description("B");
        assert_eq!(a, b);
        assert_ne!(StatusCode::new(204), StatusCode::new(201));
    }

    #[test]
    fn test_deserialize_bare_number_and_object() {
        let bare: StatusCode = serde_yaml::from_str("429").unwrap();
        assert_eq!(bare.code, 429);
        assert_eq!(bare.name, "Too Many Requests");

        let full: StatusCode =
            serde_yaml::from_str("{ code: 299, name: Custom, description: d }").unwrap();
        assert_eq!(full.code, 299);
        assert_eq!(full.name, "Custom");
        assert_eq!(full.description.as_deref(), Some("d"));
    }
}
