use serde::Serialize;
use std::fmt;

/// Validation constraint advertised for a documented property.
///
/// Constraints are validated at construction time and never silently
/// normalized: a range must carry at least one bound with `min <= max`, and a
/// list must carry at least one value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PropertyConstraint {
    #[serde(rename_all = "camelCase")]
    Range {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    #[serde(rename_all = "camelCase")]
    List { name: String, values: Vec<String> },
}

impl PropertyConstraint {
    /// Range constraint over a numeric property. At least one bound is
    /// required and `min` must not exceed `max`.
    pub fn range(
        name: impl Into<String>,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<Self, ConstraintError> {
        let name = name.into();
        match (min, max) {
            (None, None) => Err(ConstraintError::MissingBounds { name }),
            (Some(lo), Some(hi)) if lo > hi => {
                Err(ConstraintError::InvertedBounds { name, min: lo, max: hi })
            }
            _ => Ok(PropertyConstraint::Range { name, min, max }),
        }
    }

    /// List constraint enumerating the allowed values. The list must be
    /// non-empty.
    pub fn list(
        name: impl Into<String>,
        values: Vec<String>,
    ) -> Result<Self, ConstraintError> {
        let name = name.into();
        if values.is_empty() {
            return Err(ConstraintError::EmptyValueList { name });
        }
        Ok(PropertyConstraint::List { name, values })
    }

    pub fn name(&self) -> &str {
        match self {
            PropertyConstraint::Range { name, .. } => name,
            PropertyConstraint::List { name, .. } => name,
        }
    }
}

/// Construction error for [`PropertyConstraint`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintError {
    /// A range constraint with neither `min` nor `max`.
    MissingBounds { name: String },
    /// A range constraint where `min > max`.
    InvertedBounds { name: String, min: f64, max: f64 },
    /// A list constraint with no values.
    EmptyValueList { name: String },
}

impl fmt::Display for ConstraintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintError::MissingBounds { name } => {
                write!(
                    f,
                    "Range constraint '{name}' must define at least one of min/max"
                )
            }
            ConstraintError::InvertedBounds { name, min, max } => {
                write!(
                    f,
                    "Range constraint '{name}' has min {min} greater than max {max}"
                )
            }
            ConstraintError::EmptyValueList { name } => {
                write!(f, "List constraint '{name}' must define at least one value")
            }
        }
    }
}

impl std::error::Error for ConstraintError {}

#[cfg(test)]
mod tests {
    use super::{ConstraintError, PropertyConstraint};

    #[test]
    fn test_range_with_both_bounds() {
        let c = PropertyConstraint::range("Age", Some(0.0), Some(120.0)).unwrap();
        match c {
            PropertyConstraint::Range { min, max, .. } => {
                assert_eq!(min, Some(0.0));
                assert_eq!(max, Some(120.0));
            }
            _ => panic!("expected range"),
        }
    }

    #[test]
    fn test_range_with_single_bound() {
        assert!(PropertyConstraint::range("X", Some(10.0), None).is_ok());
        assert!(PropertyConstraint::range("X", None, Some(10.0)).is_ok());
    }

    #[test]
    fn test_range_without_bounds_fails() {
        assert_eq!(
            PropertyConstraint::range("X", None, None),
            Err(ConstraintError::MissingBounds { name: "X".into() })
        );
    }

    #[test]
    fn test_range_with_inverted_bounds_fails() {
        assert!(matches!(
            PropertyConstraint::range("X", Some(10.0), Some(9.0)),
            Err(ConstraintError::InvertedBounds { .. })
        ));
    }

    #[test]
    fn test_list_requires_values() {
        assert_eq!(
            PropertyConstraint::list("X", vec![]),
            Err(ConstraintError::EmptyValueList { name: "X".into() })
        );
        let c = PropertyConstraint::list("X", vec!["a".into(), "b".into()]).unwrap();
        match c {
            PropertyConstraint::List { values, .. } => assert_eq!(values, vec!["a", "b"]),
            _ => panic!("expected list"),
        }
    }
}
