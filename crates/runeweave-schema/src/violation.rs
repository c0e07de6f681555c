//! Structured validation violations.

use std::fmt;

use jsonschema::error::ValidationErrorKind;
use jsonschema::ValidationError;

/// The broad constraint category a violation falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// A `required` property is absent.
    RequiredPropertyMissing,
    /// A string does not match its `pattern` (including `propertyNames`).
    PatternMismatch,
    /// A number is outside its `minimum`/`maximum`/`multipleOf` bounds.
    RangeViolation,
    /// A value is not a member of its `enum` (or `const`).
    EnumMismatch,
    /// A value has the wrong JSON type.
    TypeMismatch,
    /// An object carries a property the schema does not declare.
    AdditionalProperty,
    /// A string violates `minLength`/`maxLength`.
    LengthViolation,
    /// A collection violates `minItems`/`maxItems`/`minProperties`/
    /// `maxProperties`.
    CardinalityViolation,
    /// The input text is not valid JSON at all.
    MalformedJson,
    /// Any other keyword (`anyOf`, `oneOf`, `format`, ...).
    Other,
}

impl ViolationKind {
    fn from_error_kind(kind: &ValidationErrorKind) -> Self {
        match kind {
            ValidationErrorKind::Required { .. } => ViolationKind::RequiredPropertyMissing,
            ValidationErrorKind::Pattern { .. } | ValidationErrorKind::PropertyNames { .. } => {
                ViolationKind::PatternMismatch
            }
            ValidationErrorKind::Minimum { .. }
            | ValidationErrorKind::Maximum { .. }
            | ValidationErrorKind::ExclusiveMinimum { .. }
            | ValidationErrorKind::ExclusiveMaximum { .. }
            | ValidationErrorKind::MultipleOf { .. } => ViolationKind::RangeViolation,
            ValidationErrorKind::Enum { .. } | ValidationErrorKind::Constant { .. } => {
                ViolationKind::EnumMismatch
            }
            ValidationErrorKind::Type { .. } => ViolationKind::TypeMismatch,
            ValidationErrorKind::AdditionalProperties { .. }
            | ValidationErrorKind::UnevaluatedProperties { .. } => {
                ViolationKind::AdditionalProperty
            }
            ValidationErrorKind::MinLength { .. } | ValidationErrorKind::MaxLength { .. } => {
                ViolationKind::LengthViolation
            }
            ValidationErrorKind::MinItems { .. }
            | ValidationErrorKind::MaxItems { .. }
            | ValidationErrorKind::MinProperties { .. }
            | ValidationErrorKind::MaxProperties { .. } => ViolationKind::CardinalityViolation,
            _ => ViolationKind::Other,
        }
    }
}

/// One violated constraint, with enough context to name the offending
/// field and the expectation in an assertion message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer to the violating value in the instance.
    pub instance_path: String,
    /// JSON Pointer to the constraint within the schema.
    pub schema_path: String,
    /// Broad constraint category.
    pub kind: ViolationKind,
    /// Human-readable description.
    pub message: String,
}

impl Violation {
    /// Builds an owned violation from a borrowed `jsonschema` error.
    pub fn from_validation_error(error: &ValidationError<'_>) -> Self {
        Self {
            instance_path: error.instance_path.to_string(),
            schema_path: error.schema_path.to_string(),
            kind: ViolationKind::from_error_kind(&error.kind),
            message: error.to_string(),
        }
    }

    /// Builds the single violation used when input text is not JSON.
    pub fn malformed_json(error: &serde_json::Error) -> Self {
        Self {
            instance_path: String::new(),
            schema_path: String::new(),
            kind: ViolationKind::MalformedJson,
            message: format!("document is not valid JSON: {error}"),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// Renders a violation list one per line, for error messages and logs.
pub fn render_violations(violations: &[Violation]) -> String {
    let mut rendered = String::new();
    for (index, violation) in violations.iter().enumerate() {
        if index > 0 {
            rendered.push('\n');
        }
        rendered.push_str("  ");
        rendered.push_str(&violation.to_string());
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_marks_root_violations() {
        let violation = Violation {
            instance_path: String::new(),
            schema_path: "/required".to_string(),
            kind: ViolationKind::RequiredPropertyMissing,
            message: r#""version" is a required property"#.to_string(),
        };
        assert!(violation.to_string().starts_with("(root):"));
    }

    #[test]
    fn display_includes_instance_path() {
        let violation = Violation {
            instance_path: "/dieTypes/0/faces".to_string(),
            schema_path: "/definitions/DieType/properties/faces/minimum".to_string(),
            kind: ViolationKind::RangeViolation,
            message: "1 is less than the minimum of 2".to_string(),
        };
        let rendered = violation.to_string();
        assert!(rendered.contains("/dieTypes/0/faces"));
        assert!(rendered.contains("minimum of 2"));
    }

    #[test]
    fn render_joins_with_newlines() {
        let violations = vec![
            Violation {
                instance_path: String::new(),
                schema_path: String::new(),
                kind: ViolationKind::Other,
                message: "first".to_string(),
            },
            Violation {
                instance_path: "/a".to_string(),
                schema_path: String::new(),
                kind: ViolationKind::Other,
                message: "second".to_string(),
            },
        ];
        let rendered = render_violations(&violations);
        assert_eq!(rendered.lines().count(), 2);
    }
}
