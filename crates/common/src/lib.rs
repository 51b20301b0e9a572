//! Common types for the FDSN WADL parser
//!
//! This crate contains the shared parameter schema data model and error
//! types used across the parser and CLI components.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub mod time;

/// Errors that can occur while parsing a WADL document
#[derive(Error, Debug)]
pub enum WadlError {
    /// The input is not well-formed XML.
    #[error("Malformed WADL document: {0}")]
    Malformed(#[from] roxmltree::Error),

    /// A declared default value cannot be coerced to the parameter's type.
    #[error("Invalid default value {raw:?} for parameter '{parameter}' (expected {expected})")]
    InvalidDefaultValue {
        parameter: String,
        raw: String,
        expected: ParamType,
    },

    /// A date/time string is not ISO-8601-like.
    #[error("Invalid timestamp: {0:?}")]
    InvalidTimestamp(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for WADL parsing operations
pub type Result<T> = std::result::Result<T, WadlError>;

/// Kind of FDSN web service a WADL document describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    DataSelect,
    Station,
    Event,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::DataSelect => write!(f, "dataselect"),
            ResourceKind::Station => write!(f, "station"),
            ResourceKind::Event => write!(f, "event"),
        }
    }
}

/// Value type of a query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    /// ISO-8601-like date/time value.
    Timestamp,
    /// Free text; enumerated parameters also use this type, with their
    /// allowed values carried in [`ParamDescriptor::options`].
    Text,
    /// Decimal number.
    FloatingPoint,
    /// `true`/`1` or `false`/`0`.
    Boolean,
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamType::Timestamp => write!(f, "timestamp"),
            ParamType::Text => write!(f, "text"),
            ParamType::FloatingPoint => write!(f, "float"),
            ParamType::Boolean => write!(f, "boolean"),
        }
    }
}

/// A typed parameter value, used for declared defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Timestamp(chrono::DateTime<chrono::Utc>),
    Text(String),
    FloatingPoint(f64),
    Boolean(bool),
}

impl ParamValue {
    /// Coerce raw attribute text to a value of the given type.
    ///
    /// Returns `None` when the text does not parse as the type; the caller
    /// decides whether that is fatal.
    pub fn coerce(ty: ParamType, raw: &str) -> Option<Self> {
        match ty {
            ParamType::Timestamp => time::parse_timestamp(raw).ok().map(ParamValue::Timestamp),
            ParamType::Text => Some(ParamValue::Text(raw.to_string())),
            ParamType::FloatingPoint => raw.parse::<f64>().ok().map(ParamValue::FloatingPoint),
            ParamType::Boolean => match raw {
                "true" | "1" => Some(ParamValue::Boolean(true)),
                "false" | "0" => Some(ParamValue::Boolean(false)),
                _ => None,
            },
        }
    }
}

/// Schema of one query parameter discovered in a WADL document
///
/// Keyed by `name` (the canonical long form) in the parser's output
/// mapping; short-form aliases never appear as keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamDescriptor {
    /// Canonical long-form parameter name.
    pub name: String,

    /// Value type; inferred when the document omits one, never absent.
    pub param_type: ParamType,

    /// Whether the document marks the parameter as required.
    pub required: bool,

    /// Declared default, coerced to `param_type`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<ParamValue>,

    /// Allowed values for enumerated parameters, in document order.
    /// Empty when the parameter is not enumerated.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub options: Vec<String>,

    /// Short human-readable summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_title: Option<String>,

    /// Longer free-text documentation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

impl ParamDescriptor {
    /// Create a descriptor with the given name and type and no other
    /// information.
    pub fn new(name: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            name: name.into(),
            param_type,
            required: false,
            default_value: None,
            options: Vec::new(),
            doc_title: None,
            doc: None,
        }
    }
}

/// A non-fatal notice that a recognized service's WADL omits canonical
/// parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Service kind the check ran against.
    pub kind: ResourceKind,

    /// Missing canonical parameter names, in reference-set order.
    pub missing: Vec<String>,
}

impl Diagnostic {
    /// Human-readable message enumerating every missing parameter name.
    pub fn message(&self) -> String {
        format!(
            "The {} service WADL does not declare the following canonical parameters: {}",
            self.kind,
            self.missing.join(", ")
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_boolean_tokens() {
        assert_eq!(
            ParamValue::coerce(ParamType::Boolean, "true"),
            Some(ParamValue::Boolean(true))
        );
        assert_eq!(
            ParamValue::coerce(ParamType::Boolean, "1"),
            Some(ParamValue::Boolean(true))
        );
        assert_eq!(
            ParamValue::coerce(ParamType::Boolean, "false"),
            Some(ParamValue::Boolean(false))
        );
        assert_eq!(
            ParamValue::coerce(ParamType::Boolean, "0"),
            Some(ParamValue::Boolean(false))
        );
        assert_eq!(ParamValue::coerce(ParamType::Boolean, "yes"), None);
    }

    #[test]
    fn test_coerce_float() {
        assert_eq!(
            ParamValue::coerce(ParamType::FloatingPoint, "0.0"),
            Some(ParamValue::FloatingPoint(0.0))
        );
        assert_eq!(ParamValue::coerce(ParamType::FloatingPoint, "abc"), None);
    }

    #[test]
    fn test_coerce_text_passes_through() {
        assert_eq!(
            ParamValue::coerce(ParamType::Text, "B"),
            Some(ParamValue::Text("B".to_string()))
        );
    }

    #[test]
    fn test_diagnostic_message_contains_all_names() {
        let diag = Diagnostic {
            kind: ResourceKind::DataSelect,
            missing: vec!["quality".to_string(), "longestonly".to_string()],
        };
        let msg = diag.message();
        assert!(msg.contains("quality"));
        assert!(msg.contains("longestonly"));
        assert!(msg.contains("dataselect"));
    }
}
