//! Error types for environment variable binding

use crate::schema::FieldKind;
use std::num::{ParseFloatError, ParseIntError};

/// Errors that can occur when binding environment variables into a record.
///
/// Every failure is structural (a bad destination, a bad schema or a bad
/// value) and stops the binding immediately. Raw values never appear in the
/// messages since they are frequently secrets.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// The destination is not a record.
    ///
    /// Raised before any field is looked up. `found` describes what was
    /// passed instead (a scalar type name, or `"nothing"`).
    #[error("destination must be a mutable reference to a record, got {found}")]
    InvalidDestination {
        /// Description of the rejected destination
        found: String,
    },

    /// A required field has neither an environment value nor a default.
    #[error("environment variable '{key}' is required but not set")]
    RequiredMissing {
        /// Resolved key that was looked up
        key: String,
    },

    /// The effective raw value could not be converted to the field's kind.
    #[error("failed to parse environment variable '{key}' as {kind}: {source}")]
    Conversion {
        /// Resolved key the value came from
        key: String,
        /// Declared kind of the field
        kind: FieldKind,
        /// Underlying parse failure
        source: ConversionError,
    },

    /// The field's declared type is outside the supported primitive set.
    #[error("unsupported field type {kind} for environment variable '{key}'")]
    UnsupportedType {
        /// Resolved key of the offending field
        key: String,
        /// Declared type of the field
        kind: FieldKind,
    },
}

impl BindError {
    /// Create a missing environment variable error
    pub fn missing(key: impl Into<String>) -> Self {
        Self::RequiredMissing { key: key.into() }
    }

    /// Create an invalid destination error
    pub fn invalid_destination(found: impl Into<String>) -> Self {
        Self::InvalidDestination {
            found: found.into(),
        }
    }

    /// Resolved key the error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::InvalidDestination { .. } => None,
            Self::RequiredMissing { key }
            | Self::Conversion { key, .. }
            | Self::UnsupportedType { key, .. } => Some(key),
        }
    }
}

/// Why a raw string could not be converted into a field value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("invalid boolean literal")]
    Bool,

    #[error(transparent)]
    Int(#[from] ParseIntError),

    #[error(transparent)]
    Float(#[from] ParseFloatError),

    #[error("value out of range for the declared precision")]
    FloatRange,

    #[error("sign prefix not permitted for unsigned integer")]
    Sign,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_message_names_key() {
        let err = BindError::missing("APP_PORT");
        assert_eq!(
            err.to_string(),
            "environment variable 'APP_PORT' is required but not set"
        );
        assert_eq!(err.key(), Some("APP_PORT"));
    }

    #[test]
    fn test_conversion_message_hides_value() {
        let source = "abc".parse::<u8>().unwrap_err();
        let err = BindError::Conversion {
            key: "PORT".to_string(),
            kind: FieldKind::U8,
            source: source.into(),
        };

        let message = err.to_string();
        assert!(message.contains("PORT"));
        assert!(message.contains("u8"));
        assert!(!message.contains("abc"));
    }

    #[test]
    fn test_conversion_exposes_source() {
        use std::error::Error;

        let err = BindError::Conversion {
            key: "FLAG".to_string(),
            kind: FieldKind::Bool,
            source: ConversionError::Bool,
        };
        assert_eq!(err.source().unwrap().to_string(), "invalid boolean literal");
    }

    #[test]
    fn test_unsupported_type_names_kind() {
        let err = BindError::UnsupportedType {
            key: "TAGS".to_string(),
            kind: FieldKind::Unsupported("Vec<String>"),
        };
        assert!(err.to_string().contains("Vec<String>"));
    }

    #[test]
    fn test_invalid_destination_has_no_key() {
        let err = BindError::invalid_destination("i32");
        assert_eq!(err.key(), None);
        assert!(err.to_string().contains("i32"));
    }
}
