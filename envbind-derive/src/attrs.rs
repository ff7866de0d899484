//! Attribute parsing for `#[env(...)]` annotations.
//!
//! This module extracts and validates binding metadata from struct fields
//! during macro expansion.

use syn::{Field, LitStr};

/// Parsed `#[env(...)]` attributes from a struct field.
///
/// Several `#[env]` attributes on one field are merged. Setting the same
/// option twice is an error.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Explicit lookup key.
    ///
    /// If `None`, the field identifier is used as written.
    pub key: Option<String>,

    /// Raw default value, converted like an environment value.
    pub default: Option<String>,

    /// Fail when neither the environment nor a default provides a value.
    pub required: bool,
}

impl FieldAttrs {
    /// Extract and parse `#[env(...)]` attributes from a struct field.
    ///
    /// Attributes other than `env` are left for other macros.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                // key = "..."
                if meta.path.is_ident("key") {
                    if attrs.key.is_some() {
                        return Err(meta.error("duplicate `key` in env attribute"));
                    }
                    let value: LitStr = meta.value()?.parse()?;
                    attrs.key = Some(value.value());
                    return Ok(());
                }

                // default = "..."
                if meta.path.is_ident("default") {
                    if attrs.default.is_some() {
                        return Err(meta.error("duplicate `default` in env attribute"));
                    }
                    let value: LitStr = meta.value()?.parse()?;
                    attrs.default = Some(value.value());
                    return Ok(());
                }

                // required
                if meta.path.is_ident("required") {
                    if attrs.required {
                        return Err(meta.error("duplicate `required` in env attribute"));
                    }
                    attrs.required = true;
                    return Ok(());
                }

                Err(meta.error("unsupported env attribute, expected `key`, `default` or `required`"))
            })?;
        }

        Ok(attrs)
    }
}
