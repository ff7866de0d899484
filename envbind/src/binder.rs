//! Destination validation and field binding

use crate::de;
use crate::error::BindError;
use crate::key::resolve_key;
use crate::lookup::{Lookup, ProcessEnv};
use crate::schema::{EnvRecord, FieldSpec, Shape, Value};

/// Check that `dest` is a record and return its fields.
///
/// This is the only place an [`BindError::InvalidDestination`] comes from.
pub fn validate<D>(dest: &D) -> Result<&'static [FieldSpec], BindError>
where
    D: EnvRecord + ?Sized,
{
    match dest.shape() {
        Shape::Record(fields) => Ok(fields),
        Shape::Scalar(type_name) => Err(BindError::invalid_destination(type_name)),
        Shape::Absent => Err(BindError::invalid_destination("nothing")),
    }
}

/// Binds environment values into [`EnvRecord`] destinations.
///
/// The lookup source is injected, so tests can bind against a fixed map:
///
/// ```rust
/// use std::collections::HashMap;
/// use envbind::{Binder, EnvRecord};
///
/// #[derive(Debug, Default, EnvRecord)]
/// struct Config {
///     #[env(key = "HOST")]
///     host: String,
///     #[env(key = "PORT", default = "8080")]
///     port: u16,
/// }
///
/// let vars = HashMap::from([("APP_HOST".to_string(), "localhost".to_string())]);
/// let binder = Binder::with_lookup(vars);
///
/// let mut config = Config::default();
/// binder.parse("APP", &mut config).unwrap();
/// assert_eq!(config.host, "localhost");
/// assert_eq!(config.port, 8080);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Binder<L = ProcessEnv> {
    lookup: L,
}

impl Binder {
    /// Binder reading the process environment.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: Lookup> Binder<L> {
    pub fn with_lookup(lookup: L) -> Self {
        Self { lookup }
    }

    /// Populate `dest` from the environment.
    ///
    /// Every field is resolved and converted before anything is assigned, so
    /// on error `dest` is left exactly as it was.
    ///
    /// # Errors
    ///
    /// - [`BindError::InvalidDestination`] if `dest` is not a record
    /// - [`BindError::RequiredMissing`] if a required field has no value and no default
    /// - [`BindError::Conversion`] if a value cannot be parsed into its field's kind
    /// - [`BindError::UnsupportedType`] if a field's type cannot be bound
    pub fn parse<D>(&self, prefix: &str, dest: &mut D) -> Result<(), BindError>
    where
        D: EnvRecord + ?Sized,
    {
        let fields = validate(&*dest)?;
        let values = self.bind(prefix, fields)?;

        for (index, value) in values.into_iter().enumerate() {
            dest.assign(index, value);
        }

        tracing::debug!(prefix, fields = fields.len(), "Bound environment record");
        Ok(())
    }

    /// Construct a `T` with [`Default`] and populate it.
    ///
    /// # Errors
    ///
    /// Same as [`Binder::parse`].
    pub fn load<T>(&self, prefix: &str) -> Result<T, BindError>
    where
        T: EnvRecord + Default,
    {
        let mut dest = T::default();
        self.parse(prefix, &mut dest)?;
        Ok(dest)
    }

    /// Resolve and convert every field, stopping at the first failure.
    fn bind(&self, prefix: &str, fields: &[FieldSpec]) -> Result<Vec<Value>, BindError> {
        fields
            .iter()
            .map(|field| {
                let key = resolve_key(prefix, field.key, field.name);
                let raw = self.effective_value(&key, field)?;
                de::convert(&key, field.kind, raw)
            })
            .collect()
    }

    fn effective_value(&self, key: &str, field: &FieldSpec) -> Result<String, BindError> {
        if let Some(value) = self.lookup.lookup(key) {
            tracing::trace!(key, field = field.name, "Using environment value");
            return Ok(value);
        }

        match field.default {
            Some(default) if !default.is_empty() => {
                tracing::trace!(key, field = field.name, "Using default value");
                Ok(default.to_string())
            }
            _ if field.required => Err(BindError::missing(key)),
            _ => {
                tracing::trace!(key, field = field.name, "Not set, using empty value");
                Ok(String::new())
            }
        }
    }
}

/// Populate `dest` from the process environment.
///
/// See [`Binder::parse`].
pub fn parse<D>(prefix: &str, dest: &mut D) -> Result<(), BindError>
where
    D: EnvRecord + ?Sized,
{
    Binder::new().parse(prefix, dest)
}

/// Load a `T` from the process environment.
///
/// See [`Binder::load`].
pub fn load<T>(prefix: &str) -> Result<T, BindError>
where
    T: EnvRecord + Default,
{
    Binder::new().load(prefix)
}
