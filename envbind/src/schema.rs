//! Field descriptors and the destination capability.
//!
//! A destination describes itself through [`EnvRecord::shape`]: either a
//! record with an ordered list of [`FieldSpec`]s, a bare scalar, or nothing at
//! all. The binder only ever talks to destinations through this interface, so
//! hand-written implementations work just as well as derived ones.

use std::fmt;

/// Declared kind of a record field.
///
/// Every variant except [`FieldKind::Unsupported`] has a matching [`Value`]
/// variant of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    String,
    /// Any other declared type, carried by name for diagnostics.
    Unsupported(&'static str),
}

impl FieldKind {
    /// Rust spelling of the kind, e.g. `"u16"` or `"String"`.
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "String",
            Self::Unsupported(name) => name,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One declared field of a destination record.
///
/// Built in `const` context by `#[derive(EnvRecord)]`:
///
/// ```rust
/// use envbind::{FieldKind, FieldSpec};
///
/// const PORT: FieldSpec = FieldSpec::new("port", FieldKind::U16)
///     .key("PORT")
///     .default_value("8080");
///
/// assert_eq!(PORT.default, Some("8080"));
/// assert!(!PORT.required);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field identifier as declared.
    pub name: &'static str,
    pub kind: FieldKind,
    /// Explicit lookup key. When `None` the declared name is used.
    pub key: Option<&'static str>,
    /// Raw fallback used when the environment has no value.
    pub default: Option<&'static str>,
    /// Absence of both an environment value and a default is an error.
    pub required: bool,
}

impl FieldSpec {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            key: None,
            default: None,
            required: false,
        }
    }

    pub const fn key(mut self, key: &'static str) -> Self {
        self.key = Some(key);
        self
    }

    pub const fn default_value(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// What a destination reports about itself before binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A record with its fields in declaration order. May be empty.
    Record(&'static [FieldSpec]),
    /// A bare value of the named type.
    Scalar(&'static str),
    /// No destination at all.
    Absent,
}

/// A converted field value, ready to be assigned.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    String(String),
}

impl Value {
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Bool(_) => FieldKind::Bool,
            Self::I8(_) => FieldKind::I8,
            Self::I16(_) => FieldKind::I16,
            Self::I32(_) => FieldKind::I32,
            Self::I64(_) => FieldKind::I64,
            Self::Isize(_) => FieldKind::Isize,
            Self::U8(_) => FieldKind::U8,
            Self::U16(_) => FieldKind::U16,
            Self::U32(_) => FieldKind::U32,
            Self::U64(_) => FieldKind::U64,
            Self::Usize(_) => FieldKind::Usize,
            Self::F32(_) => FieldKind::F32,
            Self::F64(_) => FieldKind::F64,
            Self::String(_) => FieldKind::String,
        }
    }
}

/// A destination the binder can populate.
///
/// Usually derived:
///
/// ```rust
/// use envbind::{EnvRecord, Shape};
///
/// #[derive(Default, EnvRecord)]
/// struct Config {
///     #[env(key = "PORT", default = "8080")]
///     port: u16,
/// }
///
/// let config = Config::default();
/// assert!(matches!(config.shape(), Shape::Record(fields) if fields.len() == 1));
/// ```
///
/// # Contract
///
/// The binder calls [`assign`](EnvRecord::assign) only for indices of
/// [`Shape::Record`] fields with a supported kind, and always with a
/// [`Value`] of exactly that kind. Implementations may ignore anything else.
pub trait EnvRecord {
    fn shape(&self) -> Shape;

    fn assign(&mut self, index: usize, value: Value);
}

impl<T: EnvRecord + ?Sized> EnvRecord for Box<T> {
    fn shape(&self) -> Shape {
        (**self).shape()
    }

    fn assign(&mut self, index: usize, value: Value) {
        (**self).assign(index, value);
    }
}

impl<T: EnvRecord> EnvRecord for Option<T> {
    fn shape(&self) -> Shape {
        match self {
            Some(inner) => inner.shape(),
            None => Shape::Absent,
        }
    }

    fn assign(&mut self, index: usize, value: Value) {
        if let Some(inner) = self {
            inner.assign(index, value);
        }
    }
}

// Bare values are valid `EnvRecord`s so that passing one is a runtime
// `InvalidDestination` rather than a type error.
macro_rules! scalar_destination {
    ($($ty:ty),* $(,)?) => {
        $(
            impl EnvRecord for $ty {
                fn shape(&self) -> Shape {
                    Shape::Scalar(stringify!($ty))
                }

                fn assign(&mut self, _index: usize, _value: Value) {}
            }
        )*
    };
}

scalar_destination!(
    bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, String, char, (),
);
