//! Bind environment variables into typed configuration structs
//!
//! `envbind` populates a struct from the environment, one field at a time, using
//! per-field metadata: an optional lookup key, an optional default and an optional
//! `required` marker. Each value is converted into the field's declared primitive
//! type.
//!
//! # Features
//!
//! - **Declarative**: Field metadata with `#[derive(EnvRecord)]` and `#[env(...)]`
//! - **Injectable lookup**: Bind from the process environment, a map or a closure
//! - **Prefixes**: One prefix per call, applied to every key as `PREFIX_KEY`
//! - **Atomic**: On error the destination is left untouched
//!
//! # Supported Field Types
//!
//! `bool`, `i8`, `i16`, `i32`, `i64`, `isize`, `u8`, `u16`, `u32`, `u64`, `usize`,
//! `f32`, `f64` and `String`. Fields of any other type are reported as
//! [`BindError::UnsupportedType`] when bound.
//!
//! Booleans accept `1 t T TRUE true True` and `0 f F FALSE false False`.
//! Unsigned integers take no sign prefix. Floats that overflow the declared
//! precision are rejected unless written as `inf` or `infinity`.
//!
//! # Example
//!
//! ```rust
//! use envbind::EnvRecord;
//!
//! #[derive(Debug, Default, EnvRecord)]
//! struct Config {
//!     #[env(key = "DATABASE_URL", required)]
//!     pub database_url: String,
//!
//!     #[env(key = "PORT", default = "8080")]
//!     pub port: u16,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("MYAPP_DATABASE_URL", "postgres://localhost/db");
//! let mut config = Config::default();
//! envbind::parse("MYAPP", &mut config)?;
//! #     assert_eq!(config.database_url, "postgres://localhost/db");
//! #     assert_eq!(config.port, 8080);
//! #     Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[env(key = "NAME")]`
//!
//! Look the field up under `NAME` instead of its declared name. Without it,
//! the field identifier is used exactly as written.
//!
//! ```rust
//! # use envbind::EnvRecord;
//! #[derive(Default, EnvRecord)]
//! pub struct Config {
//!     // Load from REDIS_URL environment variable
//!     #[env(key = "REDIS_URL")]
//!     pub redis_connection_string: String,
//! }
//! ```
//!
//! ## `#[env(default = "value")]`
//!
//! Raw value used when the variable is not set. It goes through the same
//! conversion as environment values. An empty default counts as no default.
//!
//! ```rust
//! # use envbind::EnvRecord;
//! #[derive(Default, EnvRecord)]
//! struct Config {
//!     #[env(default = "10")]
//!     pub max_connections: u32,
//!
//!     #[env(default = "false")]
//!     pub enable_tls: bool,
//! }
//! # fn main() -> anyhow::Result<()> {
//! #     let config: Config = envbind::load("")?;
//! #     assert_eq!(config.max_connections, 10);
//! #     Ok(())
//! # }
//! ```
//!
//! ## `#[env(required)]`
//!
//! Fail with [`BindError::RequiredMissing`] when the variable is not set and
//! there is no default. A default always wins over `required`. Fields that are
//! neither required nor defaulted are bound from the empty string, which is
//! fine for `String` and a conversion error for everything else.

mod binder;
mod de;
mod error;
mod key;
mod lookup;
mod schema;

pub use binder::{load, parse, validate, Binder};
pub use de::{convert, parse_bool};
pub use envbind_derive::EnvRecord;
pub use error::{BindError, ConversionError};
pub use key::resolve_key;
pub use lookup::{from_fn, FromFn, Lookup, ProcessEnv};
pub use schema::{EnvRecord, FieldKind, FieldSpec, Shape, Value};
