//! Environment lookup sources.
//!
//! The binder never reads `std::env` directly; it asks a [`Lookup`]. Tests
//! hand it a `HashMap`, applications use [`ProcessEnv`].

use std::collections::{BTreeMap, HashMap};
use std::env;
use std::hash::BuildHasher;

/// A key-value source of raw environment values.
///
/// `None` means the key is not set. `Some("")` is a set, empty value and is
/// bound as such.
pub trait Lookup {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The environment of the current process.
///
/// Values that are not valid UTF-8 are decoded lossily and still count as
/// set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Lookup for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl<S: BuildHasher> Lookup for HashMap<String, String, S> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Lookup for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: Lookup + ?Sized> Lookup for &T {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}

/// A [`Lookup`] backed by a closure. Created with [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

impl<F> Lookup for FromFn<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn lookup(&self, key: &str) -> Option<String> {
        (self.0)(key)
    }
}

/// Use a closure as a lookup source.
///
/// ```rust
/// use envbind::{from_fn, Lookup};
///
/// let lookup = from_fn(|key| (key == "PORT").then(|| "8080".to_string()));
/// assert_eq!(lookup.lookup("PORT").as_deref(), Some("8080"));
/// assert_eq!(lookup.lookup("HOST"), None);
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(&str) -> Option<String>,
{
    FromFn(f)
}
