//! Environment variable name resolution

/// Resolve the environment variable name for a field.
///
/// The local key is `key` when declared (even if empty), otherwise the field
/// name. A non-empty `prefix` is joined to it with `_`.
///
/// ```rust
/// use envbind::resolve_key;
///
/// assert_eq!(resolve_key("APP", Some("PORT"), "port"), "APP_PORT");
/// assert_eq!(resolve_key("", None, "port"), "port");
/// ```
pub fn resolve_key(prefix: &str, key: Option<&str>, name: &str) -> String {
    let local = key.unwrap_or(name);

    if prefix.is_empty() {
        return local.to_string();
    }

    format!("{prefix}_{local}")
}
