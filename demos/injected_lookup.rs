//! Example binding from a fixed map instead of the process environment

use envbind::{Binder, EnvRecord};
use std::collections::BTreeMap;

#[derive(Debug, Default, EnvRecord)]
struct Limits {
    #[env(key = "MAX_BODY", default = "1048576")]
    pub max_body: u64,

    #[env(key = "TIMEOUT_SECS", required)]
    pub timeout_secs: u32,

    #[env(key = "BACKOFF", default = "1.5")]
    pub backoff: f64,
}

fn main() -> anyhow::Result<()> {
    let vars = BTreeMap::from([
        ("LIMITS_TIMEOUT_SECS".to_string(), "30".to_string()),
        ("LIMITS_BACKOFF".to_string(), "2".to_string()),
    ]);
    let binder = Binder::with_lookup(vars);

    let limits: Limits = binder.load("LIMITS")?;
    println!("Limits: {limits:?}");

    // A malformed value is an error, never a silent zero
    let bad = Binder::with_lookup(BTreeMap::from([(
        "LIMITS_TIMEOUT_SECS".to_string(),
        "thirty".to_string(),
    )]));
    if let Err(err) = bad.load::<Limits>("LIMITS") {
        println!("Rejected: {err}");
    }

    Ok(())
}
