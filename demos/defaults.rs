//! Example demonstrating defaults and required fields

use envbind::{BindError, EnvRecord};

#[derive(Debug, Default, EnvRecord)]
struct Config {
    #[env(key = "WORKERS", default = "4")]
    pub workers: usize,

    #[env(key = "RATIO", default = "0.75")]
    pub ratio: f32,

    #[env(key = "VERBOSE", default = "f")]
    pub verbose: bool,

    // The default wins over `required` when the variable is missing
    #[env(key = "REGION", required, default = "eu-west-1")]
    pub region: String,

    #[env(key = "TOKEN", required)]
    pub token: String,
}

fn main() -> anyhow::Result<()> {
    std::env::remove_var("TOKEN");

    match envbind::load::<Config>("") {
        Err(BindError::RequiredMissing { key }) => println!("Missing as expected: {key}"),
        other => anyhow::bail!("unexpected result: {other:?}"),
    }

    std::env::set_var("TOKEN", "t0k3n");
    let config: Config = envbind::load("")?;

    println!("Configuration with defaults:");
    println!("  Workers: {}", config.workers);
    println!("  Ratio: {}", config.ratio);
    println!("  Verbose: {}", config.verbose);
    println!("  Region: {}", config.region);
    println!("  Token set: {}", !config.token.is_empty());

    Ok(())
}
