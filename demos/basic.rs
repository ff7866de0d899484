//! Basic usage example

use envbind::EnvRecord;

#[derive(Debug, Default, EnvRecord)]
struct Config {
    #[env(key = "DATABASE_URL", required)]
    pub database_url: String,

    #[env(key = "API_KEY", required)]
    pub api_key: String,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("API_KEY", "secret-key-123");

    let mut config = Config::default();
    envbind::parse("", &mut config)?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  API Key: {}", config.api_key);

    Ok(())
}
