//! Example demonstrating the call-time prefix

use envbind::EnvRecord;

#[derive(Debug, Default, EnvRecord)]
struct Config {
    // Environment variables will be prefixed: MYAPP_DATABASE_URL, MYAPP_PORT, etc.
    #[env(key = "DATABASE_URL", required)]
    pub database_url: String,

    #[env(key = "PORT", default = "8080")]
    pub port: u16,

    #[env(key = "DEBUG", default = "false")]
    pub debug: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("envbind=trace")),
        )
        .init();

    std::env::set_var("MYAPP_DATABASE_URL", "postgres://localhost/db");
    std::env::set_var("MYAPP_PORT", "3000");

    let config: Config = envbind::load("MYAPP")?;

    println!("Configuration with prefix 'MYAPP':");
    println!("  Database URL: {}", config.database_url);
    println!("  Port: {}", config.port);
    println!("  Debug: {}", config.debug);

    Ok(())
}
