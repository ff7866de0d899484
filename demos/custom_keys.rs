//! Example demonstrating explicit keys versus declared field names

use envbind::EnvRecord;

#[derive(Debug, Default, EnvRecord)]
#[allow(non_snake_case)]
struct Config {
    // Looked up as REDIS_URL
    #[env(key = "REDIS_URL")]
    pub cache_url: String,

    // No key: looked up by its declared name, ListenAddr
    pub ListenAddr: String,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("REDIS_URL", "redis://localhost:6379");
    std::env::set_var("ListenAddr", "127.0.0.1:8080");

    let config: Config = envbind::load("")?;

    println!("Configuration with custom keys:");
    println!("  Cache URL: {}", config.cache_url);
    println!("  Listen address: {}", config.ListenAddr);

    Ok(())
}
