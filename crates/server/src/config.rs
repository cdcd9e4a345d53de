use config::ConfigError;
use serde::Deserialize;
use std::collections::HashMap;

const ENV_PREFIX: &str = "BLOG_";

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub security: SecuritySettings,
}

#[derive(Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub cors_origins: String,
}

#[derive(Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
}

#[derive(Deserialize, Clone)]
pub struct SecuritySettings {
    /// Key for bearer token signatures.
    pub token_secret: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        let env_map = collect_env_vars(std::env::vars());
        let env_json =
            serde_json::to_string(&env_map).map_err(|e| ConfigError::Foreign(Box::new(e)))?;

        let s = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.cors_origins", "*")?
            .set_default("database.url", "sqlite://data/blog.db")?
            .set_default("security.token_secret", "change_me_please")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name(&format!("config.{}", run_mode)).required(false))
            .add_source(config::File::from_str(&env_json, config::FileFormat::Json))
            .build()?;

        s.try_deserialize()
    }
}

/// `BLOG_SERVER__PORT=8080` becomes `server.port = "8080"`.
fn collect_env_vars(vars: impl Iterator<Item = (String, String)>) -> HashMap<String, String> {
    vars.filter(|(k, _)| k.starts_with(ENV_PREFIX))
        .map(|(k, v)| {
            let new_key = k
                .trim_start_matches(ENV_PREFIX)
                .replace("__", ".")
                .to_lowercase();
            (new_key, v)
        })
        .collect()
}
