use serde::Deserialize;

/// Endpoint used when no store URL is configured. Requests to it fail, which
/// sends reads to the mock dataset and writes to session-only records.
pub const PLACEHOLDER_STORE_URL: &str = "http://placeholder.invalid";
pub const PLACEHOLDER_STORE_KEY: &str = "placeholder";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub store: StoreSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreSettings {
    pub url: String,
    pub key: String,
    pub table: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

impl StoreSettings {
    pub fn endpoint(&self) -> &str {
        match self.url.trim() {
            "" => PLACEHOLDER_STORE_URL,
            url => url,
        }
    }

    pub fn access_key(&self) -> &str {
        match self.key.trim() {
            "" => PLACEHOLDER_STORE_KEY,
            key => key,
        }
    }
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    build_app_config(
        config::Environment::with_prefix("VPP"),
        non_empty_env("SUPABASE_URL"),
        non_empty_env("SUPABASE_ANON_KEY"),
    )
}

fn build_app_config(
    environment: config::Environment,
    store_url: Option<String>,
    store_key: Option<String>,
) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .set_default("store.url", PLACEHOLDER_STORE_URL)?
        .set_default("store.key", PLACEHOLDER_STORE_KEY)?
        .set_default("store.table", "customers")?
        .set_default("server.bind", "0.0.0.0:8080")?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(environment.prefix_separator("__").separator("__"))
        .set_override_option("store.url", store_url)?
        .set_override_option("store.key", store_key)?
        .build()?;

    Ok(settings.try_deserialize()?)
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
