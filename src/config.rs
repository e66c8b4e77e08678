use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

/// Prefix for environment overrides, e.g. `TOPSPIDER_BASE_URL`.
const ENV_PREFIX: &str = "TOPSPIDER";
/// Optional config file looked up in the working directory (`topspider.toml`).
const CONFIG_FILE: &str = "topspider";

/// The `SpiderConfig` struct holds the settings shared by the spider and the single-shot fetchers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpiderConfig {
    /// The listing URL that page offsets are appended to.
    pub base_url: String,
    /// The number of results per listing page.
    pub page_size: i64,
    /// Optional user agent. No `User-Agent` header is set when absent.
    pub user_agent: Option<String>,
}

impl Default for SpiderConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(crate::DEFAULT_BASE_URL),
            page_size: crate::DEFAULT_PAGE_SIZE,
            user_agent: None,
        }
    }
}

impl SpiderConfig {
    /// Loads the configuration from defaults, then `topspider.toml` if present,
    /// then `TOPSPIDER_*` environment variables.
    pub fn load() -> crate::Result<Self> {
        Self::load_from(
            Config::builder().add_source(File::with_name(CONFIG_FILE).required(false)),
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    /// Layers `env` over the sources already in `builder`.
    fn load_from(builder: ConfigBuilder<DefaultState>, env: Environment) -> crate::Result<Self> {
        let config = builder.add_source(env).build()?;

        Ok(config.try_deserialize()?)
    }
}
