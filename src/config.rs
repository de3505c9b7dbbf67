use config::{Config, ConfigError, Environment, File, Source};
use serde::Deserialize;

/// Main browser configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct BrowserConfig {
    /// Recipe API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

/// Settings for the recipe search API
#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Application id (can also be set via EDAMAM_APP_ID)
    pub app_id: Option<String>,
    /// Application key (can also be set via EDAMAM_APP_KEY)
    pub app_key: Option<String>,
    /// Base URL of the API, without the `/search` path
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Query term used for the paginated random listing
    #[serde(default = "default_random_query")]
    pub random_query: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            app_key: None,
            base_url: default_base_url(),
            random_query: default_random_query(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            timeout: default_timeout(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://api.edamam.com".to_string()
}

fn default_random_query() -> String {
    "random".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl BrowserConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with COOKIFY__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Credentials still unset afterwards are read from EDAMAM_APP_ID and
    /// EDAMAM_APP_KEY.
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }
}

impl ApiConfig {
    /// Fill missing credentials from the plain EDAMAM_* variables
    fn with_env_credentials(mut self) -> Self {
        if self.app_id.is_none() {
            self.app_id = std::env::var("EDAMAM_APP_ID").ok();
        }
        if self.app_key.is_none() {
            self.app_key = std::env::var("EDAMAM_APP_KEY").ok();
        }
        self
    }
}

/// Load configuration from file and environment variables
///
/// Environment variable format: COOKIFY__API__APP_ID
pub fn load_config() -> Result<BrowserConfig, ConfigError> {
    // Optional config file (can be missing)
    load_config_from(File::with_name("config").required(false))
}

/// Layer the environment over `file` and resolve credentials
fn load_config_from<S>(file: S) -> Result<BrowserConfig, ConfigError>
where
    S: Source + Send + Sync + 'static,
{
    // Values stay strings: numeric-looking ids such as "0123" must keep their digits.
    // Typed fields like `timeout` are still converted on deserialize.
    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: COOKIFY__API__APP_KEY
        .add_source(Environment::with_prefix("COOKIFY").separator("__"))
        .build()?;

    let mut config: BrowserConfig = settings.try_deserialize()?;
    config.api = config.api.with_env_credentials();
    Ok(config)
}
