//! Frontend configuration.
//!
//! The defaults ship inside the wasm module as TOML. The API base URL can be
//! fixed at build time with `EVDMS_API_URL`; when it is empty the URL is
//! derived from the page location (same host, `fallback_port`).

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
fallback_port = 8080

[ui]
default_page_size = 10
page_size_options = [10, 20, 50, 100]
search_debounce_ms = 300
low_stock_threshold = 5
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid frontend config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid frontend config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct FrontendConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_port")]
    pub fallback_port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    pub search_debounce_ms: u32,
    pub low_stock_threshold: i64,
}

fn default_port() -> u16 {
    8080
}

impl FrontendConfig {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut config: FrontendConfig = toml::from_str(text)?;
        config.validate()?;
        config.api.base_url = config.api.base_url.trim().trim_end_matches('/').to_string();
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.default_page_size == 0 {
            return Err(ConfigError::Invalid("ui.default_page_size must be positive".into()));
        }
        if self.ui.page_size_options.iter().any(|&n| n == 0) {
            return Err(ConfigError::Invalid("ui.page_size_options must be positive".into()));
        }
        Ok(())
    }

    /// Page sizes for the pagination drop-down, always containing the default.
    pub fn page_size_options(&self) -> Vec<usize> {
        let mut options = self.ui.page_size_options.clone();
        if !options.contains(&self.ui.default_page_size) {
            options.push(self.ui.default_page_size);
        }
        options.sort_unstable();
        options.dedup();
        options
    }

    /// Explicit base URL, or `{protocol}//{hostname}:{fallback_port}`.
    pub fn resolve_base_url(&self, protocol: &str, hostname: &str) -> String {
        if !self.api.base_url.is_empty() {
            return self.api.base_url.clone();
        }
        format!("{}//{}:{}", protocol, hostname, self.api.fallback_port)
    }
}

fn load() -> FrontendConfig {
    let mut config = match FrontendConfig::parse(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            FrontendConfig {
                api: ApiConfig { base_url: String::new(), fallback_port: default_port() },
                ui: UiConfig {
                    default_page_size: 10,
                    page_size_options: vec![10, 20, 50],
                    search_debounce_ms: 300,
                    low_stock_threshold: 5,
                },
            }
        }
    };
    if let Some(url) = option_env!("EVDMS_API_URL") {
        config.api.base_url = url.trim().trim_end_matches('/').to_string();
    }
    config
}

pub static CONFIG: Lazy<FrontendConfig> = Lazy::new(load);

pub fn config() -> &'static FrontendConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_parse() {
        let config = FrontendConfig::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.ui.default_page_size, 10);
        assert_eq!(config.ui.low_stock_threshold, 5);
        assert_eq!(config.page_size_options(), vec![10, 20, 50, 100]);
    }

    #[test]
    fn test_base_url_resolution() {
        let mut config = FrontendConfig::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(
            config.resolve_base_url("https:", "dealer.example.com"),
            "https://dealer.example.com:8080"
        );

        config = FrontendConfig::parse(
            r#"
            [api]
            base_url = "https://abcd.ngrok-free.app/api/"
            [ui]
            default_page_size = 25
            page_size_options = [10, 50]
            search_debounce_ms = 0
            low_stock_threshold = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.resolve_base_url("http:", "localhost"), "https://abcd.ngrok-free.app/api");
        assert_eq!(config.api.fallback_port, 8080);
        assert_eq!(config.page_size_options(), vec![10, 25, 50]);
    }

    #[test]
    fn test_rejects_bad_config() {
        assert!(matches!(FrontendConfig::parse("[api"), Err(ConfigError::Parse(_))));
        let zero = DEFAULT_CONFIG.replace("default_page_size = 10", "default_page_size = 0");
        assert!(matches!(FrontendConfig::parse(&zero), Err(ConfigError::Invalid(_))));
    }
}
