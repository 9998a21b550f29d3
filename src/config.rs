use std::time::Duration;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB bearer token. Left unset, every upstream call fails with `MissingCredential`.
    #[serde(default)]
    pub api_token: Option<String>,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// TMDB image host prefix
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    #[serde(default = "default_poster_width")]
    pub poster_width: String,

    #[serde(default = "default_logo_width")]
    pub logo_width: String,

    /// Value of the `language` parameter sent upstream
    #[serde(default = "default_language")]
    pub language: String,

    /// Region block read from watch-provider payloads
    #[serde(default = "default_watch_region")]
    pub watch_region: String,

    /// Pages eligible for selection when deep search is off
    #[serde(default = "default_shallow_page_budget")]
    pub shallow_page_budget: u32,

    /// Upper bound on pages TMDB will serve for a discover query
    #[serde(default = "default_max_page_budget")]
    pub max_page_budget: u32,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// `Access-Control-Allow-Origin` sent when the request carries no `Origin`
    #[serde(default = "default_cors_fallback_origin")]
    pub cors_fallback_origin: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_poster_width() -> String {
    "w500".to_string()
}

fn default_logo_width() -> String {
    "w92".to_string()
}

fn default_language() -> String {
    "pt-BR".to_string()
}

fn default_watch_region() -> String {
    "BR".to_string()
}

fn default_shallow_page_budget() -> u32 {
    10
}

fn default_max_page_budget() -> u32 {
    500
}

fn default_request_timeout_secs() -> u64 {
    10
}

pub(crate) fn default_cors_fallback_origin() -> String {
    "https://recomendae-filmes.netlify.app".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_token: None,
            tmdb_api_url: default_tmdb_api_url(),
            image_base_url: default_image_base_url(),
            poster_width: default_poster_width(),
            logo_width: default_logo_width(),
            language: default_language(),
            watch_region: default_watch_region(),
            shallow_page_budget: default_shallow_page_budget(),
            max_page_budget: default_max_page_budget(),
            request_timeout_secs: default_request_timeout_secs(),
            cors_fallback_origin: default_cors_fallback_origin(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Bind address in `host:port` form
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_tmdb_conventions() {
        let config = Config::default();
        assert_eq!(config.api_token, None);
        assert_eq!(config.language, "pt-BR");
        assert_eq!(config.watch_region, "BR");
        assert_eq!(config.shallow_page_budget, 10);
        assert_eq!(config.max_page_budget, 500);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(
            config.cors_fallback_origin,
            "https://recomendae-filmes.netlify.app"
        );
    }

    #[test]
    fn test_from_iter_overrides() {
        let config: Config = envy::from_iter(vec![
            ("API_TOKEN".to_string(), "secret".to_string()),
            ("SHALLOW_PAGE_BUDGET".to_string(), "3".to_string()),
            ("PORT".to_string(), "8080".to_string()),
        ])
        .unwrap();

        assert_eq!(config.api_token.as_deref(), Some("secret"));
        assert_eq!(config.shallow_page_budget, 3);
        assert_eq!(config.port, 8080);
        assert_eq!(config.tmdb_api_url, "https://api.themoviedb.org/3");
    }
}
