/// TMDB (The Movie Database) v3 client
///
/// Authenticates with a bearer token ("API Read Access Token"). One request,
/// no retries: a failed call is reported to the caller as-is.
use std::time::Duration;

use reqwest::{header::CONTENT_TYPE, Client as HttpClient};
use serde_json::Value;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    services::providers::{QueryParams, UpstreamClient},
};

#[derive(Clone)]
pub struct TmdbClient {
    http_client: HttpClient,
    api_token: Option<String>,
    api_url: String,
}

impl TmdbClient {
    pub fn new(api_token: Option<String>, api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_token: api_token.filter(|token| !token.trim().is_empty()),
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(
            config.api_token.clone(),
            config.tmdb_api_url.clone(),
            config.request_timeout(),
        )
    }
}

#[async_trait::async_trait]
impl UpstreamClient for TmdbClient {
    async fn fetch_json(&self, path: &str, params: QueryParams) -> AppResult<Value> {
        let token = self
            .api_token
            .as_deref()
            .ok_or(AppError::MissingCredential)?;

        let url = format!("{}{}", self.api_url, path);
        tracing::debug!(path = %path, params = ?params, "TMDB request");

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json")
            .query(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                path = %path,
                status = %status,
                body = %body,
                "TMDB request failed"
            );
            return Err(AppError::upstream_status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
