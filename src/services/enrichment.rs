use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{MovieDetail, ProviderSet, WatchProviders},
    services::providers::{fetch_as, UpstreamClient},
};

/// Fetches detail and watch providers for the chosen movie
pub struct EnrichmentFetcher {
    upstream: Arc<dyn UpstreamClient>,
    language: String,
    region: String,
}

impl EnrichmentFetcher {
    pub fn new(upstream: Arc<dyn UpstreamClient>, language: String, region: String) -> Self {
        Self {
            upstream,
            language,
            region,
        }
    }

    /// Both calls run concurrently; if either fails the other is dropped.
    pub async fn fetch(&self, movie_id: u64) -> AppResult<(MovieDetail, ProviderSet)> {
        let detail_path = format!("/movie/{}", movie_id);
        let providers_path = format!("/movie/{}/watch/providers", movie_id);

        let detail = fetch_as::<MovieDetail>(
            self.upstream.as_ref(),
            &detail_path,
            vec![("language".to_string(), self.language.clone())],
        );
        let providers =
            fetch_as::<WatchProviders>(self.upstream.as_ref(), &providers_path, Vec::new());

        let (detail, providers) = tokio::try_join!(detail, providers)?;

        let provider_set = providers.for_region(&self.region);
        if providers.region(&self.region).is_none() {
            tracing::debug!(
                movie_id,
                region = %self.region,
                "No watch providers for region"
            );
        }

        Ok((detail, provider_set))
    }
}
