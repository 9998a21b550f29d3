/// Upstream movie-metadata access
///
/// Everything the recommendation flow needs from TMDB goes through the
/// `UpstreamClient` trait, so the orchestration can be exercised against a
/// mock without any network access.
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppResult;

pub mod tmdb;

pub use tmdb::TmdbClient;

/// Query string pairs sent with an upstream request
pub type QueryParams = Vec<(String, String)>;

/// Trait for authenticated JSON access to the movie-metadata service
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait UpstreamClient: Send + Sync {
    /// GET `path` with `params` and return the decoded JSON body.
    ///
    /// Fails with `UpstreamUnavailable` on any non-2xx status or transport
    /// failure, and with `MissingCredential` when no token is configured.
    async fn fetch_json(&self, path: &str, params: QueryParams) -> AppResult<Value>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Fetches `path` and deserializes the body into `T`.
pub async fn fetch_as<T: DeserializeOwned>(
    client: &dyn UpstreamClient,
    path: &str,
    params: QueryParams,
) -> AppResult<T> {
    let value = client.fetch_json(path, params).await?;
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::MovieDetail;
    use serde_json::json;

    #[tokio::test]
    async fn test_fetch_as_decodes_body() {
        let mut upstream = MockUpstreamClient::new();
        upstream
            .expect_fetch_json()
            .withf(|path, _| path == "/movie/603")
            .times(1)
            .returning(|_, _| {
                Ok(json!({
                    "title": "Matrix",
                    "overview": "",
                    "release_date": "1999-03-31",
                    "poster_path": "/p.jpg",
                    "vote_average": 8.2
                }))
            });

        let detail: MovieDetail = fetch_as(&upstream, "/movie/603", vec![]).await.unwrap();
        assert_eq!(detail.title, "Matrix");
        assert_eq!(detail.poster_path.as_deref(), Some("/p.jpg"));
    }

    #[tokio::test]
    async fn test_fetch_as_reports_shape_mismatch() {
        let mut upstream = MockUpstreamClient::new();
        upstream
            .expect_fetch_json()
            .returning(|_, _| Ok(json!({ "results": "not a list" })));

        let result: AppResult<crate::models::DiscoverPage> =
            fetch_as(&upstream, "/discover/movie", vec![]).await;
        assert!(matches!(result, Err(AppError::Decode(_))));
    }
}
