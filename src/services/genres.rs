use serde::Deserialize;

use crate::{
    error::AppResult,
    models::Genre,
    services::providers::{fetch_as, UpstreamClient},
};

pub const GENRE_LIST_PATH: &str = "/genre/movie/list";

#[derive(Debug, Deserialize)]
struct GenreListResponse {
    #[serde(default)]
    genres: Vec<Genre>,
}

/// Fetches the upstream movie genre catalog in the configured language
pub async fn fetch_genres(upstream: &dyn UpstreamClient, language: &str) -> AppResult<Vec<Genre>> {
    let response: GenreListResponse = fetch_as(
        upstream,
        GENRE_LIST_PATH,
        vec![("language".to_string(), language.to_string())],
    )
    .await?;

    tracing::debug!(count = response.genres.len(), "Genre catalog fetched");

    Ok(response.genres)
}
