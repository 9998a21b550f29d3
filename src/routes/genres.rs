use axum::{extract::State, Json};

use crate::{error::ApiResult, models::Genre, routes::AppState, services::genres::fetch_genres};

const FAILURE_SUMMARY: &str = "Falha ao buscar gêneros";

/// Handler for the genre catalog endpoint
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Genre>>> {
    let genres = fetch_genres(state.upstream.as_ref(), &state.language)
        .await
        .map_err(|e| e.with_summary(FAILURE_SUMMARY))?;

    Ok(Json(genres))
}
