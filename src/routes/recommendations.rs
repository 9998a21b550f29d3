use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Extension, Json,
};

use crate::{
    error::{ApiResult, AppError},
    middleware::request_id::RequestId,
    models::{RecommendationRequest, RecommendationResult},
    routes::AppState,
};

const FAILURE_SUMMARY: &str = "Falha ao recomendar filme";

/// Handler for the recommendation endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    query: Result<Query<RecommendationRequest>, QueryRejection>,
) -> ApiResult<Json<RecommendationResult>> {
    let Query(request) =
        query.map_err(|rejection| AppError::from(rejection).with_summary(FAILURE_SUMMARY))?;

    tracing::info!(
        request_id = %request_id,
        genre_id = ?request.genre_id,
        deep_search = ?request.deep_search,
        "Processing recommendation request"
    );

    let result = state
        .recommendations
        .recommend(&request)
        .await
        .map_err(|e| e.with_summary(FAILURE_SUMMARY))?;

    tracing::info!(
        request_id = %request_id,
        title = %result.title,
        "Recommendation completed"
    );

    Ok(Json(result))
}
