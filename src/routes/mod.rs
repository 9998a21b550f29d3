use std::sync::Arc;

use axum::{
    http::{
        header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE},
        HeaderValue, Method, StatusCode,
    },
    middleware,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    services::{
        Clock, RandomSource, RecommendationService, SystemClock, ThreadRandom, TmdbClient,
        UpstreamClient,
    },
};

pub mod genres;
pub mod recommendations;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub recommendations: Arc<RecommendationService>,
    pub upstream: Arc<dyn UpstreamClient>,
    pub language: String,
    /// Allowed origin advertised to callers that send no `Origin` header
    pub cors_fallback_origin: HeaderValue,
}

impl AppState {
    pub fn new(
        config: &Config,
        upstream: Arc<dyn UpstreamClient>,
        random: Arc<dyn RandomSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            recommendations: Arc::new(RecommendationService::new(
                config,
                upstream.clone(),
                random,
                clock,
            )),
            upstream,
            language: config.language.clone(),
            cors_fallback_origin: parse_origin(&config.cors_fallback_origin),
        }
    }

    /// Production wiring: TMDB over HTTP, thread-local RNG, wall clock
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let upstream = Arc::new(TmdbClient::from_config(config)?);
        Ok(Self::new(
            config,
            upstream,
            Arc::new(ThreadRandom),
            Arc::new(SystemClock),
        ))
    }
}

const DEFAULT_FALLBACK_ORIGIN: &str = "https://recomendae-filmes.netlify.app";

fn parse_origin(origin: &str) -> HeaderValue {
    HeaderValue::from_str(origin).unwrap_or_else(|_| {
        tracing::warn!(origin, "Invalid CORS_FALLBACK_ORIGIN, using default");
        HeaderValue::from_static(DEFAULT_FALLBACK_ORIGIN)
    })
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let fallback_origin = state.cors_fallback_origin.clone();

    // `get` also answers HEAD unless a HEAD handler is set.
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/recommend",
            get(recommendations::recommend)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .route(
            "/genres",
            get(genres::list)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(SetResponseHeaderLayer::if_not_present(
                    ACCESS_CONTROL_ALLOW_ORIGIN,
                    fallback_origin,
                ))
                .layer(cors_layer()),
        )
}

/// Answers every `OPTIONS` request with an empty 200 before routing.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
