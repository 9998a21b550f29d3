use std::{fmt::Display, sync::Arc};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{DiscoverPage, GenreId, RecommendationRequest, RecommendationResult, SearchMode},
    services::{
        assembler::ResponseAssembler,
        clock::Clock,
        discover::{DiscoverQuery, DISCOVER_PATH},
        enrichment::EnrichmentFetcher,
        planner::SearchPlanner,
        providers::{fetch_as, UpstreamClient},
        random::RandomSource,
        selector::Selector,
    },
};

/// Steps of a single recommendation, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validating,
    Planning,
    SelectingPage,
    FetchingPage,
    SelectingMovie,
    Enriching,
    Assembling,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Validating => "validating",
            Stage::Planning => "planning",
            Stage::SelectingPage => "selecting_page",
            Stage::FetchingPage => "fetching_page",
            Stage::SelectingMovie => "selecting_movie",
            Stage::Enriching => "enriching",
            Stage::Assembling => "assembling",
        };
        write!(f, "{}", name)
    }
}

/// Records the stage a failure happened in and passes the result through.
///
/// The error-level line is emitted once, when the response is rendered.
fn at_stage<T>(stage: Stage, result: AppResult<T>) -> AppResult<T> {
    match &result {
        Ok(_) => tracing::debug!(stage = %stage, "Stage completed"),
        Err(e) if e.is_client_error() => {
            tracing::debug!(stage = %stage, error = %e, "Request rejected")
        }
        Err(e) => tracing::warn!(stage = %stage, error = %e, "Recommendation stage failed"),
    }
    result
}

/// Picks one random movie for a genre and returns it with its watch providers.
///
/// Stateless per request: the only shared pieces are the upstream client, the
/// random source and the clock, none of which carry request data.
pub struct RecommendationService {
    upstream: Arc<dyn UpstreamClient>,
    clock: Arc<dyn Clock>,
    language: String,
    planner: SearchPlanner,
    selector: Selector,
    enrichment: EnrichmentFetcher,
    assembler: ResponseAssembler,
}

impl RecommendationService {
    pub fn new(
        config: &Config,
        upstream: Arc<dyn UpstreamClient>,
        random: Arc<dyn RandomSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            planner: SearchPlanner::new(
                upstream.clone(),
                config.shallow_page_budget,
                config.max_page_budget,
            ),
            selector: Selector::new(random),
            enrichment: EnrichmentFetcher::new(
                upstream.clone(),
                config.language.clone(),
                config.watch_region.clone(),
            ),
            assembler: ResponseAssembler::new(
                config.image_base_url.clone(),
                config.poster_width.clone(),
                config.logo_width.clone(),
            ),
            language: config.language.clone(),
            upstream,
            clock,
        }
    }

    pub async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> AppResult<RecommendationResult> {
        let genre_id = at_stage(
            Stage::Validating,
            GenreId::parse(request.genre_id.as_deref()).ok_or(AppError::MissingGenre),
        )?;
        let mode = SearchMode::from_flag(request.deep_search.as_deref());

        // Captured once so the sizing call and the page fetch share a date bound
        let query = DiscoverQuery::new(genre_id, &self.language, self.clock.today());

        let budget = at_stage(Stage::Planning, self.planner.plan(&query, mode).await)?;

        let page = self.selector.pick_page(budget);
        tracing::debug!(stage = %Stage::SelectingPage, page, budget = %budget, "Page selected");

        let discover: DiscoverPage = at_stage(
            Stage::FetchingPage,
            fetch_as(
                self.upstream.as_ref(),
                DISCOVER_PATH,
                query.clone().with_page(page).to_params(),
            )
            .await,
        )?;

        let movie = at_stage(
            Stage::SelectingMovie,
            self.selector.pick_movie(&discover.results),
        )?;

        tracing::info!(
            genre_id = %query.genre_id,
            mode = %mode,
            budget = %budget,
            page,
            movie_id = movie.id,
            upstream = self.upstream.name(),
            "Movie selected"
        );

        let (detail, providers) =
            at_stage(Stage::Enriching, self.enrichment.fetch(movie.id).await)?;

        let result = self.assembler.assemble(&detail, &providers);
        tracing::debug!(stage = %Stage::Assembling, title = %result.title, "Recommendation ready");

        Ok(result)
    }
}
