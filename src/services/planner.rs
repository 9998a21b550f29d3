use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{DiscoverPage, PageBudget, SearchMode},
    services::{
        discover::{DiscoverQuery, DISCOVER_PATH},
        providers::{fetch_as, UpstreamClient},
    },
};

/// Decides how many discover pages are eligible for random selection
pub struct SearchPlanner {
    upstream: Arc<dyn UpstreamClient>,
    shallow_budget: PageBudget,
    max_budget: u32,
}

impl SearchPlanner {
    /// `shallow_budget` is clamped into `1..=max_budget`.
    pub fn new(upstream: Arc<dyn UpstreamClient>, shallow_budget: u32, max_budget: u32) -> Self {
        let max_budget = max_budget.max(1);
        Self {
            upstream,
            shallow_budget: PageBudget::capped(shallow_budget, max_budget),
            max_budget,
        }
    }

    /// Shallow search never touches the network. Deep search asks TMDB for
    /// page 1 and trusts its `total_pages`, capped at `max_budget`.
    pub async fn plan(&self, query: &DiscoverQuery, mode: SearchMode) -> AppResult<PageBudget> {
        match mode {
            SearchMode::Shallow => Ok(self.shallow_budget),
            SearchMode::Deep => {
                let sizing = query.clone().with_page(1);
                let page: DiscoverPage =
                    fetch_as(self.upstream.as_ref(), DISCOVER_PATH, sizing.to_params()).await?;

                let budget = PageBudget::capped(page.total_pages, self.max_budget);
                tracing::debug!(
                    genre_id = %query.genre_id,
                    total_pages = page.total_pages,
                    budget = %budget,
                    "Deep search sized"
                );
                Ok(budget)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::GenreId;
    use crate::services::providers::MockUpstreamClient;
    use chrono::NaiveDate;
    use serde_json::json;

    fn query() -> DiscoverQuery {
        DiscoverQuery::new(
            GenreId::parse(Some("28")).unwrap(),
            "pt-BR",
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        )
    }

    fn reporting_total(total_pages: u32) -> MockUpstreamClient {
        let mut upstream = MockUpstreamClient::new();
        upstream
            .expect_fetch_json()
            .withf(|path, params| {
                path == DISCOVER_PATH
                    && params.contains(&("page".to_string(), "1".to_string()))
            })
            .times(1)
            .returning(move |_, _| {
                Ok(json!({ "page": 1, "results": [{ "id": 1 }], "total_pages": total_pages }))
            });
        upstream
    }

    #[tokio::test]
    async fn test_shallow_makes_no_upstream_call() {
        let mut upstream = MockUpstreamClient::new();
        upstream.expect_fetch_json().times(0);

        let planner = SearchPlanner::new(Arc::new(upstream), 10, 500);
        let budget = planner.plan(&query(), SearchMode::Shallow).await.unwrap();

        assert_eq!(budget.get(), 10);
    }

    #[tokio::test]
    async fn test_shallow_budget_is_configurable_but_bounded() {
        let mut upstream = MockUpstreamClient::new();
        upstream.expect_fetch_json().times(0);
        let upstream: Arc<dyn UpstreamClient> = Arc::new(upstream);

        let zero = SearchPlanner::new(upstream.clone(), 0, 500);
        assert_eq!(zero.plan(&query(), SearchMode::Shallow).await.unwrap().get(), 1);

        let oversized = SearchPlanner::new(upstream, 900, 500);
        assert_eq!(
            oversized.plan(&query(), SearchMode::Shallow).await.unwrap().get(),
            500
        );
    }

    #[tokio::test]
    async fn test_deep_uses_reported_total() {
        for (reported, expected) in [(1, 1), (37, 37), (500, 500), (10_000, 500)] {
            let planner = SearchPlanner::new(Arc::new(reporting_total(reported)), 10, 500);
            let budget = planner.plan(&query(), SearchMode::Deep).await.unwrap();
            assert_eq!(budget.get(), expected, "reported total {}", reported);
        }
    }

    #[tokio::test]
    async fn test_deep_with_zero_total_keeps_budget_of_one() {
        let planner = SearchPlanner::new(Arc::new(reporting_total(0)), 10, 500);
        let budget = planner.plan(&query(), SearchMode::Deep).await.unwrap();
        assert_eq!(budget.get(), 1);
    }

    #[tokio::test]
    async fn test_deep_propagates_upstream_failure() {
        let mut upstream = MockUpstreamClient::new();
        upstream
            .expect_fetch_json()
            .times(1)
            .returning(|_, _| Err(AppError::upstream_status(503)));

        let planner = SearchPlanner::new(Arc::new(upstream), 10, 500);
        let err = planner.plan(&query(), SearchMode::Deep).await.unwrap_err();

        assert!(matches!(
            err,
            AppError::UpstreamUnavailable { status: Some(503), .. }
        ));
    }
}
