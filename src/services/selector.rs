use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{MovieSummary, PageBudget},
    services::random::RandomSource,
};

/// Uniform random choice of a page, then of a movie on that page
#[derive(Clone)]
pub struct Selector {
    random: Arc<dyn RandomSource>,
}

impl Selector {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Page number in `1..=budget`
    pub fn pick_page(&self, budget: PageBudget) -> u32 {
        self.random.below(budget.get() as usize) as u32 + 1
    }

    pub fn pick_movie<'a>(&self, results: &'a [MovieSummary]) -> AppResult<&'a MovieSummary> {
        if results.is_empty() {
            return Err(AppError::NoResultsFound);
        }

        Ok(&results[self.random.below(results.len())])
    }
}
