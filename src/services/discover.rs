use chrono::NaiveDate;

use crate::{models::GenreId, services::providers::QueryParams};

pub const DISCOVER_PATH: &str = "/discover/movie";

/// Oldest primary release date considered
pub const RELEASE_DATE_FLOOR: &str = "1980-01-01";
pub const MIN_VOTE_COUNT: u32 = 100;
pub const SORT_ORDER: &str = "popularity.desc";

/// Parameters of a "discover movies by genre" call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverQuery {
    pub genre_id: GenreId,
    pub language: String,
    pub release_date_lte: NaiveDate,
    pub page: u32,
}

impl DiscoverQuery {
    /// `today` must be the date captured once for the whole request.
    pub fn new(genre_id: GenreId, language: &str, today: NaiveDate) -> Self {
        Self {
            genre_id,
            language: language.to_string(),
            release_date_lte: today,
            page: 1,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn to_params(&self) -> QueryParams {
        vec![
            ("language".to_string(), self.language.clone()),
            ("with_genres".to_string(), self.genre_id.to_string()),
            (
                "primary_release_date.gte".to_string(),
                RELEASE_DATE_FLOOR.to_string(),
            ),
            (
                "primary_release_date.lte".to_string(),
                self.release_date_lte.format("%Y-%m-%d").to_string(),
            ),
            ("sort_by".to_string(), SORT_ORDER.to_string()),
            ("vote_count.gte".to_string(), MIN_VOTE_COUNT.to_string()),
            ("page".to_string(), self.page.to_string()),
        ]
    }
}
