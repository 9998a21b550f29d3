use std::fmt::Display;

use serde::{Deserialize, Serialize};

pub mod movie;
pub mod provider;
pub mod recommendation;

pub use movie::{DiscoverPage, MovieDetail, MovieSummary};
pub use provider::{ProviderEntry, ProviderSet, RegionProviders, WatchProviders};
pub use recommendation::{RecommendationResult, ResolvedProvider};

/// How many result pages are eligible for random selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Shallow,
    Deep,
}

impl SearchMode {
    /// Only the literal `"yes"` enables deep search.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("yes") => SearchMode::Deep,
            _ => SearchMode::Shallow,
        }
    }
}

impl Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Shallow => write!(f, "shallow"),
            SearchMode::Deep => write!(f, "deep"),
        }
    }
}

/// Upstream genre identifier, kept in its string form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreId(String);

impl GenreId {
    /// Returns `None` for absent or blank input.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        raw.map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| GenreId(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for GenreId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inclusive upper bound on page numbers eligible for sampling. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBudget(u32);

impl PageBudget {
    pub fn new(pages: u32) -> Self {
        Self(pages.max(1))
    }

    /// `min(total, ceiling)`, never below 1
    pub fn capped(total: u32, ceiling: u32) -> Self {
        Self::new(total.min(ceiling))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Display for PageBudget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Query string accepted by the recommendation endpoint
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default)]
    pub genre_id: Option<String>,
    #[serde(default)]
    pub deep_search: Option<String>,
}

/// Entry of the upstream genre catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}
