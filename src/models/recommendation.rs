use serde::Serialize;

/// Provider entry with an absolute logo URL
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedProvider {
    pub logo_path: Option<String>,
    pub provider_id: u64,
    pub provider_name: String,
    pub display_priority: i32,
}

/// Body returned by the recommendation endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub title: String,
    pub synopsis: String,
    pub release_date: String,
    pub poster: Option<String>,
    pub rating: f64,
    pub streaming: Vec<ResolvedProvider>,
    pub rent: Vec<ResolvedProvider>,
    pub buy: Vec<ResolvedProvider>,
}
