use serde::Deserialize;

/// One page of `/discover/movie` results
#[derive(Debug, Clone, Deserialize)]
pub struct DiscoverPage {
    #[serde(default)]
    pub results: Vec<MovieSummary>,
    #[serde(default)]
    pub total_pages: u32,
}

/// The subset of a discover result needed to pick a movie
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
}

/// Response from `/movie/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovieDetail {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_page_deserialization() {
        let json = r#"{
            "page": 2,
            "results": [
                {"id": 603, "title": "Matrix", "adult": false},
                {"id": 604}
            ],
            "total_pages": 37,
            "total_results": 729
        }"#;

        let page: DiscoverPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.total_pages, 37);
        assert_eq!(page.results, vec![MovieSummary { id: 603 }, MovieSummary { id: 604 }]);
    }

    #[test]
    fn test_discover_page_missing_results_is_empty() {
        let page: DiscoverPage = serde_json::from_str(r#"{"page": 1}"#).unwrap();
        assert!(page.results.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_movie_detail_null_poster() {
        let json = r#"{
            "title": "Matrix",
            "overview": "Um hacker descobre a verdade.",
            "release_date": "1999-03-31",
            "poster_path": null,
            "vote_average": 8.2
        }"#;

        let detail: MovieDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.title, "Matrix");
        assert_eq!(detail.poster_path, None);
        assert_eq!(detail.vote_average, 8.2);
    }
}
