use crate::models::{
    MovieDetail, ProviderEntry, ProviderSet, RecommendationResult, ResolvedProvider,
};

/// Turns upstream detail and providers into the public response shape
#[derive(Debug, Clone)]
pub struct ResponseAssembler {
    image_base_url: String,
    poster_width: String,
    logo_width: String,
}

impl ResponseAssembler {
    pub fn new(image_base_url: String, poster_width: String, logo_width: String) -> Self {
        Self {
            image_base_url: image_base_url.trim_end_matches('/').to_string(),
            poster_width,
            logo_width,
        }
    }

    pub fn assemble(&self, detail: &MovieDetail, providers: &ProviderSet) -> RecommendationResult {
        RecommendationResult {
            title: detail.title.clone(),
            synopsis: detail.overview.clone(),
            release_date: detail.release_date.clone(),
            poster: detail
                .poster_path
                .as_deref()
                .map(|path| self.image_url(&self.poster_width, path)),
            rating: detail.vote_average,
            streaming: self.resolve(&providers.streaming),
            rent: self.resolve(&providers.rent),
            buy: self.resolve(&providers.buy),
        }
    }

    fn resolve(&self, entries: &[ProviderEntry]) -> Vec<ResolvedProvider> {
        entries
            .iter()
            .map(|entry| ResolvedProvider {
                logo_path: entry
                    .logo_path
                    .as_deref()
                    .map(|path| self.image_url(&self.logo_width, path)),
                provider_id: entry.provider_id,
                provider_name: entry.provider_name.clone(),
                display_priority: entry.display_priority,
            })
            .collect()
    }

    fn image_url(&self, width: &str, path: &str) -> String {
        format!("{}/{}{}", self.image_base_url, width, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WatchProviders;

    fn assembler() -> ResponseAssembler {
        ResponseAssembler::new(
            "https://image.tmdb.org/t/p".to_string(),
            "w500".to_string(),
            "w92".to_string(),
        )
    }

    fn detail() -> MovieDetail {
        MovieDetail {
            title: "Matrix".to_string(),
            overview: "Um hacker descobre a verdade.".to_string(),
            release_date: "1999-03-31".to_string(),
            poster_path: Some("/matrix.jpg".to_string()),
            vote_average: 8.2,
        }
    }

    fn entry(id: u64, name: &str, priority: i32) -> ProviderEntry {
        ProviderEntry {
            logo_path: Some(format!("/{}.jpg", id)),
            provider_id: id,
            provider_name: name.to_string(),
            display_priority: priority,
        }
    }

    #[test]
    fn test_assemble_builds_absolute_urls() {
        let providers = ProviderSet {
            streaming: vec![entry(8, "Netflix", 0)],
            rent: vec![],
            buy: vec![entry(2, "Apple TV", 4)],
        };

        let result = assembler().assemble(&detail(), &providers);

        assert_eq!(
            result.poster.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/matrix.jpg")
        );
        assert_eq!(
            result.streaming[0].logo_path.as_deref(),
            Some("https://image.tmdb.org/t/p/w92/8.jpg")
        );
        assert_eq!(result.buy[0].provider_name, "Apple TV");
        assert!(result.rent.is_empty());
        assert_eq!(result.title, "Matrix");
        assert_eq!(result.synopsis, "Um hacker descobre a verdade.");
        assert_eq!(result.release_date, "1999-03-31");
        assert_eq!(result.rating, 8.2);
    }

    #[test]
    fn test_assemble_keeps_provider_order() {
        let providers = ProviderSet {
            streaming: vec![entry(3, "C", 9), entry(1, "A", 0), entry(2, "B", 5)],
            ..ProviderSet::default()
        };

        let result = assembler().assemble(&detail(), &providers);
        let ids: Vec<u64> = result.streaming.iter().map(|p| p.provider_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_assemble_is_idempotent() {
        let providers = ProviderSet {
            streaming: vec![entry(8, "Netflix", 0)],
            rent: vec![entry(3, "Google Play Movies", 7)],
            buy: vec![],
        };
        let assembler = assembler();

        let first = assembler.assemble(&detail(), &providers);
        let second = assembler.assemble(&detail(), &providers);

        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_region_serializes_empty_arrays() {
        let raw: WatchProviders =
            serde_json::from_str(r#"{"id": 1, "results": {"US": {"flatrate": []}}}"#).unwrap();
        let result = assembler().assemble(&detail(), &raw.for_region("BR"));

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["streaming"], serde_json::json!([]));
        assert_eq!(json["rent"], serde_json::json!([]));
        assert_eq!(json["buy"], serde_json::json!([]));
    }

    #[test]
    fn test_missing_poster_is_null() {
        let mut detail = detail();
        detail.poster_path = None;

        let result = assembler().assemble(&detail, &ProviderSet::default());
        assert_eq!(result.poster, None);
    }

    #[test]
    fn test_trailing_slash_in_base_url() {
        let assembler = ResponseAssembler::new(
            "https://image.tmdb.org/t/p/".to_string(),
            "w500".to_string(),
            "w92".to_string(),
        );
        let result = assembler.assemble(&detail(), &ProviderSet::default());
        assert_eq!(
            result.poster.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/matrix.jpg")
        );
    }
}
