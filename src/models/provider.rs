use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Response from `/movie/{id}/watch/providers`, keyed by region code
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WatchProviders {
    #[serde(default)]
    pub results: Option<HashMap<String, RegionProviders>>,
}

/// Availability inside one region. Each category may be missing upstream.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RegionProviders {
    #[serde(default)]
    pub flatrate: Option<Vec<ProviderEntry>>,
    #[serde(default)]
    pub rent: Option<Vec<ProviderEntry>>,
    #[serde(default)]
    pub buy: Option<Vec<ProviderEntry>>,
}

/// A provider as TMDB reports it, logo path still relative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderEntry {
    #[serde(default)]
    pub logo_path: Option<String>,
    pub provider_id: u64,
    pub provider_name: String,
    #[serde(default)]
    pub display_priority: i32,
}

/// Streaming, rental and purchase providers for one region.
///
/// Every category is a plain `Vec`; absence upstream becomes an empty list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderSet {
    pub streaming: Vec<ProviderEntry>,
    pub rent: Vec<ProviderEntry>,
    pub buy: Vec<ProviderEntry>,
}

impl WatchProviders {
    pub fn region(&self, code: &str) -> Option<&RegionProviders> {
        self.results.as_ref().and_then(|regions| regions.get(code))
    }

    /// Extracts one region, defaulting each missing category independently.
    pub fn for_region(&self, code: &str) -> ProviderSet {
        match self.region(code) {
            Some(region) => ProviderSet {
                streaming: region.flatrate.clone().unwrap_or_default(),
                rent: region.rent.clone().unwrap_or_default(),
                buy: region.buy.clone().unwrap_or_default(),
            },
            None => ProviderSet::default(),
        }
    }
}
