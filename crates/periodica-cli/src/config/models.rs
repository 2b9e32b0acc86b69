use periodica::engine::config::CatalogConfig;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    /// How long to wait for the catalogs to load before giving up.
    pub load_timeout: Duration,
    pub max_search_results: usize,
    pub num_questions: usize,
}
