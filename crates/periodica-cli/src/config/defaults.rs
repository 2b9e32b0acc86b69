pub struct DefaultsConfig {
    pub load_timeout_secs: u64,
    pub max_search_results: usize,
    pub num_questions: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            load_timeout_secs: 5,
            max_search_results: 10,
            num_questions: 10,
        }
    }
}
