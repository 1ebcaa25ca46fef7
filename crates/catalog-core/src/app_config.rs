#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the catalog API, without a trailing slash, e.g.
    /// `"http://localhost:8000/api"`.
    pub api_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Quiet period the search input must hold before it is published.
    pub search_debounce_ms: u64,
}
