/// Backend API connection settings
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub rate_limit_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: std::env::var("RALLYRANK_API_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            user_agent: "RallyRank-CLI/1.0",
            timeout_secs: 30,
            rate_limit_ms: 100,
        }
    }
}

/// Local snapshot cache settings
#[derive(Debug, Clone)]
pub struct CacheSettings {
    pub dir: String,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            dir: std::env::var("RALLYRANK_CACHE_DIR").unwrap_or_else(|_| "cache".to_string()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub api: ApiSettings,
    pub cache: CacheSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
