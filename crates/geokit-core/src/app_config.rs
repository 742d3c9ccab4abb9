#[derive(Clone)]
pub struct AppConfig {
    pub mapquest_api_key: String,
    /// Overrides the provider's public endpoint when set.
    pub mapquest_base_url: Option<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("mapquest_api_key", &"[redacted]")
            .field("mapquest_base_url", &self.mapquest_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .finish()
    }
}
