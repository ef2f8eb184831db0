//! Content API configuration

/// Base URL used when nothing is configured
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Environment variable overriding the content API base URL
pub const API_BASE_ENV: &str = "TRAVEL_API_URL";

/// Content API configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without trailing slash, e.g. `https://api.example.com`
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve from the runtime environment, then the value baked in at
    /// build time (the only source inside a WASM bundle), then the default.
    pub fn from_env() -> Self {
        let runtime = std::env::var(API_BASE_ENV).ok();
        Self::resolve(runtime.as_deref(), option_env!("TRAVEL_API_URL"))
    }

    fn resolve(runtime: Option<&str>, build_time: Option<&str>) -> Self {
        runtime
            .into_iter()
            .chain(build_time)
            .find(|url| !url.trim().is_empty())
            .map_or_else(Self::default, Self::new)
    }

    /// Absolute URL for an API path such as `/api/hero`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_order() {
        let cfg = ApiConfig::resolve(Some("https://rt.example"), Some("https://bt.example"));
        assert_eq!(cfg.base_url, "https://rt.example");

        let cfg = ApiConfig::resolve(Some(""), Some("https://bt.example/"));
        assert_eq!(cfg.base_url, "https://bt.example");

        let cfg = ApiConfig::resolve(None, None);
        assert_eq!(cfg.base_url, DEFAULT_API_BASE);
    }

    #[test]
    fn test_url_join() {
        let cfg = ApiConfig::new("https://api.example.com/");
        assert_eq!(cfg.url("/api/hero"), "https://api.example.com/api/hero");
        assert_eq!(cfg.url("api/blog"), "https://api.example.com/api/blog");
    }
}
