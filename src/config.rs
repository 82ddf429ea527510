//! Application Configuration
//!
//! Compile-time overridable settings for the dashboard.

use tracing::Level;

/// Remote API used when no override is given at build time
pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Dashboard settings, provided to components via context
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the REST API (no trailing slash)
    pub api_base_url: String,
    /// localStorage slot holding locally created users
    pub users_storage_key: String,
    /// localStorage slot holding locally created todos
    pub todos_storage_key: String,
    /// Quiet window before a search input change is applied
    pub search_debounce_ms: u32,
    /// Route rendered for an empty fragment
    pub default_route: String,
    pub log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            users_storage_key: "localUsers".to_string(),
            todos_storage_key: "localTodos".to_string(),
            search_debounce_ms: 300,
            default_route: "users".to_string(),
            log_level: Level::INFO,
        }
    }
}

impl AppConfig {
    /// Defaults with build-time overrides applied
    /// (`NEXUS_API_BASE_URL`, `NEXUS_LOG_LEVEL`).
    pub fn from_env() -> Self {
        Self::with_overrides(option_env!("NEXUS_API_BASE_URL"), option_env!("NEXUS_LOG_LEVEL"))
    }

    fn with_overrides(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_base_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level.and_then(|l| l.trim().parse::<Level>().ok()) {
            config.log_level = level;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_dashboard() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "https://jsonplaceholder.typicode.com");
        assert_eq!(config.users_storage_key, "localUsers");
        assert_eq!(config.todos_storage_key, "localTodos");
        assert_eq!(config.search_debounce_ms, 300);
        assert_eq!(config.default_route, "users");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::with_overrides(Some("http://localhost:3000/"), Some("debug"));
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.log_level, Level::DEBUG);

        // Blank or invalid values keep the defaults
        let config = AppConfig::with_overrides(Some("  "), Some("loud"));
        assert_eq!(config, AppConfig::default());
    }
}
