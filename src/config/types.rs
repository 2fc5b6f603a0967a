// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::collections::HashMap;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    #[serde(default)]
    pub routes: RoutesConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (combined, common, or json)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

fn default_access_log_format() -> String {
    "common".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub enable_cors: bool,
}

/// Routes configuration
///
/// `pages` maps exact URL paths to template file names under
/// `templates_dir`. Paths with a recognized asset extension are served
/// from `static_root` instead; everything else renders
/// `not_found_template` with status 404.
#[derive(Debug, Deserialize, Clone)]
pub struct RoutesConfig {
    #[serde(default = "default_templates_dir")]
    pub templates_dir: String,
    #[serde(default = "default_static_root")]
    pub static_root: String,
    #[serde(default = "default_not_found_template")]
    pub not_found_template: String,
    #[serde(default = "default_pages")]
    pub pages: HashMap<String, String>,
}

fn default_templates_dir() -> String {
    "templates".to_string()
}

fn default_static_root() -> String {
    ".".to_string()
}

fn default_not_found_template() -> String {
    "not_found.html".to_string()
}

fn default_pages() -> HashMap<String, String> {
    HashMap::from([
        ("/".to_string(), "home.html".to_string()),
        ("/calculator".to_string(), "calculator.html".to_string()),
    ])
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            templates_dir: default_templates_dir(),
            static_root: default_static_root(),
            not_found_template: default_not_found_template(),
            pages: default_pages(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_routes() {
        let routes = RoutesConfig::default();
        assert_eq!(routes.pages.get("/"), Some(&"home.html".to_string()));
        assert_eq!(
            routes.pages.get("/calculator"),
            Some(&"calculator.html".to_string())
        );
        assert_eq!(routes.templates_dir, "templates");
        assert_eq!(routes.static_root, ".");
        assert_eq!(routes.not_found_template, "not_found.html");
    }
}
