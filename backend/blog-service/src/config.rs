/// Configuration management for Blog Service
///
/// Settings are read from environment variables. `main` loads an optional
/// `.env` file first.
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Startup data settings
    pub data: DataConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Logging configuration
    pub log: LogConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
    /// Number of HTTP worker threads
    pub workers: usize,
    /// Grace period for in-flight requests on shutdown
    pub shutdown_timeout_secs: u64,
}

/// Startup data settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// JSON file with the initial posts
    pub file: String,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive when RUST_LOG is unset
    pub level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let port: u16 = parse_env_or_default("PORT", 8080)?;
        if port == 0 {
            return Err("PORT must be greater than 0".to_string());
        }

        let workers: usize = parse_env_or_default("HTTP_WORKERS", 4)?;
        if workers == 0 {
            return Err("HTTP_WORKERS must be greater than 0".to_string());
        }

        Ok(Config {
            app: AppConfig {
                env: app_env.clone(),
                host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port,
                workers,
                shutdown_timeout_secs: parse_env_or_default("SHUTDOWN_TIMEOUT_SECS", 30)?,
            },
            data: DataConfig {
                file: std::env::var("BLOG_DATA_FILE")
                    .unwrap_or_else(|_| "blog_data.json".to_string()),
            },
            cors: {
                let allowed_origins =
                    std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string());

                if app_env.eq_ignore_ascii_case("production") && allowed_origins.trim() == "*" {
                    return Err("CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string());
                }

                CorsConfig { allowed_origins }
            },
            log: LogConfig {
                level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
        })
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }
}

fn parse_env_or_default<T>(key: &str, default: T) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse()
            .map_err(|e| format!("Failed to parse {}='{}': {}", key, val, e)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 8] = [
        "APP_ENV",
        "HOST",
        "PORT",
        "HTTP_WORKERS",
        "SHUTDOWN_TIMEOUT_SECS",
        "BLOG_DATA_FILE",
        "CORS_ALLOWED_ORIGINS",
        "LOG_LEVEL",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial_test::serial]
    fn test_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.app.env, "development");
        assert_eq!(config.app.port, 8080);
        assert_eq!(config.app.workers, 4);
        assert_eq!(config.app.shutdown_timeout_secs, 30);
        assert_eq!(config.data.file, "blog_data.json");
        assert_eq!(config.cors.allowed_origins, "*");
        assert_eq!(config.log.level, "info");
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    #[serial_test::serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "9090");
        std::env::set_var("BLOG_DATA_FILE", "/tmp/posts.json");
        std::env::set_var("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:9090");
        assert_eq!(config.data.file, "/tmp/posts.json");
        assert_eq!(config.log.level, "debug");

        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn test_invalid_port() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");

        let err = Config::from_env().unwrap_err();
        assert!(err.contains("PORT"), "unexpected error: {err}");

        std::env::set_var("PORT", "0");
        assert!(Config::from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn test_production_rejects_wildcard_cors() {
        clear_env();
        std::env::set_var("APP_ENV", "production");

        assert!(Config::from_env().is_err());

        std::env::set_var("CORS_ALLOWED_ORIGINS", "https://blog.example.com");
        let config = Config::from_env().unwrap();
        assert_eq!(config.cors.allowed_origins, "https://blog.example.com");

        clear_env();
    }
}
