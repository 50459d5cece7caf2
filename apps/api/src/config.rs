use anyhow::{Context, Result};

const DEFAULT_PORT: &str = "3001";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_DEV_TOOL_PATH: &str = "apps/api/static/schema-extraction-dev-tool.html";

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// HTML developer tool served at `GET /`.
    pub dev_tool_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            host: env_or("HOST", DEFAULT_HOST),
            port: env_or("PORT", DEFAULT_PORT)
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            dev_tool_path: env_or("DEV_TOOL_PATH", DEFAULT_DEV_TOOL_PATH),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: 3001,
            rust_log: "info".to_string(),
            dev_tool_path: DEFAULT_DEV_TOOL_PATH.to_string(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_binds_all_interfaces_on_3001() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:3001");
    }

    #[test]
    fn test_env_or_falls_back_for_unset_key() {
        assert_eq!(env_or("EXAM_SCHEMA_TEST_UNSET_KEY", "fallback"), "fallback");
    }
}
