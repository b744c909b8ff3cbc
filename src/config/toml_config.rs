use crate::core::DatasetProvider;
use crate::utils::error::{ClimateError, Result};
use crate::utils::validation::{
    validate_database_url, validate_date, validate_log_level, validate_positive_number,
    validate_range, validate_socket_addr, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub dataset: DatasetConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://Resources/hawaii.sqlite".to_string(),
            max_connections: 5,
        }
    }
}

/// Facts about the loaded dataset that are configured rather than read from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Most recent observation on record; the `End Date` of open-ended summaries.
    pub last_known_date: String,
    pub lookback_days: u32,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            last_known_date: "2017-08-23".to_string(),
            lookback_days: 365,
        }
    }
}

impl DatasetProvider for DatasetConfig {
    fn last_known_date(&self) -> &str {
        &self.last_known_date
    }

    fn lookback_days(&self) -> u32 {
        self.lookback_days
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl ServiceConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClimateError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ClimateError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATABASE_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn bind_address(&self) -> Result<SocketAddr> {
        validate_socket_addr("server.bind_address", &self.server.bind_address)
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        self.bind_address()?;
        validate_database_url("database.url", &self.database.url)?;
        validate_positive_number("database.max_connections", self.database.max_connections, 1)?;
        validate_date("dataset.last_known_date", &self.dataset.last_known_date)?;
        validate_range("dataset.lookback_days", self.dataset.lookback_days, 0, 36_600)?;
        validate_log_level("logging.level", &self.logging.level)?;
        Ok(())
    }
}
