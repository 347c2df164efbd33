use crate::core::RangePolicy;
use crate::utils::error::{PanelError, Result};
use crate::utils::validation::{validate_one_of, validate_range, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_LOOKBACK_DAYS: i64 = 3650;
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default)]
    pub range: RangeConfig,
    pub page: Option<PageConfig>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeConfig {
    #[serde(default = "default_lookback_days")]
    pub lookback_days: i64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            lookback_days: default_lookback_days(),
        }
    }
}

fn default_lookback_days() -> i64 {
    RangePolicy::default().lookback_days
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl PanelConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PanelError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PanelError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PAGE_URL})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PanelError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn policy(&self) -> RangePolicy {
        RangePolicy {
            lookback_days: self.range.lookback_days,
        }
    }

    pub fn page_url(&self) -> Option<&str> {
        self.page.as_ref().map(|p| p.url.as_str())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.format.as_deref() == Some("json")
    }

    pub fn verbose_logs(&self) -> bool {
        matches!(self.logging.level.as_deref(), Some("debug") | Some("trace"))
    }
}

impl Validate for PanelConfig {
    fn validate(&self) -> Result<()> {
        validate_range(
            "range.lookback_days",
            self.range.lookback_days,
            0,
            MAX_LOOKBACK_DAYS,
        )?;

        if let Some(page) = &self.page {
            validate_url("page.url", &page.url)?;
        }

        if let Some(format) = &self.logging.format {
            validate_one_of("logging.format", format, &LOG_FORMATS)?;
        }

        if let Some(level) = &self.logging.level {
            validate_one_of(
                "logging.level",
                level,
                &["error", "warn", "info", "debug", "trace"],
            )?;
        }

        Ok(())
    }
}
