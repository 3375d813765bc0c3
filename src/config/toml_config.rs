use crate::app::report::OutputFormat;
use crate::domain::model::CurrencySet;
use crate::utils::error::{ChangeError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub currency_sets: Vec<CurrencySet>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub currency: Option<String>,
    pub custom: Option<String>,
    pub format: Option<String>,
    pub delay_ms: Option<u64>,
    pub max_amount: Option<i64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ChangeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ChangeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${COIN_CURRENCY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ChangeError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        let defaults = &self.defaults;

        if let Some(currency) = &defaults.currency {
            validation::validate_non_empty_string("defaults.currency", currency)?;
        }
        if let Some(format) = &defaults.format {
            validation::validate_one_of("defaults.format", format, &OutputFormat::NAMES)?;
        }
        if let Some(delay) = defaults.delay_ms {
            validation::validate_range("defaults.delay_ms", delay, 0, super::MAX_DELAY_MS)?;
        }
        if let Some(max_amount) = defaults.max_amount {
            validation::validate_positive_number("defaults.max_amount", max_amount, 1)?;
        }

        for set in &self.currency_sets {
            validation::validate_non_empty_string("currency_sets.name", &set.name)?;
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
