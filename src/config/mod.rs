#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::app::report::OutputFormat;
use crate::domain::model::CurrencySet;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_CURRENCY: &str = "US";
pub const DEFAULT_MAX_AMOUNT: i64 = 1_000_000;
pub const MAX_DELAY_MS: u64 = 10_000;

/// Effective settings after merging the config file and command-line flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub currency: String,
    pub custom: String,
    pub format: String,
    pub delay_ms: u64,
    pub max_amount: i64,
    pub currency_sets: Vec<CurrencySet>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            custom: String::new(),
            format: "text".to_string(),
            delay_ms: 0,
            max_amount: DEFAULT_MAX_AMOUNT,
            currency_sets: Vec::new(),
        }
    }
}

impl Settings {
    /// Starts from defaults and applies whatever the file sets.
    pub fn from_toml(config: TomlConfig) -> Self {
        let mut settings = Self::default();
        let defaults = config.defaults;
        if let Some(currency) = defaults.currency {
            settings.currency = currency;
        }
        if let Some(custom) = defaults.custom {
            settings.custom = custom;
        }
        if let Some(format) = defaults.format {
            settings.format = format;
        }
        if let Some(delay_ms) = defaults.delay_ms {
            settings.delay_ms = delay_ms;
        }
        if let Some(max_amount) = defaults.max_amount {
            settings.max_amount = max_amount;
        }
        settings.currency_sets = config.currency_sets;
        settings
    }

    pub fn output(&self) -> Result<OutputFormat> {
        self.output_format().parse()
    }
}

impl ConfigProvider for Settings {
    fn currency(&self) -> &str {
        &self.currency
    }

    fn custom_denominations(&self) -> &str {
        &self.custom
    }

    fn output_format(&self) -> &str {
        &self.format
    }

    fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    fn max_amount(&self) -> i64 {
        self.max_amount
    }

    fn currency_sets(&self) -> &[CurrencySet] {
        &self.currency_sets
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("currency", &self.currency)?;
        validation::validate_one_of("format", &self.format, &OutputFormat::NAMES)?;
        validation::validate_range("delay_ms", self.delay_ms, 0, MAX_DELAY_MS)?;
        validation::validate_positive_number("max_amount", self.max_amount, 1)?;
        Ok(())
    }
}
