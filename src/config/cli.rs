use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "coin-change")]
#[command(about = "Calculate the minimum number of coins needed to make change")]
pub struct CliConfig {
    /// Amount in cents/pennies (e.g. 87 = 87¢)
    #[arg(short, long)]
    pub amount: Option<String>,

    /// Coin set: US, EU, UK, Custom, or a set from the config file
    #[arg(short, long)]
    pub currency: Option<String>,

    /// Comma-separated coin values used with --currency Custom
    #[arg(long)]
    pub custom: Option<String>,

    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output format: text, json or csv
    #[arg(short, long)]
    pub format: Option<String>,

    /// Pause before showing the result, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Largest amount accepted
    #[arg(long)]
    pub max_amount: Option<i64>,

    /// List the available coin sets and exit
    #[arg(long)]
    pub list_sets: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file, if any, then applies command-line overrides.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Settings::from_toml(file)
            }
            None => Settings::default(),
        };

        if let Some(currency) = &self.currency {
            settings.currency = currency.clone();
        }
        if let Some(custom) = &self.custom {
            settings.custom = custom.clone();
        }
        if let Some(format) = &self.format {
            settings.format = format.clone();
        }
        if let Some(delay_ms) = self.delay_ms {
            settings.delay_ms = delay_ms;
        }
        if let Some(max_amount) = self.max_amount {
            settings.max_amount = max_amount;
        }

        settings.validate()?;
        Ok(settings)
    }
}
