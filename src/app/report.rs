use crate::app::format::{coin_shade, format_currency, CoinShade};
use crate::core::summary::summarize;
use crate::domain::model::{ChangeResult, Denomination};
use crate::utils::error::{ChangeError, Result};
use serde::Serialize;
use std::fmt::Write as _;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "json", "csv"];
}

impl FromStr for OutputFormat {
    type Err = ChangeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(ChangeError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: format!("Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownLine {
    pub denomination: Denomination,
    pub label: String,
    pub shade: CoinShade,
    pub count: usize,
}

/// A computed result together with everything needed to show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeReport {
    pub currency: String,
    pub symbol: Option<String>,
    pub target: Denomination,
    pub target_label: String,
    pub count: usize,
    pub coins: Vec<Denomination>,
    pub breakdown: Vec<BreakdownLine>,
}

impl ChangeReport {
    pub fn new(currency: &str, symbol: Option<&str>, result: &ChangeResult) -> Self {
        let breakdown = summarize(result)
            .iter_desc()
            .map(|(denomination, count)| BreakdownLine {
                denomination,
                label: format_currency(denomination, symbol),
                shade: coin_shade(currency, denomination),
                count,
            })
            .collect();

        Self {
            currency: currency.to_string(),
            symbol: symbol.map(str::to_string),
            target: result.target(),
            target_label: format_currency(result.target(), symbol),
            count: result.count(),
            coins: result.coins().to_vec(),
            breakdown,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Csv => self.to_csv(),
        }
    }

    fn to_text(&self) -> String {
        let mut out = String::new();
        let coins: Vec<String> = self.coins.iter().map(|c| c.to_string()).collect();

        // writing into a String cannot fail
        let _ = writeln!(out, "Target Amount:          {}", self.target_label);
        let _ = writeln!(out, "Minimum Coins Required: {}", self.count);
        let _ = writeln!(out, "Coins Used:             {}", coins.join(" "));
        let _ = writeln!(out, "Breakdown:");
        for line in &self.breakdown {
            let _ = writeln!(
                out,
                "  {:>10} coins ({}): {}",
                line.label, line.shade, line.count
            );
        }
        out
    }

    fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["denomination", "label", "count"])?;
        for line in &self.breakdown {
            writer.write_record([
                line.denomination.to_string(),
                line.label.clone(),
                line.count.to_string(),
            ])?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| ChangeError::IoError(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| ChangeError::ConfigError {
            message: format!("CSV output is not valid UTF-8: {}", e),
        })
    }
}
