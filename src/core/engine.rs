use crate::app::format::symbol_for;
use crate::app::report::ChangeReport;
use crate::config::DEFAULT_MAX_AMOUNT;
use crate::core::greedy::compute_change;
use crate::core::resolver::DenominationRegistry;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{ChangeError, Result};
use crate::utils::validation::parse_amount;
use std::time::Duration;

/// Raw user input for one calculation.
#[derive(Debug, Clone, Default)]
pub struct ChangeRequest {
    pub currency: String,
    pub custom_denominations: String,
    pub amount: String,
}

impl ChangeRequest {
    pub fn new(currency: &str, custom_denominations: &str, amount: &str) -> Self {
        Self {
            currency: currency.to_string(),
            custom_denominations: custom_denominations.to_string(),
            amount: amount.to_string(),
        }
    }
}

/// Runs resolve, reduce and summarize in sequence.
pub struct ChangeEngine {
    registry: DenominationRegistry,
    delay: Duration,
    max_amount: i64,
}

impl ChangeEngine {
    pub fn new(registry: DenominationRegistry) -> Self {
        Self {
            registry,
            delay: Duration::ZERO,
            max_amount: DEFAULT_MAX_AMOUNT,
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut registry = DenominationRegistry::builtin();
        for set in config.currency_sets() {
            registry.register(set.clone())?;
        }
        Ok(Self::new(registry)
            .with_delay(config.delay())
            .with_max_amount(config.max_amount()))
    }

    /// Pause applied by [`ChangeEngine::run`] before handing back a result.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_max_amount(mut self, max_amount: i64) -> Self {
        self.max_amount = max_amount;
        self
    }

    pub fn registry(&self) -> &DenominationRegistry {
        &self.registry
    }

    pub fn calculate(&self, request: &ChangeRequest) -> Result<ChangeReport> {
        let target = parse_amount(&request.amount)?;
        if target > self.max_amount {
            return Err(ChangeError::InvalidConfigValueError {
                field: "amount".to_string(),
                value: target.to_string(),
                reason: format!("Amount exceeds the configured maximum of {}", self.max_amount),
            });
        }

        let denominations = self
            .registry
            .resolve(&request.currency, &request.custom_denominations)?;
        let result = compute_change(target, &denominations)?;

        tracing::debug!(
            currency = %request.currency,
            target,
            count = result.count(),
            "computed change"
        );

        let symbol = symbol_for(self.registry.sets(), &request.currency);
        Ok(ChangeReport::new(&request.currency, symbol, &result))
    }

    /// Same as [`ChangeEngine::calculate`], then waits out the configured
    /// delay. The delay never changes the result.
    pub async fn run(&self, request: &ChangeRequest) -> Result<ChangeReport> {
        tracing::info!("Calculating change for {} ({})", request.amount.trim(), request.currency);

        let report = self.calculate(request);

        if !self.delay.is_zero() {
            tracing::debug!("Holding result for {:?}", self.delay);
            tokio::time::sleep(self.delay).await;
        }

        match &report {
            Ok(report) => tracing::info!("Dispensed {} coins", report.count),
            Err(e) => tracing::warn!("Calculation failed: {}", e),
        }
        report
    }
}

impl Default for ChangeEngine {
    fn default() -> Self {
        Self::new(DenominationRegistry::builtin())
    }
}
