use crate::domain::model::CurrencySet;
use std::time::Duration;

/// Settings a front end hands to the change engine.
pub trait ConfigProvider: Send + Sync {
    fn currency(&self) -> &str;
    fn custom_denominations(&self) -> &str;
    fn output_format(&self) -> &str;
    fn delay(&self) -> Duration;
    fn max_amount(&self) -> i64;

    /// Extra named sets registered alongside the built-in ones.
    fn currency_sets(&self) -> &[CurrencySet] {
        &[]
    }
}
