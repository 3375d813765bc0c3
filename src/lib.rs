pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::report::{ChangeReport, OutputFormat};
pub use crate::config::Settings;
pub use crate::core::{
    compute_change, resolve_denominations, summarize, ChangeEngine, ChangeRequest,
    DenominationRegistry,
};
pub use crate::domain::model::{Breakdown, ChangeResult, CurrencySet, Denomination};
pub use crate::utils::error::{ChangeError, Result};
