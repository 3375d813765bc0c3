use crate::domain::model::{CurrencySet, Denomination, CUSTOM_SELECTOR};
use crate::utils::error::{ChangeError, Result};
use crate::utils::validation::parse_leading_int;

/// Lookup table of named coin sets.
#[derive(Debug, Clone)]
pub struct DenominationRegistry {
    sets: Vec<CurrencySet>,
}

impl Default for DenominationRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl DenominationRegistry {
    /// Registry holding the US, EU and UK sets.
    pub fn builtin() -> Self {
        Self {
            sets: CurrencySet::builtin(),
        }
    }

    /// Adds a set, replacing any existing set with the same name.
    pub fn register(&mut self, set: CurrencySet) -> Result<()> {
        if set.is_named(CUSTOM_SELECTOR) {
            return Err(ChangeError::ConfigValidationError {
                field: "currency_sets.name".to_string(),
                message: format!("'{}' is reserved for free-text denominations", CUSTOM_SELECTOR),
            });
        }
        if set.denominations.is_empty() {
            return Err(ChangeError::ConfigValidationError {
                field: format!("currency_sets.{}.denominations", set.name),
                message: "at least one denomination is required".to_string(),
            });
        }
        if let Some(bad) = set.denominations.iter().find(|d| **d <= 0) {
            return Err(ChangeError::InvalidConfigValueError {
                field: format!("currency_sets.{}.denominations", set.name),
                value: bad.to_string(),
                reason: "denominations must be positive".to_string(),
            });
        }

        tracing::debug!(name = %set.name, "registering currency set");
        self.sets.retain(|existing| !existing.is_named(&set.name));
        self.sets.push(set);
        Ok(())
    }

    pub fn get(&self, selector: &str) -> Option<&CurrencySet> {
        self.sets.iter().find(|set| set.is_named(selector))
    }

    pub fn sets(&self) -> &[CurrencySet] {
        &self.sets
    }

    /// Turns a selector plus optional custom text into a sorted, deduplicated
    /// list of positive denominations.
    ///
    /// `custom_text` is only read when `selector` is `Custom`.
    pub fn resolve(&self, selector: &str, custom_text: &str) -> Result<Vec<Denomination>> {
        let mut denominations = if selector.trim().eq_ignore_ascii_case(CUSTOM_SELECTOR) {
            parse_custom_denominations(custom_text)
        } else {
            let set = self
                .get(selector)
                .ok_or_else(|| ChangeError::UnknownCurrencySet {
                    name: selector.to_string(),
                })?;
            set.denominations.clone()
        };

        denominations.retain(|d| *d > 0);
        denominations.sort_unstable();
        denominations.dedup();

        if denominations.is_empty() {
            return Err(ChangeError::EmptyDenominationSet);
        }

        tracing::debug!(selector, ?denominations, "resolved denominations");
        Ok(denominations)
    }
}

/// Resolves against the built-in sets only.
pub fn resolve_denominations(selector: &str, custom_text: &str) -> Result<Vec<Denomination>> {
    DenominationRegistry::builtin().resolve(selector, custom_text)
}

fn parse_custom_denominations(text: &str) -> Vec<Denomination> {
    text.split(',')
        .map(str::trim)
        .filter_map(|token| match parse_leading_int(token) {
            Some(value) if value > 0 => Some(value),
            _ => {
                if !token.is_empty() {
                    tracing::trace!(token, "discarding custom denomination");
                }
                None
            }
        })
        .collect()
}
