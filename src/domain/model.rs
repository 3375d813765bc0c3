use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One coin face value in the smallest currency unit (cents, pennies).
pub type Denomination = i64;

/// Selector name that switches the resolver to free-text input.
pub const CUSTOM_SELECTOR: &str = "Custom";

/// A named, fixed list of denominations with an optional display symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySet {
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
    pub denominations: Vec<Denomination>,
}

impl CurrencySet {
    pub fn new(name: &str, symbol: Option<&str>, denominations: &[Denomination]) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.map(str::to_string),
            denominations: denominations.to_vec(),
        }
    }

    pub fn us() -> Self {
        Self::new("US", Some("$"), &[1, 5, 10, 25, 50, 100])
    }

    pub fn eu() -> Self {
        Self::new("EU", Some("€"), &[1, 2, 5, 10, 20, 50, 100, 200])
    }

    pub fn uk() -> Self {
        Self::new("UK", Some("£"), &[1, 2, 5, 10, 20, 50, 100, 200])
    }

    pub fn builtin() -> Vec<Self> {
        vec![Self::us(), Self::eu(), Self::uk()]
    }

    pub fn is_named(&self, selector: &str) -> bool {
        self.name.eq_ignore_ascii_case(selector.trim())
    }
}

/// Coins dispensed for one target, largest denomination first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeResult {
    target: Denomination,
    coins: Vec<Denomination>,
}

impl ChangeResult {
    pub(crate) fn new(target: Denomination, coins: Vec<Denomination>) -> Self {
        debug_assert_eq!(coins.iter().sum::<Denomination>(), target);
        Self { target, coins }
    }

    pub fn target(&self) -> Denomination {
        self.target
    }

    pub fn coins(&self) -> &[Denomination] {
        &self.coins
    }

    pub fn count(&self) -> usize {
        self.coins.len()
    }

    pub fn into_coins(self) -> Vec<Denomination> {
        self.coins
    }
}

/// Occurrence count per distinct denomination of a [`ChangeResult`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakdown {
    counts: BTreeMap<Denomination, usize>,
}

impl Breakdown {
    pub(crate) fn from_counts(counts: BTreeMap<Denomination, usize>) -> Self {
        Self { counts }
    }

    pub fn get(&self, denomination: Denomination) -> usize {
        self.counts.get(&denomination).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of coins across all denominations.
    pub fn total_coins(&self) -> usize {
        self.counts.values().sum()
    }

    /// Ascending by denomination.
    pub fn iter(&self) -> impl Iterator<Item = (Denomination, usize)> + '_ {
        self.counts.iter().map(|(d, n)| (*d, *n))
    }

    /// Descending by denomination, the order coins are dispensed in.
    pub fn iter_desc(&self) -> impl Iterator<Item = (Denomination, usize)> + '_ {
        self.counts.iter().rev().map(|(d, n)| (*d, *n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sets_are_ascending() {
        for set in CurrencySet::builtin() {
            assert!(set.denominations.windows(2).all(|w| w[0] < w[1]), "{}", set.name);
            assert_eq!(set.denominations[0], 1);
        }
    }

    #[test]
    fn test_is_named_ignores_case() {
        assert!(CurrencySet::us().is_named("us"));
        assert!(CurrencySet::uk().is_named(" UK "));
        assert!(!CurrencySet::eu().is_named("EUR"));
    }

    #[test]
    fn test_breakdown_orders() {
        let counts = BTreeMap::from([(1, 2), (25, 1), (50, 1)]);
        let breakdown = Breakdown::from_counts(counts);
        assert_eq!(breakdown.iter().map(|(d, _)| d).collect::<Vec<_>>(), vec![1, 25, 50]);
        assert_eq!(
            breakdown.iter_desc().collect::<Vec<_>>(),
            vec![(50, 1), (25, 1), (1, 2)]
        );
        assert_eq!(breakdown.total_coins(), 4);
        assert_eq!(breakdown.get(10), 0);
    }
}
