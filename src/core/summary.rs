use crate::domain::model::{Breakdown, ChangeResult};
use std::collections::BTreeMap;

/// Groups the dispensed coins by denomination.
pub fn summarize(result: &ChangeResult) -> Breakdown {
    let mut counts = BTreeMap::new();
    for coin in result.coins() {
        *counts.entry(*coin).or_insert(0) += 1;
    }
    Breakdown::from_counts(counts)
}
