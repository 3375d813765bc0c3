//! Greedy change-making.
//!
//! Takes as many of the largest denomination as fit, then moves to the next
//! smaller one. This is optimal for canonical coin systems (US, EU, UK) but
//! not in general: `{1, 3, 4}` targeting 6 gives `4 + 1 + 1`, not `3 + 3`.
//! That behaviour is intentional and must not be "fixed" here.

use crate::domain::model::{ChangeResult, Denomination};
use crate::utils::error::{ChangeError, Result};

/// Upper bound on the number of coins a single result may hold.
pub const MAX_COINS: u64 = 10_000_000;

/// Decomposes `target` into coins drawn from `denominations`.
///
/// Non-positive and duplicate denominations are ignored. Fails with
/// [`ChangeError::InexactChange`] rather than returning a partial result, and
/// with [`ChangeError::ChangeTooLarge`] when the result would exceed
/// [`MAX_COINS`] coins.
pub fn compute_change(target: i64, denominations: &[Denomination]) -> Result<ChangeResult> {
    if target <= 0 {
        return Err(ChangeError::InvalidAmount {
            input: target.to_string(),
        });
    }

    let mut sorted: Vec<Denomination> = denominations.iter().copied().filter(|d| *d > 0).collect();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    sorted.dedup();

    if sorted.is_empty() {
        return Err(ChangeError::EmptyDenominationSet);
    }

    let mut remaining = target;
    let mut takes = Vec::with_capacity(sorted.len());

    for denomination in sorted {
        if remaining == 0 {
            break;
        }
        let take = remaining / denomination;
        if take > 0 {
            tracing::trace!(denomination, take, "taking coins");
            takes.push((denomination, take as u64));
            remaining -= take * denomination;
        }
    }

    if remaining > 0 {
        tracing::debug!(target, remaining, "greedy reduction left a remainder");
        return Err(ChangeError::InexactChange {
            target,
            remainder: remaining,
        });
    }

    // each take is at most target, so the total fits in a u64
    let total: u64 = takes.iter().map(|(_, take)| take).sum();
    if total > MAX_COINS {
        return Err(ChangeError::ChangeTooLarge {
            target,
            coins: total,
            limit: MAX_COINS,
        });
    }

    let mut coins = Vec::with_capacity(total as usize);
    for (denomination, take) in takes {
        coins.extend(std::iter::repeat(denomination).take(take as usize));
    }

    Ok(ChangeResult::new(target, coins))
}
