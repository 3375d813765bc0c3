//! Display helpers for coin values. Nothing here feeds back into the
//! reduction; these only consume its output.

use crate::domain::model::{CurrencySet, Denomination};
use serde::Serialize;
use std::fmt;

/// Minor units per major unit for every supported set.
const MINOR_UNITS: i64 = 100;

/// Formats a minor-unit value as `<symbol><major>.<minor>`, e.g. `$0.87`.
pub fn format_currency(value: Denomination, symbol: Option<&str>) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let abs = value.unsigned_abs();
    let units = MINOR_UNITS as u64;
    format!(
        "{}{}{}.{:02}",
        sign,
        symbol.unwrap_or(""),
        abs / units,
        abs % units
    )
}

/// Tint used when drawing a coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CoinShade {
    Copper,
    LightSilver,
    Silver,
    DarkSilver,
    Gold,
    Brass,
}

impl fmt::Display for CoinShade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CoinShade::Copper => "copper",
            CoinShade::LightSilver => "light silver",
            CoinShade::Silver => "silver",
            CoinShade::DarkSilver => "dark silver",
            CoinShade::Gold => "gold",
            CoinShade::Brass => "brass",
        };
        f.write_str(name)
    }
}

/// Picks a shade for `value` the way the coins of `set_name` actually look.
pub fn coin_shade(set_name: &str, value: Denomination) -> CoinShade {
    if set_name.eq_ignore_ascii_case("US") {
        match value {
            1 | 10 => return CoinShade::Silver,
            5 => return CoinShade::DarkSilver,
            25 | 50 => return CoinShade::LightSilver,
            100 => return CoinShade::Brass,
            _ => {}
        }
    } else if set_name.eq_ignore_ascii_case("EU") || set_name.eq_ignore_ascii_case("UK") {
        return match value {
            v if v <= 5 => CoinShade::Copper,
            v if v <= 50 => CoinShade::Gold,
            _ => CoinShade::LightSilver,
        };
    }

    match value {
        v if v < 5 => CoinShade::Silver,
        v if v < 25 => CoinShade::LightSilver,
        v if v < 100 => CoinShade::Gold,
        _ => CoinShade::Brass,
    }
}

/// Symbol for a selector, if the set has one.
pub fn symbol_for<'a>(sets: &'a [CurrencySet], selector: &str) -> Option<&'a str> {
    sets.iter()
        .find(|set| set.is_named(selector))
        .and_then(|set| set.symbol.as_deref())
}
