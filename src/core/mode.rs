//! Display modes and currency pairs

use anyhow::{Result, anyhow};
use std::fmt::Display;
use std::str::FromStr;

const EXCHANGE_RATES: &str = "exchange-rates";
const CURRENCIES: &str = "currencies";
const BUY_PRICE_PREFIX: &str = "buy-price-";
const SELL_PRICE_PREFIX: &str = "sell-price-";

/// A `BASE-QUOTE` pair such as `BTC-USD`, kept verbatim for request paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyPair(String);

impl CurrencyPair {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn base(&self) -> &str {
        self.0.split('-').next().unwrap_or_default()
    }

    /// Second `-` separated component.
    pub fn quote(&self) -> &str {
        self.0.split('-').nth(1).unwrap_or_default()
    }
}

impl FromStr for CurrencyPair {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('-');
        match (parts.next(), parts.next()) {
            (Some(base), Some(quote)) if !base.is_empty() && !quote.is_empty() => {
                Ok(CurrencyPair(s.to_string()))
            }
            _ => Err(anyhow!("Invalid currency pair: {} (expected BASE-QUOTE)", s)),
        }
    }
}

impl Display for CurrencyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiMode {
    #[default]
    Currencies,
    ExchangeRates,
    BuyPrice(CurrencyPair),
    SellPrice(CurrencyPair),
}

// A pair that itself contains "buy-price-" or "sell-price-" can't be told
// apart from the prefix; the first matching prefix wins.
impl FromStr for UiMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == EXCHANGE_RATES {
            Ok(UiMode::ExchangeRates)
        } else if let Some(pair) = s.strip_prefix(BUY_PRICE_PREFIX) {
            Ok(UiMode::BuyPrice(pair.parse()?))
        } else if let Some(pair) = s.strip_prefix(SELL_PRICE_PREFIX) {
            Ok(UiMode::SellPrice(pair.parse()?))
        } else if s == CURRENCIES {
            Ok(UiMode::Currencies)
        } else {
            Err(anyhow!("Unknown mode: {}", s))
        }
    }
}

impl Display for UiMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UiMode::Currencies => f.write_str(CURRENCIES),
            UiMode::ExchangeRates => f.write_str(EXCHANGE_RATES),
            UiMode::BuyPrice(pair) => write!(f, "{BUY_PRICE_PREFIX}{pair}"),
            UiMode::SellPrice(pair) => write!(f, "{SELL_PRICE_PREFIX}{pair}"),
        }
    }
}
