//! Fetchers: one call per endpoint, failures become empty results

use tracing::error;

use super::exchange::{CurrencyRecord, ExchangeApi, ExchangeRateTable, PriceQuote};
use super::mode::CurrencyPair;

pub async fn fetch_currencies(api: &dyn ExchangeApi) -> Vec<CurrencyRecord> {
    api.currencies().await.unwrap_or_else(|e| {
        error!(error = %e, "Error fetching currency data");
        Vec::new()
    })
}

pub async fn fetch_exchange_rates(api: &dyn ExchangeApi) -> ExchangeRateTable {
    api.exchange_rates().await.unwrap_or_else(|e| {
        error!(error = %e, "Error fetching exchange rates");
        ExchangeRateTable::new()
    })
}

pub async fn fetch_buy_price(api: &dyn ExchangeApi, pair: &CurrencyPair) -> PriceQuote {
    api.buy_price(pair).await.unwrap_or_else(|e| {
        error!(error = %e, %pair, "Error fetching buy price");
        PriceQuote::empty()
    })
}

pub async fn fetch_sell_price(api: &dyn ExchangeApi, pair: &CurrencyPair) -> PriceQuote {
    api.sell_price(pair).await.unwrap_or_else(|e| {
        error!(error = %e, %pair, "Error fetching sell price");
        PriceQuote::empty()
    })
}
