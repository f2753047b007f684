//! In-memory exchange used by unit tests

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use super::exchange::{CurrencyRecord, ExchangeApi, ExchangeRateTable, PriceQuote};
use super::mode::CurrencyPair;

#[derive(Default)]
pub struct StubExchange {
    pub currencies: Option<Vec<CurrencyRecord>>,
    pub rates: Option<ExchangeRateTable>,
    pub buy: HashMap<String, PriceQuote>,
    pub sell: HashMap<String, PriceQuote>,
    pub calls: Mutex<Vec<String>>,
}

impl StubExchange {
    pub fn with_currencies(mut self, currencies: &[(&str, &str, &str)]) -> Self {
        self.currencies = Some(
            currencies
                .iter()
                .map(|(id, name, min_size)| CurrencyRecord {
                    id: id.to_string(),
                    name: name.to_string(),
                    min_size: min_size.to_string(),
                })
                .collect(),
        );
        self
    }

    pub fn with_rates(mut self, rates: &[(&str, &str)]) -> Self {
        self.rates = Some(rates.iter().copied().collect());
        self
    }

    pub fn with_buy(mut self, pair: &str, amount: &str) -> Self {
        self.buy.insert(pair.to_string(), quote(amount));
        self
    }

    pub fn with_sell(mut self, pair: &str, amount: &str) -> Self {
        self.sell.insert(pair.to_string(), quote(amount));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

fn quote(amount: &str) -> PriceQuote {
    PriceQuote {
        amount: amount.to_string(),
        currency: String::new(),
    }
}

#[async_trait]
impl ExchangeApi for StubExchange {
    async fn currencies(&self) -> Result<Vec<CurrencyRecord>> {
        self.record("currencies".to_string());
        self.currencies
            .clone()
            .ok_or_else(|| anyhow!("currencies unavailable"))
    }

    async fn exchange_rates(&self) -> Result<ExchangeRateTable> {
        self.record("exchange-rates".to_string());
        self.rates
            .clone()
            .ok_or_else(|| anyhow!("exchange rates unavailable"))
    }

    async fn buy_price(&self, pair: &CurrencyPair) -> Result<PriceQuote> {
        self.record(format!("buy {pair}"));
        self.buy
            .get(pair.as_str())
            .cloned()
            .ok_or_else(|| anyhow!("no buy price for {}", pair))
    }

    async fn sell_price(&self, pair: &CurrencyPair) -> Result<PriceQuote> {
        self.record(format!("sell {pair}"));
        self.sell
            .get(pair.as_str())
            .cloned()
            .ok_or_else(|| anyhow!("no sell price for {}", pair))
    }
}
