//! Exchange data model and the transport abstraction

use anyhow::Result;
use async_trait::async_trait;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::mode::CurrencyPair;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyRecord {
    pub id: String,
    pub name: String,
    pub min_size: String,
}

/// Currency code to rate, kept in the order the exchange sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExchangeRateTable(Vec<(String, String)>);

impl ExchangeRateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repeated code overwrites the earlier rate and keeps its position.
    fn upsert(&mut self, code: String, rate: String) {
        match self.0.iter_mut().find(|(c, _)| *c == code) {
            Some(entry) => entry.1 = rate,
            None => self.0.push((code, rate)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(c, r)| (c.as_str(), r.as_str()))
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.iter().find(|(c, _)| *c == code).map(|(_, r)| r)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ExchangeRateTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (code, rate) in iter {
            table.upsert(code.into(), rate.into());
        }
        table
    }
}

struct RateTableVisitor;

impl<'de> Visitor<'de> for RateTableVisitor {
    type Value = ExchangeRateTable;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of currency codes to rates")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut rates = ExchangeRateTable(Vec::with_capacity(access.size_hint().unwrap_or(0)));
        while let Some((code, rate)) = access.next_entry::<String, String>()? {
            rates.upsert(code, rate);
        }
        Ok(rates)
    }
}

impl<'de> Deserialize<'de> for ExchangeRateTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RateTableVisitor)
    }
}

/// A single buy or sell quote. Only `amount` is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub amount: String,
    #[serde(default)]
    pub currency: String,
}

impl PriceQuote {
    pub fn empty() -> Self {
        PriceQuote {
            amount: String::new(),
            currency: String::new(),
        }
    }
}

#[async_trait]
pub trait ExchangeApi: Send + Sync {
    async fn currencies(&self) -> Result<Vec<CurrencyRecord>>;
    async fn exchange_rates(&self) -> Result<ExchangeRateTable>;
    async fn buy_price(&self, pair: &CurrencyPair) -> Result<PriceQuote>;
    async fn sell_price(&self, pair: &CurrencyPair) -> Result<PriceQuote>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_table_keeps_response_order() {
        let json = r#"{"USD": "1.0", "EUR": "0.9", "AED": "3.67"}"#;
        let table: ExchangeRateTable = serde_json::from_str(json).unwrap();

        let codes: Vec<&str> = table.iter().map(|(c, _)| c).collect();
        assert_eq!(codes, vec!["USD", "EUR", "AED"]);
        assert_eq!(table.get("EUR"), Some("0.9"));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_rate_table_repeated_code_keeps_last_rate() {
        let json = r#"{"USD": "1.0", "EUR": "0.9", "USD": "2.0"}"#;
        let table: ExchangeRateTable = serde_json::from_str(json).unwrap();

        let entries: Vec<(&str, &str)> = table.iter().collect();
        assert_eq!(entries, vec![("USD", "2.0"), ("EUR", "0.9")]);
        assert_eq!(table.get("USD"), Some("2.0"));

        let collected: ExchangeRateTable = [("EUR", "0.9"), ("EUR", "0.8")].into_iter().collect();
        assert_eq!(collected.len(), 1);
        assert_eq!(collected.get("EUR"), Some("0.8"));
    }

    #[test]
    fn test_rate_table_rejects_non_string_rates() {
        let json = r#"{"USD": 1.0}"#;
        assert!(serde_json::from_str::<ExchangeRateTable>(json).is_err());
    }

    #[test]
    fn test_price_quote_without_currency() {
        let quote: PriceQuote = serde_json::from_str(r#"{"amount": "1800.50"}"#).unwrap();
        assert_eq!(quote.amount, "1800.50");
        assert!(quote.currency.is_empty());
    }
}
