use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::core::config::DEFAULT_USER_AGENT;
use crate::core::exchange::{CurrencyRecord, ExchangeApi, ExchangeRateTable, PriceQuote};
use crate::core::mode::CurrencyPair;

/// Public (unauthenticated) Coinbase v2 endpoints.
pub struct CoinbaseProvider {
    base_url: String,
    user_agent: String,
}

impl CoinbaseProvider {
    pub fn new(base_url: &str) -> Self {
        Self::with_user_agent(base_url, DEFAULT_USER_AGENT)
    }

    pub fn with_user_agent(base_url: &str, user_agent: &str) -> Self {
        CoinbaseProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: user_agent.to_string(),
        }
    }

    async fn get_data<T: DeserializeOwned + Send>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("Requesting {}", url);

        let client = reqwest::Client::builder()
            .user_agent(&self.user_agent)
            .build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for URL: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for endpoint: {}",
                response.status(),
                endpoint
            ));
        }

        let text = response.text().await?;
        let envelope: DataEnvelope<T> = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response for {}: {}", endpoint, e))?;
        Ok(envelope.data)
    }
}

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct RatesData {
    rates: ExchangeRateTable,
}

#[async_trait]
impl ExchangeApi for CoinbaseProvider {
    #[instrument(name = "CoinbaseCurrencies", skip(self))]
    async fn currencies(&self) -> Result<Vec<CurrencyRecord>> {
        self.get_data("/v2/currencies").await
    }

    #[instrument(name = "CoinbaseExchangeRates", skip(self))]
    async fn exchange_rates(&self) -> Result<ExchangeRateTable> {
        let data: RatesData = self.get_data("/v2/exchange-rates").await?;
        Ok(data.rates)
    }

    #[instrument(name = "CoinbaseBuyPrice", skip(self), fields(pair = %pair))]
    async fn buy_price(&self, pair: &CurrencyPair) -> Result<PriceQuote> {
        self.get_data(&format!("/v2/prices/{pair}/buy")).await
    }

    #[instrument(name = "CoinbaseSellPrice", skip(self), fields(pair = %pair))]
    async fn sell_price(&self, pair: &CurrencyPair) -> Result<PriceQuote> {
        self.get_data(&format!("/v2/prices/{pair}/sell")).await
    }
}
