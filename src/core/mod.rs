//! Core abstractions: data model, fetchers, filter and dispatcher

pub mod card;
pub mod config;
pub mod dispatch;
pub mod exchange;
pub mod fetch;
pub mod filter;
pub mod log;
pub mod mode;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types for cleaner imports
pub use card::{Card, create_card};
pub use dispatch::{CardSink, dispatch, dispatch_selected, initial_mode};
pub use exchange::{CurrencyRecord, ExchangeApi, ExchangeRateTable, PriceQuote};
pub use mode::{CurrencyPair, UiMode};
