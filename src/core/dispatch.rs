//! Maps a display mode and search query to a fetch, a filter and a set of cards

use tracing::{debug, instrument};

use super::card::{Card, create_card};
use super::exchange::ExchangeApi;
use super::fetch;
use super::filter::{filter_currencies, matches_query};
use super::mode::UiMode;

/// The display container. Every dispatch replaces its contents wholesale.
pub trait CardSink {
    fn replace_all(&mut self, cards: Vec<Card>);
}

impl CardSink for Vec<Card> {
    fn replace_all(&mut self, cards: Vec<Card>) {
        *self = cards;
    }
}

/// Mode rendered on first load, before any selection is made.
pub fn initial_mode() -> UiMode {
    UiMode::Currencies
}

/// Builds the cards for `mode` and `query`. Price modes ignore the query.
pub async fn render_cards(api: &dyn ExchangeApi, mode: &UiMode, query: &str) -> Vec<Card> {
    match mode {
        UiMode::Currencies => {
            let currencies = fetch::fetch_currencies(api).await;
            filter_currencies(&currencies, query)
                .into_iter()
                .map(|c| {
                    create_card(
                        format!("{} ({})", c.name, c.id),
                        format!("Min Size: {}", c.min_size),
                    )
                })
                .collect()
        }
        UiMode::ExchangeRates => {
            let rates = fetch::fetch_exchange_rates(api).await;
            rates
                .iter()
                .filter(|(code, _)| matches_query(code, query))
                .map(|(code, rate)| create_card(code, format!("Rate: {rate}")))
                .collect()
        }
        UiMode::BuyPrice(pair) => {
            let quote = fetch::fetch_buy_price(api, pair).await;
            vec![create_card(
                format!("{} Buy Price", pair.quote()),
                format!("Amount: {}", quote.amount),
            )]
        }
        UiMode::SellPrice(pair) => {
            let quote = fetch::fetch_sell_price(api, pair).await;
            vec![create_card(
                format!("{} Sell Price", pair.quote()),
                format!("Amount: {}", quote.amount),
            )]
        }
    }
}

/// Fetches, renders and replaces the sink's contents.
///
/// The sink is borrowed mutably for the whole fetch, so two dispatches can
/// never target the same sink at once. A caller that wants overlapping
/// requests has to give each its own sink, and whichever it copies last wins.
#[instrument(name = "Dispatch", skip(api, mode, sink), fields(mode = %mode))]
pub async fn dispatch(
    api: &dyn ExchangeApi,
    mode: &UiMode,
    query: &str,
    sink: &mut dyn CardSink,
) {
    let cards = render_cards(api, mode, query).await;
    debug!(count = cards.len(), "Rendering cards");
    sink.replace_all(cards);
}

/// Like [`dispatch`], but does nothing when no mode is selected.
pub async fn dispatch_selected(
    api: &dyn ExchangeApi,
    mode: Option<&UiMode>,
    query: &str,
    sink: &mut dyn CardSink,
) -> bool {
    match mode {
        Some(mode) => {
            dispatch(api, mode, query, sink).await;
            true
        }
        None => {
            debug!("No mode selected, display left untouched");
            false
        }
    }
}
