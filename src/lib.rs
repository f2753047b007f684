pub mod cli;
pub mod core;
pub mod providers;

use crate::cli::{CardBoard, OutputFormat, Session, ui};
use crate::core::config::AppConfig;
use crate::core::{CurrencyPair, UiMode, dispatch, initial_mode};
use crate::providers::CoinbaseProvider;
use anyhow::Result;
use std::io::Write;
use tracing::{debug, info};

pub enum AppCommand {
    /// Initial load: every currency, no query
    Load,
    Currencies { query: String },
    Rates { query: String },
    Buy { pair: String },
    Sell { pair: String },
    /// A raw selector value such as `buy-price-BTC-USD`
    Show { selector: String, query: String },
    Interactive,
}

impl AppCommand {
    fn into_mode(self) -> Result<(UiMode, String)> {
        Ok(match self {
            AppCommand::Load => (initial_mode(), String::new()),
            AppCommand::Currencies { query } => (UiMode::Currencies, query),
            AppCommand::Rates { query } => (UiMode::ExchangeRates, query),
            AppCommand::Buy { pair } => {
                (UiMode::BuyPrice(pair.parse::<CurrencyPair>()?), String::new())
            }
            AppCommand::Sell { pair } => {
                (UiMode::SellPrice(pair.parse::<CurrencyPair>()?), String::new())
            }
            AppCommand::Show { selector, query } => (selector.parse()?, query),
            AppCommand::Interactive => anyhow::bail!("Interactive sessions have no single mode"),
        })
    }
}

pub async fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    info!("coincards starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    execute(command, &config, format, &mut std::io::stdout()).await
}

/// Runs `command` against the configured exchange, writing cards to `out`.
pub async fn execute<W: Write>(
    command: AppCommand,
    config: &AppConfig,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let (base_url, user_agent) = config.coinbase();
    let provider = CoinbaseProvider::with_user_agent(base_url, user_agent);

    if let AppCommand::Interactive = command {
        let mut session = Session::new(&provider, Some(config.default_mode()?));
        session.load().await;
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        return session.run_repl(stdin, out, format).await;
    }

    let (mode, query) = command.into_mode()?;
    let mut board = CardBoard::new();
    let spinner = ui::new_spinner("Fetching...");
    dispatch(&provider, &mode, &query, &mut board).await;
    spinner.finish_and_clear();

    writeln!(out, "{}", board.render(format)?)?;
    Ok(())
}
