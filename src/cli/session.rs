use super::board::{CardBoard, OutputFormat};
use super::ui;
use crate::core::{ExchangeApi, UiMode, dispatch, dispatch_selected, initial_mode};
use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

const HELP: &str = "\
Type a query and press Enter to search the selected mode.
  :mode <value> [query]
                  select currencies, exchange-rates, buy-price-<PAIR> or sell-price-<PAIR>,
                  searching with query
  :help           show this help
  :quit           exit";

/// Interactive state: the selected mode, the search input and the board.
pub struct Session<'a> {
    api: &'a dyn ExchangeApi,
    selected: Option<UiMode>,
    input: String,
    board: CardBoard,
}

impl<'a> Session<'a> {
    pub fn new(api: &'a dyn ExchangeApi, selected: Option<UiMode>) -> Self {
        Session {
            api,
            selected,
            input: String::new(),
            board: CardBoard::new(),
        }
    }

    pub fn selected(&self) -> Option<&UiMode> {
        self.selected.as_ref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn board(&self) -> &CardBoard {
        &self.board
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// First render: all currencies, regardless of the selection.
    pub async fn load(&mut self) {
        let spinner = ui::new_spinner("Fetching...");
        dispatch(self.api, &initial_mode(), "", &mut self.board).await;
        spinner.finish_and_clear();
    }

    /// Searches the selected mode with the current input, then clears the input.
    /// Returns false when nothing is selected.
    pub async fn search(&mut self) -> bool {
        let query = std::mem::take(&mut self.input);
        let spinner = ui::new_spinner("Fetching...");
        let acted =
            dispatch_selected(self.api, self.selected.as_ref(), &query, &mut self.board).await;
        spinner.finish_and_clear();
        acted
    }

    /// Selects a mode from its selector value and renders it with the current input.
    pub async fn select(&mut self, value: &str) -> Result<()> {
        let mode: UiMode = value.parse()?;
        debug!(%mode, "Mode selected");
        let spinner = ui::new_spinner("Fetching...");
        dispatch(self.api, &mode, &self.input, &mut self.board).await;
        spinner.finish_and_clear();
        self.selected = Some(mode);
        Ok(())
    }

    /// Reads commands and queries line by line until EOF or `:quit`.
    pub async fn run_repl<R, W>(
        &mut self,
        reader: R,
        out: &mut W,
        format: OutputFormat,
    ) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        writeln!(out, "{}", self.board.render(format)?)?;

        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            let command = line.trim_start();
            match command.split_once(' ').unwrap_or((command.trim_end(), "")) {
                (":quit" | ":q", _) => break,
                (":help", _) => {
                    writeln!(out, "{HELP}")?;
                    continue;
                }
                (":mode", args) => {
                    let (value, query) = args.trim_start().split_once(' ').unwrap_or((args, ""));
                    let previous = std::mem::replace(&mut self.input, query.to_string());
                    if let Err(e) = self.select(value.trim()).await {
                        self.input = previous;
                        warn!(error = %e, "Ignoring mode selection");
                        let message = ui::style_text(&e.to_string(), ui::StyleType::Error);
                        writeln!(out, "{message}")?;
                        continue;
                    }
                }
                _ => {
                    self.set_input(&line);
                    if !self.search().await {
                        continue;
                    }
                }
            }
            if let Some(mode) = &self.selected {
                writeln!(out, "{}", ui::style_text(&mode.to_string(), ui::StyleType::Title))?;
            }
            writeln!(out, "{}", self.board.render(format)?)?;
        }
        Ok(())
    }
}
