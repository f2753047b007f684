use super::ui;
use crate::core::{Card, CardSink};
use anyhow::Result;
use comfy_table::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Cards,
    Json,
}

/// Terminal display container holding the cards of the last dispatch.
#[derive(Debug, Default)]
pub struct CardBoard {
    cards: Vec<Card>,
}

impl CardBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Cards => Ok(self.render_cards()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&self.cards)?),
        }
    }

    fn render_cards(&self) -> String {
        if self.cards.is_empty() {
            return ui::style_text("No results", ui::StyleType::Subtle);
        }

        self.cards
            .iter()
            .map(|card| {
                let mut table = ui::new_styled_table();
                table.set_header(vec![ui::header_cell(card.title())]);
                table.add_row(vec![Cell::new(card.content())]);
                table.to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl CardSink for CardBoard {
    fn replace_all(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }
}
