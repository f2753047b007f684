use serde::Serialize;

/// A titled card with a single line of body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    title: String,
    content: String,
}

impl Card {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

pub fn create_card(title: impl Into<String>, content: impl Into<String>) -> Card {
    Card {
        title: title.into(),
        content: content.into(),
    }
}
