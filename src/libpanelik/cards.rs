use log::debug;
use serde::{Deserialize, Serialize};

/// A single picture card shown in the gallery.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    /// Search hint for a replacement picture. Never rendered.
    #[serde(default)]
    pub image_hint: String,
}

/// Buttons rendered on the gallery page. None of them are wired up.
#[derive(Debug, Clone, PartialEq)]
pub enum CardAction {
    Add,
    Edit(String),
    Delete(String),
}

#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<Card>,
}

impl Catalog {
    pub fn new(cards: Vec<Card>) -> Self {
        debug!("[Catalog] Loaded {} cards.", cards.len());
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Accepts a button press from the gallery and drops it.
    pub fn request(&self, action: CardAction) {
        debug!("[Catalog] Ignoring {:?}", action);
    }
}
