//! The Rider-Waite-Smith deck table
//!
//! A fixed ordered mapping from card index to display name: 22 major arcana in
//! canonical order, then the four 14-card suits (Wands, Cups, Swords, Pentacles),
//! each Ace..King. Persisted draw records store a bare index, so reordering or
//! resizing this table is a breaking change.

use thiserror::Error;

/// Number of cards in the deck
pub const DECK_SIZE: usize = 78;

/// Errors from card lookup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("Invalid card index: {index}. Must be between 0 and {}", DECK_SIZE - 1)]
    OutOfRange { index: usize },
}

/// Card names indexed 0-77
pub const RWS_CARDS: [&str; DECK_SIZE] = [
    // Major Arcana (0-21)
    "The Fool",
    "The Magician",
    "The High Priestess",
    "The Empress",
    "The Emperor",
    "The Hierophant",
    "The Lovers",
    "The Chariot",
    "Strength",
    "The Hermit",
    "Wheel of Fortune",
    "Justice",
    "The Hanged Man",
    "Death",
    "Temperance",
    "The Devil",
    "The Tower",
    "The Star",
    "The Moon",
    "The Sun",
    "Judgement",
    "The World",
    // Wands (22-35)
    "Ace of Wands",
    "Two of Wands",
    "Three of Wands",
    "Four of Wands",
    "Five of Wands",
    "Six of Wands",
    "Seven of Wands",
    "Eight of Wands",
    "Nine of Wands",
    "Ten of Wands",
    "Page of Wands",
    "Knight of Wands",
    "Queen of Wands",
    "King of Wands",
    // Cups (36-49)
    "Ace of Cups",
    "Two of Cups",
    "Three of Cups",
    "Four of Cups",
    "Five of Cups",
    "Six of Cups",
    "Seven of Cups",
    "Eight of Cups",
    "Nine of Cups",
    "Ten of Cups",
    "Page of Cups",
    "Knight of Cups",
    "Queen of Cups",
    "King of Cups",
    // Swords (50-63)
    "Ace of Swords",
    "Two of Swords",
    "Three of Swords",
    "Four of Swords",
    "Five of Swords",
    "Six of Swords",
    "Seven of Swords",
    "Eight of Swords",
    "Nine of Swords",
    "Ten of Swords",
    "Page of Swords",
    "Knight of Swords",
    "Queen of Swords",
    "King of Swords",
    // Pentacles (64-77)
    "Ace of Pentacles",
    "Two of Pentacles",
    "Three of Pentacles",
    "Four of Pentacles",
    "Five of Pentacles",
    "Six of Pentacles",
    "Seven of Pentacles",
    "Eight of Pentacles",
    "Nine of Pentacles",
    "Ten of Pentacles",
    "Page of Pentacles",
    "Knight of Pentacles",
    "Queen of Pentacles",
    "King of Pentacles",
];

/// Resolve a card index to its display name
///
/// An out-of-range index is an invariant violation on the caller's side, not a
/// user-facing condition: draw engines are contracted to return indices in
/// `[0, deck_size)`.
pub fn card_name(index: usize) -> Result<&'static str, DeckError> {
    RWS_CARDS.get(index).copied().ok_or(DeckError::OutOfRange { index })
}
