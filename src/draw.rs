//! Intention-seeded draw engine
//!
//! A draw selects a card index from the deck, "weighted" by the user's stated
//! intention: the intention text (and, by default, the current instant) is
//! hashed into the RNG seed, so the same intention at the same instant
//! reproduces the same draw while different intention text materially changes
//! which indices come out. The engine is behind a trait so the insertion side
//! can be exercised with a scripted engine in tests.

use chrono::{DateTime, SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::debug;

use crate::deck::{self, DeckError};

/// Errors from the draw engine
#[derive(Debug, Error)]
pub enum DrawError {
    #[error("Please enter an intention before drawing")]
    EmptyIntention,

    #[error("Deck size must be positive")]
    EmptyDeck,

    #[error("Cannot draw {count} distinct cards from a deck of {deck_size}")]
    CountExceedsDeck { count: usize, deck_size: usize },

    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Outcome of a single draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    /// Selected index in `[0, deck_size)`
    pub index: usize,
    /// Instant the draw occurred
    pub timestamp: DateTime<Utc>,
}

/// Outcome of a multi-card draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiDraw {
    pub indices: Vec<usize>,
    pub timestamp: DateTime<Utc>,
}

/// A source of intention-weighted draws
pub trait DrawEngine {
    /// Draw one index from `[0, deck_size)` for the given intention
    fn draw(&self, intention: &str, deck_size: usize) -> Result<Draw, DrawError>;

    /// Draw `count` indices; without duplicates this is a partial shuffle of
    /// the deck and requires `count <= deck_size`
    fn draw_multiple(
        &self,
        intention: &str,
        deck_size: usize,
        count: usize,
        allow_duplicates: bool,
    ) -> Result<MultiDraw, DrawError>;
}

/// The intention-seeded engine
///
/// Seed material is a SHA-256 digest over the trimmed intention, optionally the
/// draw instant (millisecond precision), and optionally a fresh entropy block.
/// With entropy disabled the draw is a pure function of
/// `(intention, deck_size, instant)`.
#[derive(Debug, Clone)]
pub struct IntentionRng {
    include_timestamp: bool,
    include_entropy: bool,
}

impl Default for IntentionRng {
    fn default() -> Self {
        Self {
            include_timestamp: true,
            include_entropy: false,
        }
    }
}

impl IntentionRng {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine seeded from the intention alone, independent of the clock
    pub fn intention_only() -> Self {
        Self {
            include_timestamp: false,
            include_entropy: false,
        }
    }

    /// Mix a fresh entropy block into every seed
    pub fn with_entropy() -> Self {
        Self {
            include_entropy: true,
            ..Self::default()
        }
    }

    fn seeded_rng(&self, intention: &str, at: DateTime<Utc>) -> StdRng {
        let mut hasher = Sha256::new();
        hasher.update(intention.as_bytes());
        if self.include_timestamp {
            hasher.update(at.timestamp_millis().to_le_bytes());
        }
        if self.include_entropy {
            hasher.update(rand::random::<[u8; 16]>());
        }
        let seed: [u8; 32] = hasher.finalize().into();
        StdRng::from_seed(seed)
    }

    fn check_inputs(intention: &str, deck_size: usize) -> Result<(), DrawError> {
        if intention.trim().is_empty() {
            return Err(DrawError::EmptyIntention);
        }
        if deck_size == 0 {
            return Err(DrawError::EmptyDeck);
        }
        Ok(())
    }

    /// Draw at an explicit instant (the deterministic core of [`DrawEngine::draw`])
    pub fn draw_at(&self, intention: &str, deck_size: usize, at: DateTime<Utc>) -> Result<Draw, DrawError> {
        Self::check_inputs(intention, deck_size)?;
        let mut rng = self.seeded_rng(intention.trim(), at);
        let index = rng.random_range(0..deck_size);
        debug!(index, deck_size, "drew card index");
        Ok(Draw { index, timestamp: at })
    }

    /// Multi-card draw at an explicit instant
    pub fn draw_multiple_at(
        &self,
        intention: &str,
        deck_size: usize,
        count: usize,
        allow_duplicates: bool,
        at: DateTime<Utc>,
    ) -> Result<MultiDraw, DrawError> {
        Self::check_inputs(intention, deck_size)?;
        let mut rng = self.seeded_rng(intention.trim(), at);

        let indices = if allow_duplicates {
            (0..count).map(|_| rng.random_range(0..deck_size)).collect()
        } else {
            if count > deck_size {
                return Err(DrawError::CountExceedsDeck { count, deck_size });
            }
            let mut all: Vec<usize> = (0..deck_size).collect();
            let (picked, _) = all.partial_shuffle(&mut rng, count);
            picked.to_vec()
        };

        debug!(?indices, deck_size, "drew card indices");
        Ok(MultiDraw { indices, timestamp: at })
    }
}

impl DrawEngine for IntentionRng {
    fn draw(&self, intention: &str, deck_size: usize) -> Result<Draw, DrawError> {
        self.draw_at(intention, deck_size, Utc::now())
    }

    fn draw_multiple(
        &self,
        intention: &str,
        deck_size: usize,
        count: usize,
        allow_duplicates: bool,
    ) -> Result<MultiDraw, DrawError> {
        self.draw_multiple_at(intention, deck_size, count, allow_duplicates, Utc::now())
    }
}

/// One completed draw with its card name resolved, immutable thereafter
#[derive(Debug, Clone, Serialize)]
pub struct DrawResult {
    pub intention: String,
    pub card_index: usize,
    pub card_name: String,
    pub timestamp: DateTime<Utc>,
}

impl DrawResult {
    /// Resolve a raw draw against the deck table
    pub fn from_draw(intention: impl Into<String>, draw: &Draw) -> Result<Self, DrawError> {
        let card_name = deck::card_name(draw.index)?.to_string();
        Ok(Self {
            intention: intention.into(),
            card_index: draw.index,
            card_name,
            timestamp: draw.timestamp,
        })
    }

    /// Timestamp as ISO-8601 with millisecond precision and `Z` suffix
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
