//! Tarot Practice - intention-seeded tarot draws recorded into markdown notes
//!
//! The core is a set of pure functions wrapped by a thin CLI + filesystem
//! adapter: an intention-seeded draw picks a card index, a template renders the
//! draw into a text block, and the insertion engine computes where that block
//! lands in a note. Notes are plain markdown files in a vault directory.
//!
//! # Modules
//!
//! - [`deck`] - The fixed 78-card table and index-to-name lookup
//! - [`draw`] - Draw engine trait, the intention-seeded RNG, draw results
//! - [`template`] - Placeholder rendering of draw results
//! - [`timefmt`] - Moment-style date pattern formatting
//! - [`insert`] - Append/prepend/heading insertion-point computation
//! - [`vault`] - Notes directory adapter
//! - [`session`] - One draw-and-insert operation
//! - [`config`] - Settings types, loading, and persistence
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod config;
pub mod deck;
pub mod draw;
pub mod insert;
pub mod session;
pub mod template;
pub mod timefmt;
pub mod vault;

// Re-export commonly used types
pub use config::Settings;
pub use deck::{DECK_SIZE, DeckError, RWS_CARDS, card_name};
pub use draw::{Draw, DrawEngine, DrawError, DrawResult, IntentionRng, MultiDraw};
pub use insert::InsertLocation;
pub use session::{DrawSession, EditorSurface, InsertOutcome, SessionError};
pub use template::{DEFAULT_TEMPLATE, render};
pub use vault::{NoteVault, VaultError};
