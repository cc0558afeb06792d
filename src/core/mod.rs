//! Core types: cards, configuration, deterministic RNG.

pub mod card;
pub mod config;
pub mod rng;

pub use card::{
    shuffled_deck, standard_deck, Card, CardId, Color, Rank, Suit, DECK_SIZE, RANK_COUNT,
    SUIT_COUNT,
};
pub use config::{DrawCount, EngineConfig, GamePhase, GameProgress, RuleContext};
pub use rng::GameRng;
