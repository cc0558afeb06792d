//! # klondike-engine
//!
//! A rule engine for single-player Klondike patience.
//!
//! The engine owns the thirteen piles (stock, waste, four foundations,
//! seven tableau columns) and answers the commands a game controller
//! issues: deal, move, draw, hint, auto-complete, undo. It holds no
//! rendering, timing, or persistence state - collaborators consume its
//! outputs (success flags, hint lists, layout snapshots) and keep their
//! own.
//!
//! ## Design Principles
//!
//! 1. **No exceptions for rule violations**: illegal moves, draws on
//!    empty piles, and commands outside the playing phase return
//!    `false`/`None`/empty. Panics are reserved for programmer errors
//!    such as a card missing from every pile.
//!
//! 2. **Explicit context over ambient state**: the playing/paused flag
//!    and progress counters are passed in via `RuleContext`, never read
//!    from shared globals.
//!
//! 3. **Deterministic enumeration**: hint order is fixed, so the same
//!    position always produces the same hint list and best move.
//!
//! 4. **Snapshot undo**: every move record carries its pre-move board
//!    position as a persistent-vector snapshot; undo is a restore.
//!
//! ## Modules
//!
//! - `core`: cards, configuration, rule context, deterministic RNG
//! - `stacks`: piles, placement rules, the board and its location index
//! - `rules`: single-card and run-move legality checks
//! - `moves`: move records and the bounded undo history
//! - `engine`: the command surface, hint search, layout interchange

pub mod core;
pub mod engine;
pub mod moves;
pub mod rules;
pub mod stacks;

// Re-export commonly used types
pub use crate::core::{
    shuffled_deck, standard_deck, Card, CardId, Color, DrawCount, EngineConfig, GamePhase,
    GameProgress, GameRng, Rank, RuleContext, Suit,
};

pub use crate::stacks::{Board, BoardSnapshot, Stack, StackId, StackKind};

pub use crate::rules::{validate_move, validate_run_move};

pub use crate::moves::{MoveHistory, MoveKind, MoveRecord};

pub use crate::engine::{
    find_cards_to_flip, find_foundation_moves, find_hints, is_game_blocked, suggest_best_move,
    BestMove, CardLayout, DrawOutcome, GameEngine, GameLayout, Hint,
};
