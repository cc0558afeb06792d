//! The engine command surface, hint search, and layout interchange.

pub mod game;
pub mod hints;
pub mod layout;

pub use game::{DrawOutcome, GameEngine};
pub use hints::{
    find_cards_to_flip, find_foundation_moves, find_hints, is_game_blocked, suggest_best_move,
    BestMove, Hint,
};
pub use layout::{CardLayout, GameLayout};
