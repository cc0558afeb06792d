//! Piles and the board that owns them.

pub mod board;
pub mod stack;

pub use board::{Board, BoardSnapshot};
pub use stack::{Stack, StackId, StackKind, FOUNDATION_COUNT, STACK_COUNT, TABLEAU_COUNT};
